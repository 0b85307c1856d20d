use crate::grid::{Cell, Grid, GridError};
use regex::Regex;
use std::io::{self, BufRead};
use std::sync::OnceLock;
use thiserror::Error;

/// Everything that can go wrong while reading a grid.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("could not read input")]
    Io(#[from] io::Error),
    #[error("line {line}: `{token}` is not an integer")]
    InvalidToken { line: usize, token: String },
    #[error("line {line}: {value} is not a cell value, expected 0 or 1")]
    NotBinary { line: usize, value: i64 },
    #[error("line {line}: malformed grid")]
    Grid { line: usize, source: GridError },
    #[error("line {line}: expected a `<rows> <cols>` header, found `{text}`")]
    BadHeader { line: usize, text: String },
    #[error("expected {expected} rows but the grid ended after {found}")]
    Truncated { expected: usize, found: usize },
}

/// Parses one line of whitespace-separated cell values.
///
/// # Arguments
/// * `text` - The contents of the line.
/// * `line` - The 1-based line number, used in errors.
pub fn parse_row(text: &str, line: usize) -> Result<Vec<Cell>, ReadError> {
    text.split_whitespace()
        .map(|token| {
            let value: i64 = token.parse().map_err(|_| ReadError::InvalidToken {
                line,
                token: token.to_string(),
            })?;
            Cell::from_value(value).ok_or(ReadError::NotBinary { line, value })
        })
        .collect()
}

fn header_pattern() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| Regex::new(r"^\s*(\d+)\s+(\d+)\s*$").unwrap())
}

/// Reads grids one after another from line-oriented text.
pub struct GridReader<R> {
    input: R,
    line: usize,
}

impl<R: BufRead> GridReader<R> {
    pub fn new(input: R) -> GridReader<R> {
        GridReader { input, line: 0 }
    }

    /// Reads rows until a blank line or the end of input, then freezes them into a grid.
    pub fn read_grid(&mut self) -> Result<Grid, ReadError> {
        let first_line = self.line + 1;
        let mut rows = Vec::new();

        while let Some(text) = self.next_line()? {
            if text.trim().is_empty() {
                break;
            }
            rows.push(parse_row(&text, self.line)?);
        }

        Grid::from_rows(rows).map_err(|source| self.grid_error(first_line, source))
    }

    /// Reads a `<rows> <cols>` header followed by exactly `rows` rows of `cols` values.
    /// Blank lines before the header are skipped.
    pub fn read_sized_grid(&mut self) -> Result<Grid, ReadError> {
        let header = loop {
            match self.next_line()? {
                Some(text) if text.trim().is_empty() => continue,
                Some(text) => break text,
                None => {
                    return Err(ReadError::Grid {
                        line: self.line,
                        source: GridError::Empty,
                    })
                }
            }
        };

        let captures = header_pattern()
            .captures(&header)
            .ok_or_else(|| ReadError::BadHeader {
                line: self.line,
                text: header.trim().to_string(),
            })?;
        let (height, width) = match (
            captures[1].parse::<usize>(),
            captures[2].parse::<usize>(),
        ) {
            (Ok(height), Ok(width)) => (height, width),
            _ => {
                return Err(ReadError::BadHeader {
                    line: self.line,
                    text: header.trim().to_string(),
                })
            }
        };

        if height == 0 || width == 0 {
            return Err(ReadError::Grid {
                line: self.line,
                source: GridError::Empty,
            });
        }

        let first_line = self.line + 1;
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        while rows.len() < height {
            let text = match self.next_line()? {
                Some(text) if !text.trim().is_empty() => text,
                _ => {
                    return Err(ReadError::Truncated {
                        expected: height,
                        found: rows.len(),
                    })
                }
            };

            let row = parse_row(&text, self.line)?;
            if row.len() != width {
                return Err(ReadError::Grid {
                    line: self.line,
                    source: GridError::Ragged {
                        row: rows.len(),
                        expected: width,
                        found: row.len(),
                    },
                });
            }
            rows.push(row);
        }

        Grid::from_rows(rows).map_err(|source| self.grid_error(first_line, source))
    }

    fn next_line(&mut self) -> Result<Option<String>, ReadError> {
        let mut text = String::new();
        if self.input.read_line(&mut text)? == 0 {
            return Ok(None);
        }
        self.line += 1;

        let trimmed = text.trim_end_matches(['\n', '\r']).len();
        text.truncate(trimmed);
        Ok(Some(text))
    }

    fn grid_error(&self, first_line: usize, source: GridError) -> ReadError {
        let line = match source {
            GridError::Ragged { row, .. } => first_line + row,
            GridError::Empty => self.line,
        };
        ReadError::Grid { line, source }
    }
}
