use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single cell of a generation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(into = "u8")]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    /// Converts an input value into a cell. Only `0` and `1` are cells.
    pub fn from_value(value: i64) -> Option<Cell> {
        match value {
            0 => Some(Cell::Dead),
            1 => Some(Cell::Alive),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        match self {
            Cell::Dead => 0,
            Cell::Alive => 1,
        }
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell.value()
    }
}

/// Reasons a set of rows cannot be frozen into a grid.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("the grid has no cells")]
    Empty,
    #[error("row {} has {} cells but the first row has {}", .row + 1, .found, .expected)]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// An immutable, rectangular, non-empty grid of cells stored row-major.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Freezes a list of rows into a grid.
    ///
    /// # Arguments
    /// * `rows` - The rows of the grid, top to bottom. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Grid, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::Empty);
        }

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != width)
        {
            return Err(GridError::Ragged {
                row,
                expected: width,
                found,
            });
        }

        let height = rows.len();
        Ok(Grid {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Builds a grid of the given size where every cell is computed by `cell_at(row, col)`.
    pub(crate) fn from_fn(
        width: usize,
        height: usize,
        mut cell_at: impl FnMut(usize, usize) -> Cell,
    ) -> Grid {
        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                cells.push(cell_at(row, col));
            }
        }

        Grid {
            width,
            height,
            cells,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col).copied()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn same_dimensions(&self, other: &Grid) -> bool {
        self.width == other.width && self.height == other.height
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Counts the live cells in the 8 directions around the given coordinate.
    /// Coordinates outside the grid are not wrapped and count as dead.
    pub fn live_neighbors(&self, row: usize, col: usize) -> usize {
        let mut count = 0;

        for i in -1..=1 {
            for j in -1..=1 {
                if i == 0 && j == 0 {
                    continue;
                }

                let n_row = row as isize + i;
                let n_col = col as isize + j;

                // Skip if the coordinate is out of bounds
                if n_row < 0
                    || n_row >= self.height as isize
                    || n_col < 0
                    || n_col >= self.width as isize
                {
                    continue;
                }

                if self
                    .get(n_row as usize, n_col as usize)
                    .is_some_and(Cell::is_alive)
                {
                    count += 1;
                }
            }
        }

        count
    }
}

impl fmt::Display for Grid {
    /// One row per line, every value followed by a space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{} ", cell.value())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[u8]]) -> Grid {
        Grid::from_rows(
            rows.iter()
                .map(|row| {
                    row.iter()
                        .map(|&value| Cell::from_value(value as i64).unwrap())
                        .collect()
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn when_building_a_grid_from_rows_it_has_the_correct_width_and_height() {
        let grid = grid(&[&[0, 1, 0], &[1, 1, 1]]);

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.population(), 4);
    }

    #[test]
    fn when_getting_a_cell_by_row_and_col_the_correct_cell_is_returned() {
        let grid = grid(&[&[0, 1], &[1, 0]]);

        assert_eq!(grid.get(0, 0), Some(Cell::Dead));
        assert_eq!(grid.get(0, 1), Some(Cell::Alive));
        assert_eq!(grid.get(1, 0), Some(Cell::Alive));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn when_rows_have_different_lengths_the_grid_is_rejected() {
        let rows = vec![vec![Cell::Dead, Cell::Dead], vec![Cell::Alive]];

        assert_eq!(
            Grid::from_rows(rows),
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn when_there_are_no_rows_or_no_columns_the_grid_is_rejected() {
        assert_eq!(Grid::from_rows(vec![]), Err(GridError::Empty));
        assert_eq!(Grid::from_rows(vec![vec![]]), Err(GridError::Empty));
    }

    #[test]
    fn when_counting_neighbors_cells_outside_the_grid_are_not_counted() {
        let grid = grid(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]]);

        assert_eq!(grid.live_neighbors(0, 0), 3);
        assert_eq!(grid.live_neighbors(0, 1), 5);
        assert_eq!(grid.live_neighbors(1, 1), 8);
        assert_eq!(grid.live_neighbors(2, 2), 3);
    }

    #[test]
    fn when_counting_neighbors_the_cell_itself_is_not_counted() {
        let grid = grid(&[&[1]]);

        assert_eq!(grid.live_neighbors(0, 0), 0);
    }

    #[test]
    fn when_displaying_a_grid_each_value_is_followed_by_a_space() {
        let grid = grid(&[&[0, 1], &[1, 0]]);

        assert_eq!(grid.to_string(), "0 1 \n1 0 \n");
    }

    #[test]
    fn when_converting_values_only_zero_and_one_are_cells() {
        assert_eq!(Cell::from_value(0), Some(Cell::Dead));
        assert_eq!(Cell::from_value(1), Some(Cell::Alive));
        assert_eq!(Cell::from_value(2), None);
        assert_eq!(Cell::from_value(-1), None);
    }

    #[test]
    fn when_serializing_cells_they_are_written_as_numbers() {
        let json = serde_json::to_string(&[Cell::Alive, Cell::Dead]).unwrap();

        assert_eq!(json, "[1,0]");
    }

    #[test]
    fn when_rows_are_ragged_the_message_counts_rows_from_one() {
        let error = GridError::Ragged {
            row: 1,
            expected: 2,
            found: 1,
        };

        assert_eq!(
            error.to_string(),
            "row 2 has 1 cells but the first row has 2"
        );
    }
}
