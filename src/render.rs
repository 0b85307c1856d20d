use crate::grid::{Cell, Grid};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};

/// How grids are drawn to the terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Style {
    /// Values only, one row per line.
    #[default]
    Plain,
    /// Same characters as `Plain`, with live cells highlighted.
    Color,
}

impl Style {
    /// Falls back to `Plain` when the output is not a terminal.
    pub fn for_output(self, is_terminal: bool) -> Style {
        if is_terminal {
            self
        } else {
            Style::Plain
        }
    }
}

fn cell_to_color(cell: Cell) -> Color {
    match cell {
        Cell::Alive => Color::Green,
        Cell::Dead => Color::DarkGrey,
    }
}

/// Writes a grid with every value followed by a space and one row per line.
pub fn write_grid<W: Write>(out: &mut W, grid: &Grid, style: Style) -> io::Result<()> {
    match style {
        Style::Plain => write!(out, "{}", grid),
        Style::Color => {
            for row in grid.rows() {
                for &cell in row {
                    queue!(
                        out,
                        SetForegroundColor(cell_to_color(cell)),
                        Print(cell.value()),
                        ResetColor,
                        Print(' ')
                    )?;
                }
                queue!(out, Print('\n'))?;
            }
            Ok(())
        }
    }
}

/// Writes a label line followed by the grid.
pub fn write_labeled<W: Write>(
    out: &mut W,
    label: &str,
    grid: &Grid,
    style: Style,
) -> io::Result<()> {
    writeln!(out, "{}:", label)?;
    write_grid(out, grid, style)
}
