use crate::grid::{Cell, Grid};

/// Computes the next generation of a grid under B3/S23 with a fixed, non-wrapping border.
///
/// Always returns a new grid with the same dimensions as `grid`.
pub fn next_generation(grid: &Grid) -> Grid {
    Grid::from_fn(grid.width(), grid.height(), |row, col| {
        let alive = grid.get(row, col).is_some_and(Cell::is_alive);
        let neighbors = grid.live_neighbors(row, col);

        match (alive, neighbors) {
            // Survival
            (true, 2) | (true, 3) => Cell::Alive,
            // Birth
            (false, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    })
}

/// Whether two grids have the same dimensions and the same cells.
/// Grids with different dimensions are never equal.
pub fn same_state(a: &Grid, b: &Grid) -> bool {
    if !a.same_dimensions(b) {
        return false;
    }

    a.rows().zip(b.rows()).all(|(left, right)| left == right)
}

/// Outcome of checking a target grid against the successor of a current grid.
#[derive(Clone, Debug)]
pub struct Verdict {
    /// The computed next generation of the current grid.
    pub successor: Grid,
    /// Whether the target equals the computed successor.
    pub is_next_state: bool,
    /// Coordinates `(row, col)` where the successor and the target disagree.
    /// Empty when the grids match or when their dimensions differ.
    pub mismatches: Vec<(usize, usize)>,
}

/// Checks whether `target` is the next state of `current`.
pub fn check(current: &Grid, target: &Grid) -> Verdict {
    let successor = next_generation(current);
    let is_next_state = same_state(&successor, target);

    let mismatches = if is_next_state || !successor.same_dimensions(target) {
        Vec::new()
    } else {
        (0..successor.height())
            .flat_map(|row| (0..successor.width()).map(move |col| (row, col)))
            .filter(|&(row, col)| successor.get(row, col) != target.get(row, col))
            .collect()
    };

    Verdict {
        successor,
        is_next_state,
        mismatches,
    }
}
