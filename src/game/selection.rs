use crate::models::{Coordinate, Grid};

/// Turns a drag between two cells into the straight run of cells it covers.
pub struct SelectionResolver;

impl SelectionResolver {
    /// Cells from `start` to `end` inclusive along a horizontal, vertical or
    /// 45° diagonal line.
    ///
    /// Any other drag selects only `start`. Defined for every pair of
    /// coordinates; no arithmetic leaves the span between the two endpoints.
    pub fn cells_on_line(start: Coordinate, end: Coordinate) -> Vec<Coordinate> {
        let row_steps = start.row.abs_diff(end.row);
        let col_steps = start.col.abs_diff(end.col);

        let is_horizontal = row_steps == 0;
        let is_vertical = col_steps == 0;
        let is_diagonal = row_steps == col_steps;

        if !is_horizontal && !is_vertical && !is_diagonal {
            return vec![start];
        }

        let steps = row_steps.max(col_steps);

        (0..=steps)
            .map(|i| Coordinate {
                row: Self::advance(start.row, end.row, i),
                col: Self::advance(start.col, end.col, i),
            })
            .collect()
    }

    /// Move `i` cells from `from` toward `to`. On a valid line every moving
    /// axis spans exactly `steps` cells, so `i` never overshoots `to`.
    fn advance(from: usize, to: usize, i: usize) -> usize {
        if to > from {
            from + i
        } else if to < from {
            from - i
        } else {
            from
        }
    }

    /// Read the letters under `cells` in order.
    ///
    /// Every coordinate must be on `grid`; cells from [`Self::cells_on_line`]
    /// between two on-board endpoints always are.
    pub fn word_from_cells(grid: &Grid, cells: &[Coordinate]) -> String {
        cells.iter().map(|cell| grid[*cell].letter).collect()
    }
}
