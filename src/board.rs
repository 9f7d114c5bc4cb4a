use std::collections::BTreeSet;

use owo_colors::{OwoColorize, XtermColors};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::palette::{CELL_FG, CELL_PADDING, COLORMAP};

/// Largest cell value a grid may hold; values are color indices 0-9.
pub const MAX_CELL_VALUE: u8 = 9;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has no cells")]
    EmptyRow { row: usize },
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("cell ({row}, {col}) holds {value}, outside the color range 0-9")]
    ValueOutOfRange { row: usize, col: usize, value: u8 },
}

/// A validated rectangular grid of color values, one board of a puzzle.
///
/// Construction checks shape and value range once; afterwards the grid is
/// frozen and every accessor is a pure read. Serde round-trips through the
/// raw nested-list form, so deserializing runs the same validation as
/// [`Board::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Board {
    rows: Box<[Box<[u8]>]>,
}

impl Board {
    pub fn new(grid: Vec<Vec<u8>>) -> Result<Self, BoardError> {
        if grid.is_empty() {
            return Err(BoardError::Empty);
        }
        let expected = grid[0].len();
        for (row, cells) in grid.iter().enumerate() {
            if cells.is_empty() {
                return Err(BoardError::EmptyRow { row });
            }
            if cells.len() != expected {
                return Err(BoardError::RaggedRow {
                    row,
                    len: cells.len(),
                    expected,
                });
            }
            for (col, &value) in cells.iter().enumerate() {
                if value > MAX_CELL_VALUE {
                    return Err(BoardError::ValueOutOfRange { row, col, value });
                }
            }
        }
        Ok(Self {
            rows: freeze(grid),
        })
    }

    /// Raw grid form, as it appears in dataset JSON.
    pub fn grid(&self) -> Vec<Vec<u8>> {
        self.rows.iter().map(|row| row.to_vec()).collect()
    }

    pub fn rows(&self) -> &[Box<[u8]>] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.rows[0].len()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows(), self.num_cols())
    }

    /// All cell values in row-major order.
    pub fn flat(&self) -> impl Iterator<Item = u8> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    /// Distinct values present on the board, for palette analysis.
    pub fn unique_values(&self) -> BTreeSet<u8> {
        self.flat().collect()
    }

    pub fn num_unique_values(&self) -> usize {
        self.unique_values().len()
    }

    /// Dense 64-bit view of the grid for numeric and plotting consumers.
    pub fn to_i64(&self) -> Vec<Vec<i64>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&v| i64::from(v)).collect())
            .collect()
    }

    pub fn render_cell(&self, row: usize, col: usize, colored: bool) -> String {
        let value = self.rows[row][col];
        let text = format!("{CELL_PADDING}{value}{CELL_PADDING}");
        if colored {
            let bg = XtermColors::from(COLORMAP[value as usize]);
            format!("{}", text.color(XtermColors::from(CELL_FG)).on_color(bg))
        } else {
            text
        }
    }

    pub fn render_row(&self, row: usize, colored: bool) -> String {
        (0..self.rows[row].len())
            .map(|col| self.render_cell(row, col, colored))
            .collect()
    }

    /// Blank placeholder matching this board's column count and cell width.
    /// Keeps columns aligned when a shorter board is shown next to a taller one.
    pub fn render_empty_row(&self) -> String {
        (0..self.num_cols())
            .map(|_| format!("{CELL_PADDING} {CELL_PADDING}"))
            .collect()
    }

    pub fn render(&self, colored: bool) -> String {
        (0..self.num_rows())
            .map(|row| self.render_row(row, colored))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TryFrom<Vec<Vec<u8>>> for Board {
    type Error = BoardError;

    fn try_from(grid: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::new(grid)
    }
}

impl From<Board> for Vec<Vec<u8>> {
    fn from(board: Board) -> Self {
        board.grid()
    }
}

// The recursive list-to-tuple conversion of the original data model; in Rust
// the frozen form is a boxed slice of boxed slices.
fn freeze(grid: Vec<Vec<u8>>) -> Box<[Box<[u8]>]> {
    grid.into_iter().map(Vec::into_boxed_slice).collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn grid_round_trips_through_accessor() {
        let grid = vec![vec![0, 1, 2], vec![3, 4, 5]];
        let board = Board::new(grid.clone()).unwrap();
        assert_eq!(board.grid(), grid);
    }

    #[test]
    fn shape_flat_and_unique_values() {
        let board = Board::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(board.shape(), (2, 2));
        assert_eq!(board.flat().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(board.unique_values(), BTreeSet::from([1, 2, 3, 4]));
        assert_eq!(board.num_unique_values(), 4);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Board::new(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            BoardError::RaggedRow {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn empty_grids_are_rejected() {
        assert_eq!(Board::new(vec![]).unwrap_err(), BoardError::Empty);
        assert_eq!(
            Board::new(vec![vec![]]).unwrap_err(),
            BoardError::EmptyRow { row: 0 }
        );
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = Board::new(vec![vec![0, 10]]).unwrap_err();
        assert_eq!(
            err,
            BoardError::ValueOutOfRange {
                row: 0,
                col: 1,
                value: 10
            }
        );
    }

    #[test]
    fn plain_render_pads_each_cell() {
        let board = Board::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(board.render(false), " 1  2 \n 3  4 ");
        assert_eq!(board.render_empty_row(), "      ");
    }

    #[test]
    fn colored_render_wraps_cells_in_escape_codes() {
        let board = Board::new(vec![vec![7]]).unwrap();
        let text = board.render(true);
        assert!(text.contains(" 7 "));
        assert!(text.contains('\u{1b}'));
        assert_ne!(text, board.render(false));
    }

    #[test]
    fn render_is_deterministic() {
        let board = Board::new(vec![vec![0, 9], vec![5, 5]]).unwrap();
        assert_eq!(board.render(false), board.render(false));
        assert_eq!(board.render(true), board.render(true));
    }

    #[test]
    fn serde_rejects_invalid_grids() {
        let err = serde_json::from_str::<Board>("[[1,2],[3]]").unwrap_err();
        assert!(err.to_string().contains("expected 2"));
    }

    #[test]
    fn serde_round_trip() {
        let board = Board::new(vec![vec![0, 9], vec![3, 4]]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "[[0,9],[3,4]]");
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    fn arb_grid() -> impl Strategy<Value = Vec<Vec<u8>>> {
        (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(
                proptest::collection::vec(0u8..=MAX_CELL_VALUE, cols),
                rows,
            )
        })
    }

    proptest! {
        #[test]
        fn valid_grids_round_trip(grid in arb_grid()) {
            let board = Board::new(grid.clone()).unwrap();
            prop_assert_eq!(board.grid(), grid);
        }

        #[test]
        fn flat_len_matches_shape(grid in arb_grid()) {
            let board = Board::new(grid).unwrap();
            prop_assert_eq!(board.num_rows() * board.num_cols(), board.flat().count());
        }
    }
}
