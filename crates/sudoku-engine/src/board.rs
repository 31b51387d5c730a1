use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate on a 9x9 board (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Iterate over all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..9).flat_map(|row| (0..9).map(move |col| Position::new(row, col)))
    }
}

/// Rejected board input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A cell value outside `0..=9`.
    #[display("cell ({row}, {col}) holds {value}, expected 0-9")]
    ValueOutOfRange { row: usize, col: usize, value: u8 },
    /// A puzzle string whose length is not 81 characters.
    #[display("expected 81 cells, got {len}")]
    WrongLength { len: usize },
    /// A puzzle string character that is not a digit or `.`.
    #[display("unexpected character {ch:?} at cell {index}")]
    UnexpectedCharacter { index: usize, ch: char },
}

/// A 9x9 Sudoku board.
///
/// Cells hold `0` for empty or a digit `1..=9`. The board is a plain value:
/// two boards with equal contents are interchangeable, and working copies are
/// made with `clone`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[[u8; 9]; 9]", into = "[[u8; 9]; 9]")]
pub struct Board {
    cells: [[u8; 9]; 9],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Create an empty board (all cells zero).
    pub fn empty() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    /// Create a board from raw rows, rejecting values outside `0..=9`.
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Result<Self, BoardError> {
        for (row, row_cells) in rows.iter().enumerate() {
            for (col, &value) in row_cells.iter().enumerate() {
                if value > 9 {
                    return Err(BoardError::ValueOutOfRange { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Parse a board from an 81-character puzzle line.
    ///
    /// `0` and `.` denote empty cells; `1`-`9` are filled digits. Whitespace
    /// is not allowed.
    pub fn from_string(s: &str) -> Result<Self, BoardError> {
        let len = s.chars().count();
        if len != 81 {
            return Err(BoardError::WrongLength { len });
        }
        let mut cells = [[0u8; 9]; 9];
        for (index, ch) in s.chars().enumerate() {
            cells[index / 9][index % 9] = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return Err(BoardError::UnexpectedCharacter { index, ch }),
            };
        }
        Ok(Self { cells })
    }

    /// Get the digit at `pos`, or `None` if the cell is empty.
    pub fn get(&self, pos: Position) -> Option<u8> {
        match self.cells[pos.row][pos.col] {
            0 => None,
            digit => Some(digit),
        }
    }

    /// Set or clear the cell at `pos`.
    ///
    /// Panics if `value` is `Some(digit)` with `digit` outside `1..=9`; that
    /// is a caller bug, not a runtime condition.
    pub fn set(&mut self, pos: Position, value: Option<u8>) {
        if let Some(digit) = value {
            assert!((1..=9).contains(&digit), "digit out of range: {digit}");
        }
        self.cells[pos.row][pos.col] = value.unwrap_or(0);
    }

    /// Whether the cell at `pos` is empty.
    pub fn is_empty_cell(&self, pos: Position) -> bool {
        self.cells[pos.row][pos.col] == 0
    }

    /// The raw rows, `0` for empty cells.
    pub fn rows(&self) -> &[[u8; 9]; 9] {
        &self.cells
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        81 - self.filled_count()
    }

    /// Whether every cell is filled (no constraint check).
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// All empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_empty_cell(pos)).collect()
    }

    /// The first empty position in row-major order, if any.
    pub(crate) fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self.is_empty_cell(pos))
    }

    /// Can `digit` legally occupy the (empty or not) cell at `pos`?
    ///
    /// Returns `false` iff `digit` already appears in the same row, the same
    /// column, or the 3x3 box containing `pos`. This predicate is the sole
    /// constraint check; the solver and all consistency tests compose it.
    pub fn is_placement_valid(&self, pos: Position, digit: u8) -> bool {
        debug_assert!((1..=9).contains(&digit), "digit out of range: {digit}");
        for i in 0..9 {
            if self.cells[pos.row][i] == digit || self.cells[i][pos.col] == digit {
                return false;
            }
        }
        let box_row = 3 * (pos.row / 3);
        let box_col = 3 * (pos.col / 3);
        for row in box_row..box_row + 3 {
            for col in box_col..box_col + 3 {
                if self.cells[row][col] == digit {
                    return false;
                }
            }
        }
        true
    }

    /// Whether every filled cell's digit is unique in its row, column, and box.
    ///
    /// An empty board is trivially consistent.
    pub fn is_consistent(&self) -> bool {
        Position::all().all(|pos| match self.get(pos) {
            None => true,
            Some(digit) => {
                // Clear the cell so the placement check does not see itself.
                let mut other = self.clone();
                other.set(pos, None);
                other.is_placement_valid(pos, digit)
            }
        })
    }

    /// Whether the board is full and satisfies the Sudoku constraint.
    pub fn is_solved(&self) -> bool {
        self.is_full() && self.is_consistent()
    }
}

impl TryFrom<[[u8; 9]; 9]> for Board {
    type Error = BoardError;

    fn try_from(rows: [[u8; 9]; 9]) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Board> for [[u8; 9]; 9] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, row_cells) in self.cells.iter().enumerate() {
            if row == 3 || row == 6 {
                writeln!(f, "------+-------+------")?;
            }
            for (col, &value) in row_cells.iter().enumerate() {
                if col == 3 || col == 6 {
                    write!(f, "| ")?;
                }
                if value == 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "{value} ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn parse_and_count() {
        let board = Board::from_string(PUZZLE).unwrap();
        assert_eq!(board.filled_count(), 30);
        assert_eq!(board.empty_count(), 51);
        assert_eq!(board.get(Position::new(0, 0)), Some(5));
        assert_eq!(board.get(Position::new(0, 2)), None);
        assert!(board.is_consistent());
        assert!(!board.is_full());
    }

    #[test]
    fn parse_accepts_dots_for_empty() {
        let dotted = PUZZLE.replace('0', ".");
        assert_eq!(Board::from_string(&dotted).unwrap(), Board::from_string(PUZZLE).unwrap());
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            Board::from_string("123"),
            Err(BoardError::WrongLength { len: 3 })
        );
        let bad = format!("x{}", &PUZZLE[1..]);
        assert_eq!(
            Board::from_string(&bad),
            Err(BoardError::UnexpectedCharacter { index: 0, ch: 'x' })
        );
    }

    #[test]
    fn from_rows_rejects_out_of_range() {
        let mut rows = [[0u8; 9]; 9];
        rows[4][7] = 10;
        assert_eq!(
            Board::from_rows(rows),
            Err(BoardError::ValueOutOfRange { row: 4, col: 7, value: 10 })
        );
    }

    #[test]
    fn serde_round_trip_as_nested_arrays() {
        let board = Board::from_string(PUZZLE).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert!(json.starts_with("[[5,3,0,0,7,0,0,0,0],"));
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn serde_rejects_out_of_range() {
        let mut rows = [[0u8; 9]; 9];
        rows[0][0] = 12;
        let json = serde_json::to_string(&rows).unwrap();
        assert!(serde_json::from_str::<Board>(&json).is_err());
    }

    #[test]
    fn placement_check_exhaustive() {
        // Every (row, col, digit) combination against a straight scan of the
        // row, the column, and the box.
        let board = Board::from_string(PUZZLE).unwrap();
        let rows = board.rows();
        for pos in Position::all() {
            for digit in 1..=9u8 {
                let in_row = (0..9).any(|c| rows[pos.row][c] == digit);
                let in_col = (0..9).any(|r| rows[r][pos.col] == digit);
                let (br, bc) = (3 * (pos.row / 3), 3 * (pos.col / 3));
                let in_box = (br..br + 3)
                    .any(|r| (bc..bc + 3).any(|c| rows[r][c] == digit));
                assert_eq!(
                    board.is_placement_valid(pos, digit),
                    !(in_row || in_col || in_box),
                    "mismatch at {pos:?} digit {digit}"
                );
            }
        }
    }

    #[test]
    fn consistency_detects_duplicates() {
        let mut board = Board::empty();
        board.set(Position::new(0, 0), Some(5));
        board.set(Position::new(0, 4), Some(5));
        assert!(!board.is_consistent());
        board.set(Position::new(0, 4), None);
        assert!(board.is_consistent());
    }

    #[test]
    fn display_renders_box_separators() {
        let text = Board::from_string(PUZZLE).unwrap().to_string();
        assert!(text.contains("5 3 . | . 7 . | . . ."));
        assert!(text.contains("------+-------+------"));
    }
}
