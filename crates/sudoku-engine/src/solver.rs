use crate::Board;

/// Ascending probe order, the solver's deterministic default.
pub(crate) const ASCENDING: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Backtracking Sudoku solver.
///
/// Stateless unit struct, all state is per-call. The search is depth-first
/// over empty cells in row-major order, probing digits in ascending order,
/// so a given input always solves to the same output. Callers that want
/// varied fills inject a shuffled probe order via
/// [`solve_in_place_with_order`](Solver::solve_in_place_with_order).
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle, returning the solved board if one exists.
    ///
    /// The input is left untouched; the search runs on a working copy.
    /// Returns `None` when the board is unsatisfiable (for example a grid
    /// already violating the Sudoku constraint).
    pub fn solve(&self, board: &Board) -> Option<Board> {
        let mut working = board.clone();
        if self.solve_in_place(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    /// Solve the board in place, returning whether a solution was found.
    ///
    /// On success the board is fully solved. On failure every placement made
    /// during the search has been undone, so the board is exactly as it was
    /// received.
    pub fn solve_in_place(&self, board: &mut Board) -> bool {
        self.solve_in_place_with_order(board, ASCENDING)
    }

    /// Solve the board in place, probing digits in the given order.
    ///
    /// Identical search to [`solve_in_place`](Solver::solve_in_place) except
    /// for the candidate order at each cell. Shuffling `order` per call is
    /// how the generator obtains varied full boards while the default solve
    /// stays deterministic.
    pub fn solve_in_place_with_order(&self, board: &mut Board, order: [u8; 9]) -> bool {
        // A contradiction among the givens (say, a duplicated digit in one
        // row from a misread scan) can only be disproved by exhausting the
        // search space, so screen it out before the search begins. The board
        // is untouched on this path.
        if !board.is_consistent() {
            return false;
        }
        self.solve_recursive(board, &order)
    }

    fn solve_recursive(&self, board: &mut Board, order: &[u8; 9]) -> bool {
        // No empty cell left: the board is complete.
        let Some(pos) = board.first_empty() else {
            return true;
        };

        for &digit in order {
            if board.is_placement_valid(pos, digit) {
                board.set(pos, Some(digit));
                if self.solve_recursive(board, order) {
                    return true;
                }
                // Undo before the next candidate; sibling branches must see
                // the cell empty again.
                board.set(pos, None);
            }
        }

        false
    }
}
