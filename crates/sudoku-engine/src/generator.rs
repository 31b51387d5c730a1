use crate::{Board, Position, Solver};
use derive_more::{Display, Error};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use serde::{Deserialize, Serialize};

/// Rejected generator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GeneratorError {
    /// A removal count above the 81 cells a board has.
    ///
    /// Rejected up front: with no non-empty cell left to pick, the removal
    /// step's rejection sampling would never terminate.
    #[display("removal count {removal_count} is out of range (0-81)")]
    RemovalCountOutOfRange { removal_count: usize },
}

/// Configuration for puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// How many cells to clear from the full solution.
    removal_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { removal_count: 40 }
    }
}

impl GeneratorConfig {
    /// Create a configuration, rejecting removal counts above 81.
    pub fn new(removal_count: usize) -> Result<Self, GeneratorError> {
        if removal_count > 81 {
            return Err(GeneratorError::RemovalCountOutOfRange { removal_count });
        }
        Ok(Self { removal_count })
    }

    /// The configured removal count.
    pub fn removal_count(&self) -> usize {
        self.removal_count
    }
}

/// A generated puzzle together with the full solution it was cut from.
///
/// The puzzle is a strict subset of the solution, so it is always solvable
/// (though not necessarily uniquely).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    pub puzzle: Board,
    pub solution: Board,
}

/// Sudoku puzzle generator.
///
/// Builds a random full solution by handing the solver a shuffled digit
/// probe order, then derives a puzzle by clearing randomly chosen cells.
/// Seeded generators are fully reproducible.
pub struct Generator {
    config: GeneratorConfig,
    rng: Pcg64Mcg,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator with the default configuration and a random seed.
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: Pcg64Mcg::from_entropy(),
        }
    }

    /// Create a generator with a custom configuration and a random seed.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: Pcg64Mcg::from_entropy(),
        }
    }

    /// Create a generator with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Create a seeded generator with a custom configuration.
    pub fn with_seed_and_config(seed: u64, config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Generate a puzzle and its solution.
    pub fn generate(&mut self) -> GeneratedPuzzle {
        let solution = self.full_board();
        let puzzle = self.remove_numbers(&solution);
        GeneratedPuzzle { puzzle, solution }
    }

    /// Produce a random completely filled valid board.
    pub fn full_board(&mut self) -> Board {
        let solver = Solver::new();
        loop {
            let mut board = Board::empty();
            let mut order = crate::solver::ASCENDING;
            order.shuffle(&mut self.rng);
            // The empty grid is always satisfiable; the loop only guards the
            // unreachable failure path.
            if solver.solve_in_place_with_order(&mut board, order) {
                return board;
            }
        }
    }

    /// Derive a puzzle from a full board by clearing `removal_count` cells.
    ///
    /// Cells are picked uniformly at random, resampling while the pick is
    /// already empty, so the result has exactly `81 - removal_count` filled
    /// cells. No uniqueness-of-solution check is made: the puzzle is
    /// guaranteed solvable but may admit several solutions.
    pub fn remove_numbers(&mut self, solution: &Board) -> Board {
        let mut puzzle = solution.clone();
        for _ in 0..self.config.removal_count {
            let pos = loop {
                let candidate =
                    Position::new(self.rng.gen_range(0..9), self.rng.gen_range(0..9));
                if !puzzle.is_empty_cell(candidate) {
                    break candidate;
                }
            };
            puzzle.set(pos, None);
        }
        puzzle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_boards_satisfy_the_constraint() {
        for seed in [0, 1, 42, 1234] {
            let mut generator = Generator::with_seed(seed);
            let board = generator.full_board();
            assert!(board.is_full());

            let rows = board.rows();
            for i in 0..9 {
                let mut row_digits: Vec<u8> = rows[i].to_vec();
                let mut col_digits: Vec<u8> = (0..9).map(|r| rows[r][i]).collect();
                let (br, bc) = (3 * (i / 3), 3 * (i % 3));
                let mut box_digits: Vec<u8> = (br..br + 3)
                    .flat_map(|r| (bc..bc + 3).map(move |c| rows[r][c]))
                    .collect();
                for digits in [&mut row_digits, &mut col_digits, &mut box_digits] {
                    digits.sort_unstable();
                    assert_eq!(*digits, vec![1, 2, 3, 4, 5, 6, 7, 8, 9], "house {i} in seed {seed}");
                }
            }
        }
    }

    #[test]
    fn generate_round_trip() {
        let mut generator = Generator::with_seed(42);
        let GeneratedPuzzle { puzzle, solution } = generator.generate();

        assert!(solution.is_solved());
        assert_eq!(puzzle.filled_count(), 81 - 40);

        // Every cell the puzzle still fills agrees with the solution.
        for pos in Position::all() {
            if let Some(digit) = puzzle.get(pos) {
                assert_eq!(solution.get(pos), Some(digit));
            }
        }

        // Solving a copy of the puzzle succeeds and keeps every given.
        let solver = Solver::new();
        let solved = solver.solve(&puzzle).expect("generated puzzle is solvable");
        assert!(solved.is_solved());
        for pos in Position::all() {
            if puzzle.get(pos).is_some() {
                assert_eq!(solved.get(pos), solution.get(pos));
            }
        }
    }

    #[test]
    fn removal_count_bounds() {
        let mut keep_all = Generator::with_seed_and_config(7, GeneratorConfig::new(0).unwrap());
        let pair = keep_all.generate();
        assert_eq!(pair.puzzle, pair.solution);

        let mut clear_all = Generator::with_seed_and_config(7, GeneratorConfig::new(81).unwrap());
        let pair = clear_all.generate();
        assert_eq!(pair.puzzle, Board::empty());
        assert!(pair.solution.is_solved());
    }

    #[test]
    fn removal_count_above_81_is_rejected() {
        assert_eq!(
            GeneratorConfig::new(82),
            Err(GeneratorError::RemovalCountOutOfRange { removal_count: 82 })
        );
    }

    #[test]
    fn same_seed_same_output() {
        let a = Generator::with_seed(42).generate();
        let b = Generator::with_seed(42).generate();
        assert_eq!(a, b);

        let c = Generator::with_seed(43).generate();
        assert_ne!(a, c);
    }

    #[test]
    fn consecutive_full_boards_vary() {
        let mut generator = Generator::with_seed(42);
        assert_ne!(generator.full_board(), generator.full_board());
    }
}
