//! Core Sudoku engine: constraint validation, backtracking solving, and
//! puzzle generation over a plain 9x9 board.
//!
//! Three operations, leaves first:
//!
//! - [`Board::is_placement_valid`] — the single constraint-checking
//!   predicate (may this digit occupy this cell?).
//! - [`Solver`] — deterministic depth-first backtracking search composing
//!   the validator; first solution wins, every failed placement is undone.
//! - [`Generator`] — builds a random full solution by feeding the solver a
//!   shuffled digit probe order, then cuts a puzzle out of it by clearing
//!   randomly chosen cells. The puzzle is always solvable (it is a subset of
//!   its solution); uniqueness of that solution is not checked.
//!
//! The engine is synchronous and owns no shared state: callers hand in and
//! receive [`Board`] values, and a host serving concurrent requests gives
//! each request its own board. Transport layers (HTTP, UI, OCR input) live
//! outside this crate and exchange boards as nested 9x9 integer arrays via
//! serde.

mod board;
mod generator;
mod solver;

pub use board::{Board, BoardError, Position};
pub use generator::{GeneratedPuzzle, Generator, GeneratorConfig, GeneratorError};
pub use solver::Solver;
