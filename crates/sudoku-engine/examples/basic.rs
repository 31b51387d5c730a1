//! Basic example of using the Sudoku engine

use sudoku_engine::{Board, Generator, GeneratorConfig, Solver};

fn main() {
    // Generate a puzzle with the default 40 cells removed
    println!("Generating a puzzle...\n");
    let mut generator = Generator::new();
    let pair = generator.generate();

    println!("Generated puzzle:");
    println!("{}", pair.puzzle);
    println!("Given cells: {}", pair.puzzle.filled_count());
    println!("Empty cells: {}\n", pair.puzzle.empty_count());

    println!("Its solution:");
    println!("{}", pair.solution);

    // Solve the puzzle independently
    let solver = Solver::new();
    match solver.solve(&pair.puzzle) {
        Some(solution) => {
            println!("Re-solved puzzle:");
            println!("{solution}");
        }
        None => println!("No solution found (this shouldn't happen for a generated puzzle!)"),
    }

    // Parse a puzzle from a string
    println!("--- Parsing a puzzle from string ---\n");
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    match Board::from_string(puzzle_string) {
        Ok(board) => {
            println!("Parsed puzzle:");
            println!("{board}");
            if let Some(solution) = solver.solve(&board) {
                println!("Solved:");
                println!("{solution}");
            }
        }
        Err(err) => println!("Could not parse puzzle: {err}"),
    }

    // A sparser puzzle via custom configuration
    let config = GeneratorConfig::new(60).expect("60 is within 0-81");
    let mut sparse = Generator::with_config(config);
    let pair = sparse.generate();
    println!("Sparser puzzle ({} givens):", pair.puzzle.filled_count());
    println!("{}", pair.puzzle);
}
