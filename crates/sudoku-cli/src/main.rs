use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::{self, BufRead};
use std::process::ExitCode;
use sudoku_engine::{Board, Generator, GeneratorConfig, Solver};

#[derive(Parser)]
#[command(name = "sudoku", version, about = "Sudoku puzzle generator and solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a puzzle and its solution
    Generate {
        /// Number of cells to clear from the full solution (0-81)
        #[arg(long, default_value_t = 40)]
        removals: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Emit the puzzle/solution pair as JSON nested arrays
        #[arg(long)]
        json: bool,
    },
    /// Solve a partially filled grid
    Solve {
        /// 81-character grid, `0` or `.` for empty cells; `-` reads a line
        /// from stdin
        grid: String,
        /// Emit the solution as JSON nested arrays
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Generate { removals, seed, json } => generate(removals, seed, json),
        Command::Solve { grid, json } => solve(&grid, json),
    }
}

fn generate(removals: usize, seed: Option<u64>, json: bool) -> Result<(), Box<dyn Error>> {
    let config = GeneratorConfig::new(removals)?;
    let mut generator = match seed {
        Some(seed) => Generator::with_seed_and_config(seed, config),
        None => Generator::with_config(config),
    };
    let pair = generator.generate();

    if json {
        println!("{}", serde_json::to_string(&pair)?);
    } else {
        println!("Puzzle ({} givens):", pair.puzzle.filled_count());
        println!("{}", pair.puzzle);
        println!("Solution:");
        println!("{}", pair.solution);
    }
    Ok(())
}

fn solve(grid: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let line;
    let grid = if grid == "-" {
        line = read_grid_line()?;
        line.as_str()
    } else {
        grid
    };

    let board = Board::from_string(grid)?;
    let solver = Solver::new();
    let solution = solver
        .solve(&board)
        .ok_or("no solution: the grid is unsatisfiable")?;

    if json {
        println!("{}", serde_json::to_string(&solution)?);
    } else {
        println!("{solution}");
    }
    Ok(())
}

fn read_grid_line() -> Result<String, io::Error> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
