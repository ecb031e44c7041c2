//! Solve or generate Sudoku puzzles from the command line.
//!
//! ```text
//! cargo run --example sudoku                      # solve the built-in puzzle
//! cargo run --example sudoku -- --stats           # ... with propagation stats
//! cargo run --example sudoku -- --puzzle p.json   # solve a 9x9 JSON array
//! cargo run --example sudoku -- --generate --seed 7
//! ```

use std::path::PathBuf;

use clap::Parser;
use propago::solver::stats::render_stats_table;
use propago::sudoku::generate::PuzzleGenerator;
use propago::sudoku::{Grid, SudokuSolver};

const BUILT_IN: [[u8; 9]; 9] = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

#[derive(Parser, Debug)]
#[command(name = "sudoku", about = "Solve or generate Sudoku puzzles")]
struct Args {
    /// Path to a puzzle file: a JSON 9x9 array of digits, 0 for empty.
    #[arg(long, conflicts_with = "generate")]
    puzzle: Option<PathBuf>,

    /// Generate a fresh puzzle instead of solving one.
    #[arg(long)]
    generate: bool,

    /// RNG seed for --generate, for reproducible puzzles.
    #[arg(long, requires = "generate")]
    seed: Option<u64>,

    /// Print per-constraint propagation statistics after solving.
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    if args.generate {
        let generated = match args.seed {
            Some(seed) => PuzzleGenerator::from_seed(seed).generate()?,
            None => PuzzleGenerator::new().generate()?,
        };
        println!("Puzzle ({} givens):", generated.puzzle.given_count());
        println!("{}", generated.puzzle);
        println!("Solution:");
        println!("{}", generated.solution);
        return Ok(());
    }

    let grid: Grid = match &args.puzzle {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => Grid::new(BUILT_IN),
    };

    println!("Puzzle:");
    println!("{}", grid);

    let solver = SudokuSolver::new();
    let (solution, stats) = solver.solve_with_stats(&grid)?;

    match solution {
        Some(solved) => {
            println!("Solution found!");
            println!("{}", solved);
        }
        None => println!("No solution exists for this grid."),
    }

    if args.stats {
        println!("{}", render_stats_table(&stats, solver.graph()));
    }

    Ok(())
}
