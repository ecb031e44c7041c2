//! Puzzle generation: produce a complete grid, then carve givens out of it
//! while the engine keeps confirming the remainder is solvable.

use rand::{rngs::ThreadRng, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::{
    error::Result,
    sudoku::{Grid, SudokuSolver, BOX_SIZE, CELL_COUNT, GRID_SIZE},
};

/// A generated puzzle together with the complete grid it was carved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    pub puzzle: Grid,
    pub solution: Grid,
}

/// Generates Sudoku puzzles by carving cells out of a complete grid.
///
/// The engine itself is deterministic, so variety comes from the injected
/// RNG: the one canonical empty-grid solution is scrambled with
/// solution-preserving transformations before cells are removed.
pub struct PuzzleGenerator<R: Rng> {
    solver: SudokuSolver,
    rng: R,
}

impl PuzzleGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for PuzzleGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator<ChaCha8Rng> {
    /// A generator whose output is fully determined by `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> PuzzleGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            solver: SudokuSolver::new(),
            rng,
        }
    }

    /// Produces a puzzle with between 17 and 30 givens.
    pub fn generate(&mut self) -> Result<GeneratedPuzzle> {
        let solution = self.complete_grid()?;
        let givens = self.rng.gen_range(17..=30);
        debug!(givens, "carving puzzle from complete grid");
        let puzzle = self.carve(solution, CELL_COUNT - givens)?;
        Ok(GeneratedPuzzle { puzzle, solution })
    }

    /// One complete grid: the empty grid's (deterministic) completion,
    /// scrambled by transformations that map valid grids to valid grids.
    fn complete_grid(&mut self) -> Result<Grid> {
        let Some(solved) = self.solver.solve(&Grid::empty())? else {
            unreachable!("the empty grid always has a completion");
        };
        Ok(self.scramble(solved))
    }

    fn scramble(&mut self, grid: Grid) -> Grid {
        let mut cells = [[0u8; GRID_SIZE]; GRID_SIZE];
        for (row, col, digit) in grid.cells() {
            cells[row][col] = digit;
        }

        let passes = self.rng.gen_range(20..=50);
        for _ in 0..passes {
            match self.rng.gen_range(0..5) {
                0 => {
                    let a = self.rng.gen_range(1..=9u8);
                    let b = self.rng.gen_range(1..=9u8);
                    relabel(&mut cells, a, b);
                }
                1 => {
                    let band = self.rng.gen_range(0..BOX_SIZE);
                    let r1 = band * BOX_SIZE + self.rng.gen_range(0..BOX_SIZE);
                    let r2 = band * BOX_SIZE + self.rng.gen_range(0..BOX_SIZE);
                    cells.swap(r1, r2);
                }
                2 => {
                    let band = self.rng.gen_range(0..BOX_SIZE);
                    let c1 = band * BOX_SIZE + self.rng.gen_range(0..BOX_SIZE);
                    let c2 = band * BOX_SIZE + self.rng.gen_range(0..BOX_SIZE);
                    swap_cols(&mut cells, c1, c2);
                }
                3 => {
                    let b1 = self.rng.gen_range(0..BOX_SIZE);
                    let b2 = self.rng.gen_range(0..BOX_SIZE);
                    swap_row_bands(&mut cells, b1, b2);
                }
                _ => {
                    let b1 = self.rng.gen_range(0..BOX_SIZE);
                    let b2 = self.rng.gen_range(0..BOX_SIZE);
                    swap_col_bands(&mut cells, b1, b2);
                }
            }
        }
        Grid::new(cells)
    }

    /// Clears up to `removals` random filled cells, consulting the engine as
    /// a solvability oracle after each clear and reverting any clear the
    /// oracle rejects.
    fn carve(&mut self, mut grid: Grid, removals: usize) -> Result<Grid> {
        for _ in 0..removals {
            let filled: Vec<(usize, usize)> = grid
                .cells()
                .filter(|&(_, _, digit)| digit != 0)
                .map(|(row, col, _)| (row, col))
                .collect();
            if filled.is_empty() {
                break;
            }

            let (row, col) = filled[self.rng.gen_range(0..filled.len())];
            let removed = grid.get(row, col);
            grid.clear(row, col);

            if !self.solver.is_solvable(&grid)? {
                grid.set(row, col, removed);
            }
        }
        Ok(grid)
    }
}

fn relabel(cells: &mut [[u8; GRID_SIZE]; GRID_SIZE], a: u8, b: u8) {
    for row in cells.iter_mut() {
        for cell in row.iter_mut() {
            if *cell == a {
                *cell = b;
            } else if *cell == b {
                *cell = a;
            }
        }
    }
}

fn swap_cols(cells: &mut [[u8; GRID_SIZE]; GRID_SIZE], c1: usize, c2: usize) {
    for row in cells.iter_mut() {
        row.swap(c1, c2);
    }
}

fn swap_row_bands(cells: &mut [[u8; GRID_SIZE]; GRID_SIZE], b1: usize, b2: usize) {
    for i in 0..BOX_SIZE {
        cells.swap(b1 * BOX_SIZE + i, b2 * BOX_SIZE + i);
    }
}

fn swap_col_bands(cells: &mut [[u8; GRID_SIZE]; GRID_SIZE], b1: usize, b2: usize) {
    for i in 0..BOX_SIZE {
        for row in cells.iter_mut() {
            row.swap(b1 * BOX_SIZE + i, b2 * BOX_SIZE + i);
        }
    }
}
