//! Sudoku frontend for the generic solver.
//!
//! Models the 9×9 grid as 81 variables with `[1, 9]` digit domains and a
//! not-equal arc, in both orientations, for every pair of distinct cells
//! sharing a row, column, or 3×3 box.

pub mod generate;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    solver::{
        constraint::Constraint,
        constraints::not_equal::NotEqualConstraint,
        engine::{SearchStats, SolverEngine, VariableId},
        graph::ConstraintGraph,
        semantics::DomainSemantics,
        store::{Assignment, Domain, DomainStore, Domains},
        value::StandardValue,
    },
};

pub const GRID_SIZE: usize = 9;
pub const BOX_SIZE: usize = 3;
const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A 9×9 Sudoku grid. `0` denotes an empty cell; filled cells hold `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid([[u8; GRID_SIZE]; GRID_SIZE]);

impl Grid {
    pub const fn empty() -> Self {
        Self([[0; GRID_SIZE]; GRID_SIZE])
    }

    pub const fn new(cells: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self(cells)
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, digit: u8) {
        self.0[row][col] = digit;
    }

    pub fn clear(&mut self, row: usize, col: usize) {
        self.0[row][col] = 0;
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.0[row][col] != 0
    }

    /// Iterates every cell as `(row, col, digit)` in row-major order.
    pub fn cells(self) -> impl Iterator<Item = (usize, usize, u8)> {
        (0..GRID_SIZE).flat_map(move |row| {
            (0..GRID_SIZE).map(move |col| (row, col, self.0[row][col]))
        })
    }

    /// The number of filled cells.
    pub fn given_count(&self) -> usize {
        self.cells().filter(|&(_, _, digit)| digit != 0).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            if row % BOX_SIZE == 0 && row != 0 {
                writeln!(f, "- - - + - - - + - - -")?;
            }
            for col in 0..GRID_SIZE {
                if col % BOX_SIZE == 0 && col != 0 {
                    write!(f, "| ")?;
                }
                match self.0[row][col] {
                    0 => write!(f, ". ")?,
                    digit => write!(f, "{} ", digit)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SudokuSemantics;

impl DomainSemantics for SudokuSemantics {
    /// The concrete type for a value in a cell's domain.
    type Value = StandardValue;

    /// The structure that defines a constraint for Sudoku.
    type ConstraintDefinition = NotEqualConstraint<Self>;

    fn build_constraint(&self, definition: &Self::ConstraintDefinition) -> Box<dyn Constraint<Self>> {
        Box::new(definition.clone())
    }
}

/// The engine variable standing for the cell at `(row, col)`.
pub fn cell_variable(row: usize, col: usize) -> VariableId {
    (row * GRID_SIZE + col) as VariableId
}

fn variable_cell(variable: VariableId) -> (usize, usize) {
    (variable as usize / GRID_SIZE, variable as usize % GRID_SIZE)
}

fn shares_unit(a: (usize, usize), b: (usize, usize)) -> bool {
    a.0 == b.0
        || a.1 == b.1
        || (a.0 / BOX_SIZE == b.0 / BOX_SIZE && a.1 / BOX_SIZE == b.1 / BOX_SIZE)
}

/// One not-equal arc per ordered pair of distinct peer cells. Enumerating
/// ordered pairs registers every peer relation in both orientations, as the
/// propagator requires.
fn peer_arcs() -> Vec<NotEqualConstraint<SudokuSemantics>> {
    let mut arcs = Vec::new();
    for a in 0..CELL_COUNT {
        for b in 0..CELL_COUNT {
            if a == b {
                continue;
            }
            let a_cell = variable_cell(a as VariableId);
            let b_cell = variable_cell(b as VariableId);
            if shares_unit(a_cell, b_cell) {
                arcs.push(NotEqualConstraint::new(a as VariableId, b as VariableId));
            }
        }
    }
    arcs
}

/// Solves Sudoku grids through the generic engine.
///
/// The constraint graph is fixed for every 9×9 Sudoku, so one `SudokuSolver`
/// can be reused across many grids; each solve gets its own domain store.
pub struct SudokuSolver {
    engine: SolverEngine<SudokuSemantics>,
    graph: ConstraintGraph<SudokuSemantics>,
    semantics: Arc<SudokuSemantics>,
}

impl SudokuSolver {
    pub fn new() -> Self {
        let semantics = Arc::new(SudokuSemantics);
        let definitions = peer_arcs();
        let graph = ConstraintGraph::from_definitions(semantics.as_ref(), &definitions);
        Self {
            engine: SolverEngine::default(),
            graph,
            semantics,
        }
    }

    /// Solves `grid`, returning its completion or `None` when no completion
    /// exists (including grids whose givens already conflict).
    pub fn solve(&self, grid: &Grid) -> Result<Option<Grid>> {
        self.solve_with_stats(grid).map(|(solved, _stats)| solved)
    }

    pub fn solve_with_stats(&self, grid: &Grid) -> Result<(Option<Grid>, SearchStats)> {
        let store = self.store_for(grid);
        let (assignment, stats) = self.engine.solve(&self.graph, store)?;
        Ok((assignment.map(|assignment| Self::grid_from(&assignment)), stats))
    }

    /// Solvability oracle: `solve` with the completion discarded.
    pub fn is_solvable(&self, grid: &Grid) -> Result<bool> {
        self.engine.is_solvable(&self.graph, self.store_for(grid))
    }

    pub fn graph(&self) -> &ConstraintGraph<SudokuSemantics> {
        &self.graph
    }

    fn store_for(&self, grid: &Grid) -> DomainStore<SudokuSemantics> {
        let mut domains = Domains::new();
        for (row, col, digit) in grid.cells() {
            let domain = if digit == 0 {
                (1..=9i64).map(StandardValue::Int).collect()
            } else {
                Domain::singleton(StandardValue::Int(digit as i64))
            };
            domains.insert(cell_variable(row, col), domain);
        }
        DomainStore::new(domains, self.semantics.clone())
    }

    fn grid_from(assignment: &Assignment<StandardValue>) -> Grid {
        let mut grid = Grid::empty();
        for (variable, value) in assignment.iter() {
            let (row, col) = variable_cell(variable);
            let StandardValue::Int(digit) = value;
            grid.set(row, col, *digit as u8);
        }
        grid
    }
}

impl Default for SudokuSolver {
    fn default() -> Self {
        Self::new()
    }
}
