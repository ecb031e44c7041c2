use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use propago::solver::{
    constraint::Constraint,
    constraints::{
        abs_diff_not_equal::AbsoluteDifferenceNotEqualConstraint, not_equal::NotEqualConstraint,
    },
    engine::{SolverEngine, VariableId},
    graph::ConstraintGraph,
    heuristics::{
        value::{IdentityValueHeuristic, LeastConstrainingValueHeuristic},
        variable::{MinimumRemainingValuesHeuristic, SelectFirstHeuristic},
    },
    semantics::DomainSemantics,
    store::{DomainStore, Domains},
    value::StandardValue,
};
use propago::sudoku::{Grid, SudokuSolver};

// N-queens problem definition shared with demos/n_queens.rs

#[derive(Debug, Clone)]
pub enum QueensConstraint {
    Column(NotEqualConstraint<QueensSemantics>),
    Diagonal(AbsoluteDifferenceNotEqualConstraint<QueensSemantics>),
}

#[derive(Debug, Clone)]
pub struct QueensSemantics;

impl DomainSemantics for QueensSemantics {
    type Value = StandardValue;
    type ConstraintDefinition = QueensConstraint;

    fn build_constraint(&self, def: &Self::ConstraintDefinition) -> Box<dyn Constraint<Self>> {
        match def {
            QueensConstraint::Column(c) => Box::new(c.clone()),
            QueensConstraint::Diagonal(c) => Box::new(c.clone()),
        }
    }
}

fn n_queens_problem_setup(n: usize) -> (ConstraintGraph<QueensSemantics>, DomainStore<QueensSemantics>) {
    let mut domains = Domains::new();
    for column in 0..n as VariableId {
        domains.insert(column, (0..n as i64).map(StandardValue::Int).collect());
    }

    let semantics = Arc::new(QueensSemantics);
    let store = DomainStore::new(domains, semantics.clone());

    let mut definitions = Vec::new();
    for i in 0..n as VariableId {
        for j in 0..n as VariableId {
            if i == j {
                continue;
            }
            definitions.push(QueensConstraint::Column(NotEqualConstraint::new(i, j)));
            definitions.push(QueensConstraint::Diagonal(
                AbsoluteDifferenceNotEqualConstraint::new(
                    i,
                    j,
                    StandardValue::Int(i.abs_diff(j) as i64),
                ),
            ));
        }
    }
    let graph = ConstraintGraph::from_definitions(semantics.as_ref(), &definitions);

    (graph, store)
}

fn n_queens_heuristic_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("N-Queens Heuristics");
    let board_size = 10;

    let (graph, store) = n_queens_problem_setup(board_size);

    group.bench_function("N=10, SelectFirst/Identity", |b| {
        let solver = SolverEngine::new(
            Box::new(SelectFirstHeuristic),
            Box::new(IdentityValueHeuristic),
        );
        b.iter(|| {
            let (solution, _stats) = solver
                .solve(black_box(&graph), black_box(store.clone()))
                .unwrap();
            assert!(solution.is_some());
        })
    });

    group.bench_function("N=10, MinimumRemainingValues/LeastConstrainingValue", |b| {
        let solver = SolverEngine::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        );
        b.iter(|| {
            let (solution, _stats) = solver
                .solve(black_box(&graph), black_box(store.clone()))
                .unwrap();
            assert!(solution.is_some());
        })
    });

    group.finish();
}

fn n_queens_scaling_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("N-Queens Performance");

    for n in [8, 10, 12].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let (graph, store) = n_queens_problem_setup(n);
            let solver = SolverEngine::default();
            b.iter(|| {
                let (solution, _stats) = solver
                    .solve(black_box(&graph), black_box(store.clone()))
                    .unwrap();
                assert!(solution.is_some());
            });
        });
    }
    group.finish();
}

fn sudoku_benchmark(c: &mut Criterion) {
    let puzzle = Grid::new([
        [5, 3, 0, 0, 7, 0, 0, 0, 0],
        [6, 0, 0, 1, 9, 5, 0, 0, 0],
        [0, 9, 8, 0, 0, 0, 0, 6, 0],
        [8, 0, 0, 0, 6, 0, 0, 0, 3],
        [4, 0, 0, 8, 0, 3, 0, 0, 1],
        [7, 0, 0, 0, 2, 0, 0, 0, 6],
        [0, 6, 0, 0, 0, 0, 2, 8, 0],
        [0, 0, 0, 4, 1, 9, 0, 0, 5],
        [0, 0, 0, 0, 8, 0, 0, 7, 9],
    ]);

    let solver = SudokuSolver::new();
    c.bench_function("Sudoku canonical puzzle", |b| {
        b.iter(|| {
            let solution = solver.solve(black_box(&puzzle)).unwrap();
            assert!(solution.is_some());
        })
    });
}

criterion_group!(
    benches,
    n_queens_heuristic_benchmarks,
    n_queens_scaling_benchmark,
    sudoku_benchmark
);
criterion_main!(benches);
