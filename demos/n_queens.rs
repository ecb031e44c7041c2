//! Place N queens on an N×N board so that none attacks another.
//!
//! One variable per column, whose value is the queen's row. Column clashes
//! are `NotEqualConstraint` arcs; diagonal clashes are
//! `AbsoluteDifferenceNotEqualConstraint` arcs with the column distance as
//! the forbidden row difference.

use std::sync::Arc;

use clap::Parser;
use propago::solver::constraint::Constraint;
use propago::solver::constraints::{
    abs_diff_not_equal::AbsoluteDifferenceNotEqualConstraint, not_equal::NotEqualConstraint,
};
use propago::solver::engine::{SolverEngine, VariableId};
use propago::solver::graph::ConstraintGraph;
use propago::solver::semantics::DomainSemantics;
use propago::solver::store::{DomainStore, Domains};
use propago::solver::value::StandardValue;

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

fn constraint_definitions(n: usize) -> Vec<QueensConstraint> {
    let mut definitions = Vec::new();
    for i in 0..n as VariableId {
        for j in 0..n as VariableId {
            if i == j {
                continue;
            }
            let column_distance = i.abs_diff(j) as i64;
            definitions.push(QueensConstraint::Column(NotEqualConstraint::new(i, j)));
            definitions.push(QueensConstraint::Diagonal(
                AbsoluteDifferenceNotEqualConstraint::new(
                    i,
                    j,
                    StandardValue::Int(column_distance),
                ),
            ));
        }
    }
    definitions
}

#[derive(Parser, Debug)]
#[command(name = "n_queens", about = "Solve the N-queens problem")]
struct Args {
    /// Board size.
    #[arg(long, default_value_t = 8)]
    n: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let n = args.n;

    let mut domains = Domains::new();
    for column in 0..n as VariableId {
        domains.insert(column, (0..n as i64).map(StandardValue::Int).collect());
    }

    let semantics = Arc::new(QueensSemantics);
    let store = DomainStore::new(domains, semantics.clone());
    let definitions = constraint_definitions(n);
    let graph = ConstraintGraph::from_definitions(semantics.as_ref(), &definitions);

    let engine = SolverEngine::default();
    let (assignment, stats) = engine.solve(&graph, store)?;

    match assignment {
        Some(assignment) => {
            println!("Solution for {} queens:", n);
            for row in 0..n as i64 {
                let line: String = (0..n as VariableId)
                    .map(|column| {
                        if assignment.value_of(column) == Some(&StandardValue::Int(row)) {
                            "Q "
                        } else {
                            ". "
                        }
                    })
                    .collect();
                println!("{}", line);
            }
            println!(
                "({} nodes visited, {} backtracks)",
                stats.nodes_visited, stats.backtracks
            );
        }
        None => println!("No arrangement of {} queens exists.", n),
    }

    Ok(())
}
