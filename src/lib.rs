//! Propago is a generic, reusable constraint satisfaction problem (CSP) solver.
//!
//! The engine is problem-agnostic and can be used to model and solve a wide
//! variety of logic puzzles over finite discrete domains. The core idea is a
//! two-layered architecture: a generic solver backend and a problem-specific
//! frontend. The backend runs arc-consistency propagation (AC-3) once, up
//! front, then a backtracking search guided by minimum-remaining-values
//! variable ordering and least-constraining-value value ordering.
//!
//! # Core Concepts
//!
//! - **[`DomainSemantics`]**: A trait you implement to define the "what" of
//!   your problem: the value type and the constraints.
//! - **[`Constraint`]**: A directed binary arc with an admissibility
//!   predicate. The crate provides a standard library of arcs like
//!   [`NotEqualConstraint`] and [`PredicateConstraint`].
//! - **[`SolverEngine`]**: The engine that takes your problem definition and
//!   solves it.
//!
//! A ready-made Sudoku frontend (solver and puzzle generator) lives in
//! [`sudoku`].
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Here is a simple example of solving for `?A != ?B` where `?A` can be `1`
//! or `2`, and `?B` can only be `1`. The solver should deduce that `?A` must
//! be `2`.
//!
//! ```
//! use std::sync::Arc;
//!
//! use propago::solver::constraint::Constraint;
//! use propago::solver::constraints::not_equal::NotEqualConstraint;
//! use propago::solver::engine::{SolverEngine, VariableId};
//! use propago::solver::graph::ConstraintGraph;
//! use propago::solver::semantics::DomainSemantics;
//! use propago::solver::store::{Domain, DomainStore, Domains};
//! use propago::solver::value::StandardValue;
//!
//! // 1. Define the problem-specific semantics
//! #[derive(Debug, Clone)]
//! pub struct MySemantics;
//!
//! impl DomainSemantics for MySemantics {
//!     type Value = StandardValue;
//!     type ConstraintDefinition = NotEqualConstraint<Self>;
//!
//!     fn build_constraint(&self, def: &Self::ConstraintDefinition) -> Box<dyn Constraint<Self>> {
//!         Box::new(def.clone())
//!     }
//! }
//!
//! // 2. Define the problem instance
//! let a: VariableId = 0;
//! let b: VariableId = 1;
//!
//! let mut domains = Domains::new();
//! domains.insert(a, [StandardValue::Int(1), StandardValue::Int(2)].into_iter().collect());
//! domains.insert(b, Domain::singleton(StandardValue::Int(1)));
//!
//! let semantics = Arc::new(MySemantics);
//! let store = DomainStore::new(domains, semantics.clone());
//!
//! // The relation is symmetric, so register the arc in both orientations.
//! let graph = ConstraintGraph::from_definitions(
//!     semantics.as_ref(),
//!     &[NotEqualConstraint::new(a, b), NotEqualConstraint::new(b, a)],
//! );
//!
//! // 3. Solve!
//! let engine = SolverEngine::default();
//! let (assignment, _stats) = engine.solve(&graph, store).unwrap();
//! let assignment = assignment.unwrap();
//!
//! assert_eq!(assignment.value_of(a), Some(&StandardValue::Int(2)));
//! ```
//!
//! [`DomainSemantics`]: solver::semantics::DomainSemantics
//! [`Constraint`]: solver::constraint::Constraint
//! [`NotEqualConstraint`]: solver::constraints::not_equal::NotEqualConstraint
//! [`PredicateConstraint`]: solver::constraints::predicate::PredicateConstraint
//! [`SolverEngine`]: solver::engine::SolverEngine

pub mod error;
pub mod solver;
pub mod sudoku;
