//! Defines a collection of standard heuristics for selecting which variable
//! to branch on next during the search process.

use crate::solver::{
    engine::VariableId,
    semantics::DomainSemantics,
    store::{Assignment, DomainStore},
};

/// A trait for variable-selection heuristics.
///
/// Implementors of this trait define a strategy for choosing which unassigned
/// variable the solver should branch on next. A good heuristic can dramatically
/// improve solver performance.
pub trait VariableSelectionHeuristic<S: DomainSemantics> {
    /// Selects the next variable to be assigned.
    ///
    /// Returns `None` only when every variable is already assigned.
    fn select_variable(
        &self,
        store: &DomainStore<S>,
        assignment: &Assignment<S::Value>,
    ) -> Option<VariableId>;
}

/// A simple heuristic that selects the unassigned variable with the lowest
/// [`VariableId`].
///
/// This provides a basic, deterministic way to select variables.
pub struct SelectFirstHeuristic;

impl<S: DomainSemantics> VariableSelectionHeuristic<S> for SelectFirstHeuristic {
    fn select_variable(
        &self,
        store: &DomainStore<S>,
        assignment: &Assignment<S::Value>,
    ) -> Option<VariableId> {
        store
            .variables()
            .filter(|variable| !assignment.is_assigned(*variable))
            .min()
    }
}

/// A heuristic that selects the unassigned variable with the Minimum
/// Remaining Values (MRV) in its domain.
///
/// This is a "fail-first" strategy that prioritizes the most constrained
/// variable: branching where few candidates remain prunes the search tree
/// early. In case of a tie, the variable with the lower [`VariableId`] is
/// chosen to ensure determinism.
pub struct MinimumRemainingValuesHeuristic;

impl<S: DomainSemantics> VariableSelectionHeuristic<S> for MinimumRemainingValuesHeuristic {
    fn select_variable(
        &self,
        store: &DomainStore<S>,
        assignment: &Assignment<S::Value>,
    ) -> Option<VariableId> {
        store
            .iter()
            .filter(|(variable, _)| !assignment.is_assigned(*variable))
            // Primary criterion: domain length (ascending).
            // Secondary criterion: variable id (ascending, for tie-breaking).
            .min_by_key(|(variable, domain)| (domain.len(), *variable))
            .map(|(variable, _)| variable)
    }
}
