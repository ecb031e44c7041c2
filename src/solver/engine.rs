use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::Result,
    solver::{
        graph::ConstraintGraph,
        heuristics::{
            value::{LeastConstrainingValueHeuristic, ValueOrderingHeuristic},
            variable::{MinimumRemainingValuesHeuristic, VariableSelectionHeuristic},
        },
        propagate::Propagator,
        search::{BacktrackingSearch, SearchStrategy},
        semantics::DomainSemantics,
        store::{Assignment, DomainStore},
    },
};

pub type VariableId = u32;
pub type ConstraintId = usize;

#[derive(Debug, Clone, Default)]
pub struct PerConstraintStats {
    pub revisions: u64,
    pub prunings: u64,
    pub time_spent_micros: u64,
}

#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    pub nodes_visited: u64,
    pub backtracks: u64,
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

/// The main engine for solving constraint satisfaction problems.
///
/// The `SolverEngine` is responsible for taking a problem definition — a
/// constraint graph plus a domain store covering every variable — and finding
/// an assignment that satisfies all constraints.
///
/// It runs constraint propagation (the AC-3 algorithm) once, up front, and
/// then a heuristic-guided backtracking search over the pruned domains.
pub struct SolverEngine<S: DomainSemantics> {
    strategy: Box<dyn SearchStrategy<S>>,
}

impl<S: DomainSemantics> SolverEngine<S> {
    /// Creates an engine with the given variable- and value-ordering
    /// heuristics driving a backtracking search.
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic<S>>,
        value_heuristic: Box<dyn ValueOrderingHeuristic<S>>,
    ) -> Self {
        Self::with_strategy(Box::new(BacktrackingSearch::new(
            variable_heuristic,
            value_heuristic,
        )))
    }

    pub fn with_strategy(strategy: Box<dyn SearchStrategy<S>>) -> Self {
        Self { strategy }
    }

    /// Attempts to solve the given constraint satisfaction problem.
    ///
    /// Propagation runs first; if it wipes out a domain the problem is
    /// unsatisfiable and no search step is performed. Otherwise the search
    /// strategy runs over the propagated store. Given identical inputs the
    /// result is reproducible: the built-in heuristics consult only domain
    /// sizes and constraint counts, never randomness.
    ///
    /// # Returns
    ///
    /// * `Ok((Some(assignment), stats))` — a complete, constraint-satisfying
    ///   assignment was found.
    /// * `Ok((None, stats))` — the problem is unsatisfiable. Callers cannot
    ///   (and need not) tell whether propagation or search proved it.
    /// * `Err(error)` — the problem was malformed, e.g. a constraint
    ///   references a variable with no domain entry.
    pub fn solve(
        &self,
        graph: &ConstraintGraph<S>,
        initial: DomainStore<S>,
    ) -> Result<(Option<Assignment<S::Value>>, SearchStats)> {
        let mut stats = SearchStats::default();

        let Some(pruned) = Propagator::run(graph, initial, &mut stats)? else {
            debug!("propagation proved the problem unsatisfiable");
            return Ok((None, stats));
        };

        let assignment = self.strategy.solve(graph, &pruned, &mut stats)?;
        Ok((assignment, stats))
    }

    /// Like [`solve`](Self::solve), but discards the assignment. Used where
    /// the engine serves as a solvability oracle.
    pub fn is_solvable(&self, graph: &ConstraintGraph<S>, initial: DomainStore<S>) -> Result<bool> {
        let (assignment, _stats) = self.solve(graph, initial)?;
        Ok(assignment.is_some())
    }
}

impl<S: DomainSemantics> Default for SolverEngine<S> {
    fn default() -> Self {
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }
}
