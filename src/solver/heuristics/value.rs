use crate::{
    error::Result,
    solver::{
        engine::VariableId,
        graph::ConstraintGraph,
        semantics::DomainSemantics,
        store::{Assignment, DomainStore},
    },
};

/// A trait for strategies that determine the order of values to try for a
/// variable.
pub trait ValueOrderingHeuristic<S: DomainSemantics> {
    /// Returns the candidate values of `variable`'s current domain in the
    /// order they should be tried.
    fn order_values(
        &self,
        variable: VariableId,
        graph: &ConstraintGraph<S>,
        store: &DomainStore<S>,
        assignment: &Assignment<S::Value>,
    ) -> Result<Vec<S::Value>>;
}

/// A simple heuristic that returns values in their natural domain order.
pub struct IdentityValueHeuristic;

impl<S: DomainSemantics> ValueOrderingHeuristic<S> for IdentityValueHeuristic {
    fn order_values(
        &self,
        variable: VariableId,
        _graph: &ConstraintGraph<S>,
        store: &DomainStore<S>,
        _assignment: &Assignment<S::Value>,
    ) -> Result<Vec<S::Value>> {
        Ok(store.domain(variable)?.iter().cloned().collect())
    }
}

/// The Least Constraining Value (LCV) heuristic.
///
/// Candidates are ordered by how many values they would eliminate from the
/// domains of *unassigned* neighbours, ascending: the value that leaves the
/// most room elsewhere is tried first. This does not prune the search space,
/// but it raises the chance of finding a solution without backtracking. Ties
/// keep domain order, so the ordering is deterministic.
pub struct LeastConstrainingValueHeuristic;

impl<S: DomainSemantics> ValueOrderingHeuristic<S> for LeastConstrainingValueHeuristic {
    fn order_values(
        &self,
        variable: VariableId,
        graph: &ConstraintGraph<S>,
        store: &DomainStore<S>,
        assignment: &Assignment<S::Value>,
    ) -> Result<Vec<S::Value>> {
        let domain = store.domain(variable)?;
        let mut ranked: Vec<(usize, S::Value)> = Vec::with_capacity(domain.len());

        for candidate in domain.iter() {
            let mut eliminated = 0usize;

            for &arc in graph.outgoing_from(variable) {
                let constraint = graph.constraint(arc);
                let neighbour = constraint.target();
                if assignment.is_assigned(neighbour) {
                    continue;
                }
                for support in store.domain(neighbour)?.iter() {
                    if !constraint.admissible(candidate, support) {
                        eliminated += 1;
                    }
                }
            }
            for &arc in graph.incoming_to(variable) {
                let constraint = graph.constraint(arc);
                let neighbour = constraint.source();
                if assignment.is_assigned(neighbour) {
                    continue;
                }
                for other in store.domain(neighbour)?.iter() {
                    if !constraint.admissible(other, candidate) {
                        eliminated += 1;
                    }
                }
            }

            ranked.push((eliminated, candidate.clone()));
        }

        // Stable sort: equally-constraining values keep their domain order.
        ranked.sort_by_key(|(eliminated, _)| *eliminated);
        Ok(ranked.into_iter().map(|(_, value)| value).collect())
    }
}
