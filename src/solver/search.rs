use crate::{
    error::Result,
    solver::{
        engine::{SearchStats, VariableId},
        graph::ConstraintGraph,
        heuristics::{value::ValueOrderingHeuristic, variable::VariableSelectionHeuristic},
        semantics::DomainSemantics,
        store::{Assignment, DomainStore},
    },
};

/// A strategy for finding a complete assignment over an already-propagated
/// store.
pub trait SearchStrategy<S: DomainSemantics> {
    fn solve(
        &self,
        graph: &ConstraintGraph<S>,
        store: &DomainStore<S>,
        stats: &mut SearchStats,
    ) -> Result<Option<Assignment<S::Value>>>;
}

/// Depth-first backtracking search over partial assignments.
///
/// Each step selects one unassigned variable, tries its candidate values in
/// heuristic order, and extends the assignment when the candidate is
/// consistent with every already-assigned neighbour. The store is never
/// re-propagated mid-search; consistency is a local check against assigned
/// neighbours only.
pub struct BacktrackingSearch<S: DomainSemantics> {
    variable_heuristic: Box<dyn VariableSelectionHeuristic<S>>,
    value_heuristic: Box<dyn ValueOrderingHeuristic<S>>,
}

impl<S: DomainSemantics> BacktrackingSearch<S> {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic<S>>,
        value_heuristic: Box<dyn ValueOrderingHeuristic<S>>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
        }
    }

    fn search(
        &self,
        graph: &ConstraintGraph<S>,
        store: &DomainStore<S>,
        assignment: &mut Assignment<S::Value>,
        stats: &mut SearchStats,
    ) -> Result<bool> {
        stats.nodes_visited += 1;

        // Base case: every variable has a value.
        if assignment.len() == store.variable_count() {
            return Ok(true);
        }

        let Some(variable) = self.variable_heuristic.select_variable(store, assignment) else {
            // Unreachable while the completeness check above holds; treated as
            // complete for safety.
            return Ok(true);
        };

        for value in self
            .value_heuristic
            .order_values(variable, graph, store, assignment)?
        {
            if !Self::is_consistent(graph, assignment, variable, &value) {
                continue;
            }

            assignment.assign(variable, value);
            if self.search(graph, store, assignment, stats)? {
                return Ok(true);
            }
            assignment.unassign(variable);
            stats.backtracks += 1;
        }

        // Every candidate for this variable is a dead end.
        Ok(false)
    }

    /// Whether extending the assignment with `(variable, value)` keeps every
    /// arc between `variable` and an already-assigned neighbour satisfied.
    fn is_consistent(
        graph: &ConstraintGraph<S>,
        assignment: &Assignment<S::Value>,
        variable: VariableId,
        value: &S::Value,
    ) -> bool {
        for &arc in graph.outgoing_from(variable) {
            let constraint = graph.constraint(arc);
            if let Some(assigned) = assignment.value_of(constraint.target()) {
                if !constraint.admissible(value, assigned) {
                    return false;
                }
            }
        }
        for &arc in graph.incoming_to(variable) {
            let constraint = graph.constraint(arc);
            if let Some(assigned) = assignment.value_of(constraint.source()) {
                if !constraint.admissible(assigned, value) {
                    return false;
                }
            }
        }
        true
    }
}

impl<S: DomainSemantics> SearchStrategy<S> for BacktrackingSearch<S> {
    fn solve(
        &self,
        graph: &ConstraintGraph<S>,
        store: &DomainStore<S>,
        stats: &mut SearchStats,
    ) -> Result<Option<Assignment<S::Value>>> {
        // The assignment is owned here and lives exactly as long as this call.
        let mut assignment = Assignment::new();
        if self.search(graph, store, &mut assignment, stats)? {
            Ok(Some(assignment))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{
        constraint::Constraint,
        constraints::not_equal::NotEqualConstraint,
        heuristics::{
            value::LeastConstrainingValueHeuristic, variable::MinimumRemainingValuesHeuristic,
        },
        store::Domains,
        value::StandardValue,
    };

    #[derive(Debug, Clone)]
    struct TestSemantics;

    impl DomainSemantics for TestSemantics {
        type Value = StandardValue;
        type ConstraintDefinition = NotEqualConstraint<Self>;

        fn build_constraint(
            &self,
            definition: &Self::ConstraintDefinition,
        ) -> Box<dyn Constraint<Self>> {
            Box::new(definition.clone())
        }
    }

    fn int_val(i: i64) -> StandardValue {
        StandardValue::Int(i)
    }

    fn store_with(domains: &[(u32, &[i64])]) -> DomainStore<TestSemantics> {
        let mut map = Domains::new();
        for (variable, values) in domains {
            map.insert(*variable, values.iter().copied().map(int_val).collect());
        }
        DomainStore::new(map, Arc::new(TestSemantics))
    }

    fn all_different_graph(variables: &[u32]) -> ConstraintGraph<TestSemantics> {
        let mut definitions = Vec::new();
        for &a in variables {
            for &b in variables {
                if a != b {
                    definitions.push(NotEqualConstraint::new(a, b));
                }
            }
        }
        ConstraintGraph::from_definitions(&TestSemantics, &definitions)
    }

    fn searcher() -> BacktrackingSearch<TestSemantics> {
        BacktrackingSearch::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }

    #[test]
    fn finds_a_complete_consistent_assignment() {
        let graph = all_different_graph(&[0, 1, 2]);
        let store = store_with(&[(0, &[1, 2, 3]), (1, &[1, 2, 3]), (2, &[1, 2, 3])]);

        let assignment = searcher()
            .solve(&graph, &store, &mut SearchStats::default())
            .unwrap()
            .unwrap();

        assert_eq!(assignment.len(), 3);
        let mut values: Vec<_> = assignment.iter().map(|(_, v)| v.clone()).collect();
        values.sort();
        assert_eq!(values, vec![int_val(1), int_val(2), int_val(3)]);
    }

    #[test]
    fn backtracks_out_of_forced_dead_ends() {
        // Three all-different variables over two values: unsolvable, but only
        // search (not single-arc consistency) can prove it.
        let graph = all_different_graph(&[0, 1, 2]);
        let store = store_with(&[(0, &[1, 2]), (1, &[1, 2]), (2, &[1, 2])]);

        let mut stats = SearchStats::default();
        let assignment = searcher().solve(&graph, &store, &mut stats).unwrap();

        assert!(assignment.is_none());
        assert!(stats.backtracks > 0);
    }

    #[test]
    fn root_exhaustion_reports_no_solution() {
        let graph = all_different_graph(&[0, 1]);
        let store = store_with(&[(0, &[]), (1, &[1])]);

        let assignment = searcher()
            .solve(&graph, &store, &mut SearchStats::default())
            .unwrap();

        assert!(assignment.is_none());
    }
}
