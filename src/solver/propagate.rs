use std::time::Instant;

use tracing::debug;

use crate::{
    error::Result,
    solver::{
        constraint::Constraint,
        engine::SearchStats,
        graph::ConstraintGraph,
        semantics::DomainSemantics,
        store::DomainStore,
        work_list::WorkList,
    },
};

/// Establishes arc consistency with the AC-3 algorithm.
///
/// The worklist starts with every arc. Revising arc `(Vi, Vj)` drops each
/// candidate of `Vi` with no support left in `Vj`; a shrink re-queues every
/// arc that reads `Vi` for support, except the one sourced at `Vj` (its
/// supports were just consulted). Runs to a fixed point, or fails early the
/// moment a domain is wiped out. Worst case O(e·d³) for e arcs and maximum
/// domain size d.
pub struct Propagator;

impl Propagator {
    /// Narrows `store` until it is arc-consistent.
    ///
    /// Returns `Ok(None)` on a domain wipe-out: the problem has no solution
    /// and no further processing is worthwhile. The arc-consistent store this
    /// returns is an upper bound for search, not necessarily a solution.
    pub fn run<S: DomainSemantics>(
        graph: &ConstraintGraph<S>,
        store: DomainStore<S>,
        stats: &mut SearchStats,
    ) -> Result<Option<DomainStore<S>>> {
        let mut store = store;

        let mut worklist = WorkList::new();
        for arc in graph.arcs() {
            worklist.push_back(arc);
        }

        while let Some(arc) = worklist.pop_front() {
            let constraint = graph.constraint(arc);
            let started = Instant::now();
            let (revised, removed) = Self::revise(constraint, &store)?;

            let arc_stats = stats.constraint_stats.entry(arc).or_default();
            arc_stats.revisions += 1;
            arc_stats.time_spent_micros += started.elapsed().as_micros() as u64;

            if !removed {
                continue;
            }
            arc_stats.prunings += 1;

            if revised.is_empty(constraint.source())? {
                debug!(variable = constraint.source(), "domain wiped out during propagation");
                return Ok(None);
            }
            store = revised;

            // The domain of the arc's source shrank, so every arc that was
            // counting on it for support values must be re-checked.
            for &dependent in graph.incoming_to(constraint.source()) {
                if graph.constraint(dependent).source() != constraint.target() {
                    worklist.push_back(dependent);
                }
            }
        }

        debug!("propagation reached a fixed point");
        Ok(Some(store))
    }

    /// Drops every candidate of the arc's source that has no admissible
    /// partner left in the target's domain.
    fn revise<S: DomainSemantics>(
        constraint: &dyn Constraint<S>,
        store: &DomainStore<S>,
    ) -> Result<(DomainStore<S>, bool)> {
        let target_domain = store.domain(constraint.target())?.clone();
        store.narrow(constraint.source(), |candidate| {
            target_domain
                .iter()
                .any(|support| constraint.admissible(candidate, support))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{
        constraints::not_equal::NotEqualConstraint,
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

    fn graph_of(pairs: &[(u32, u32)]) -> ConstraintGraph<TestSemantics> {
        let definitions: Vec<_> = pairs
            .iter()
            .map(|(a, b)| NotEqualConstraint::new(*a, *b))
            .collect();
        ConstraintGraph::from_definitions(&TestSemantics, &definitions)
    }

    #[test]
    fn prunes_against_singleton_neighbour() {
        let graph = graph_of(&[(0, 1), (1, 0)]);
        let store = store_with(&[(0, &[1, 2]), (1, &[1])]);

        let pruned = Propagator::run(&graph, store, &mut SearchStats::default())
            .unwrap()
            .unwrap();

        assert_eq!(
            pruned.domain(0).unwrap().singleton_value(),
            Some(int_val(2))
        );
    }

    #[test]
    fn revision_cascades_through_the_graph() {
        // 2 is pinned, which forces 1, which forces 0.
        let graph = graph_of(&[(0, 1), (1, 0), (1, 2), (2, 1), (0, 2), (2, 0)]);
        let store = store_with(&[(0, &[1, 2, 3]), (1, &[1, 2]), (2, &[1])]);

        let pruned = Propagator::run(&graph, store, &mut SearchStats::default())
            .unwrap()
            .unwrap();

        assert_eq!(pruned.domain(1).unwrap().singleton_value(), Some(int_val(2)));
        assert_eq!(pruned.domain(0).unwrap().singleton_value(), Some(int_val(3)));
    }

    #[test]
    fn wipe_out_fails_propagation() {
        let graph = graph_of(&[(0, 1), (1, 0)]);
        let store = store_with(&[(0, &[5]), (1, &[5])]);

        let outcome = Propagator::run(&graph, store, &mut SearchStats::default()).unwrap();

        assert!(outcome.is_none());
    }

    #[test]
    fn propagation_is_idempotent() {
        let graph = graph_of(&[(0, 1), (1, 0), (1, 2), (2, 1)]);
        let store = store_with(&[(0, &[1, 2, 3]), (1, &[2]), (2, &[2, 3])]);

        let once = Propagator::run(&graph, store, &mut SearchStats::default())
            .unwrap()
            .unwrap();

        let mut second_stats = SearchStats::default();
        let twice = Propagator::run(&graph, once.clone(), &mut second_stats)
            .unwrap()
            .unwrap();

        for variable in once.variables() {
            assert_eq!(
                once.domain(variable).unwrap(),
                twice.domain(variable).unwrap()
            );
        }
        let second_prunings: u64 = second_stats
            .constraint_stats
            .values()
            .map(|arc_stats| arc_stats.prunings)
            .sum();
        assert_eq!(second_prunings, 0);
    }

    #[test]
    fn unknown_variable_in_constraint_is_an_error() {
        let graph = graph_of(&[(0, 9)]);
        let store = store_with(&[(0, &[1])]);

        assert!(Propagator::run(&graph, store, &mut SearchStats::default()).is_err());
    }
}
