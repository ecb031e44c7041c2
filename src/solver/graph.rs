use std::collections::HashMap;

use crate::solver::{
    constraint::Constraint,
    engine::{ConstraintId, VariableId},
    semantics::DomainSemantics,
};

/// The fixed set of arcs of a problem, with adjacency derived up front.
///
/// Adjacency is directional: `outgoing_from(v)` are the arcs that prune `v`'s
/// domain, `incoming_to(v)` the arcs that consult it for support. The
/// propagator's worklist discipline and the search consistency check are both
/// expressed in terms of these two indexes.
#[derive(Debug)]
pub struct ConstraintGraph<S: DomainSemantics> {
    constraints: Vec<Box<dyn Constraint<S>>>,
    outgoing: HashMap<VariableId, Vec<ConstraintId>>,
    incoming: HashMap<VariableId, Vec<ConstraintId>>,
}

impl<S: DomainSemantics> ConstraintGraph<S> {
    pub fn new(constraints: Vec<Box<dyn Constraint<S>>>) -> Self {
        let mut outgoing: HashMap<VariableId, Vec<ConstraintId>> = HashMap::new();
        let mut incoming: HashMap<VariableId, Vec<ConstraintId>> = HashMap::new();
        for (id, constraint) in constraints.iter().enumerate() {
            outgoing.entry(constraint.source()).or_default().push(id);
            incoming.entry(constraint.target()).or_default().push(id);
        }
        Self {
            constraints,
            outgoing,
            incoming,
        }
    }

    /// Builds every definition through the semantics' constraint factory.
    pub fn from_definitions(semantics: &S, definitions: &[S::ConstraintDefinition]) -> Self {
        Self::new(
            definitions
                .iter()
                .map(|definition| semantics.build_constraint(definition))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn constraint(&self, id: ConstraintId) -> &dyn Constraint<S> {
        self.constraints[id].as_ref()
    }

    /// All arc ids, in registration order.
    pub fn arcs(&self) -> impl Iterator<Item = ConstraintId> {
        0..self.constraints.len()
    }

    /// Arcs whose source is `variable` (they prune `variable`'s domain).
    pub fn outgoing_from(&self, variable: VariableId) -> &[ConstraintId] {
        self.outgoing.get(&variable).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Arcs whose target is `variable` (they read `variable`'s domain for
    /// support, so they must be re-checked whenever it shrinks).
    pub fn incoming_to(&self, variable: VariableId) -> &[ConstraintId] {
        self.incoming.get(&variable).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{constraints::not_equal::NotEqualConstraint, value::StandardValue};

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

    #[test]
    fn adjacency_is_directional() {
        let graph = ConstraintGraph::from_definitions(
            &TestSemantics,
            &[
                NotEqualConstraint::new(0, 1),
                NotEqualConstraint::new(1, 0),
                NotEqualConstraint::new(0, 2),
            ],
        );

        assert!(!graph.is_empty());
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.outgoing_from(0), &[0, 2]);
        assert_eq!(graph.incoming_to(0), &[1]);
        assert_eq!(graph.outgoing_from(1), &[1]);
        assert_eq!(graph.incoming_to(2), &[2]);
        assert!(graph.outgoing_from(9).is_empty());
    }
}
