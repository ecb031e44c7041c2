use std::sync::Arc;

use crate::solver::{
    constraint::{Constraint, ConstraintDescriptor},
    engine::VariableId,
    semantics::DomainSemantics,
};

/// An arc whose admissibility is decided by an arbitrary closure.
///
/// This is the escape hatch for relations the standard constraint library
/// does not cover (cryptarithm carries, inequalities, and the like). The
/// closure receives `(source_value, target_value)`; remember that arcs are
/// directional, so an asymmetric relation needs a mirrored closure on the
/// reverse arc.
#[derive(Clone)]
pub struct PredicateConstraint<S: DomainSemantics> {
    vars: [VariableId; 2],
    name: String,
    predicate: Arc<dyn Fn(&S::Value, &S::Value) -> bool>,
}

impl<S: DomainSemantics> PredicateConstraint<S> {
    pub fn new(
        source: VariableId,
        target: VariableId,
        name: impl Into<String>,
        predicate: impl Fn(&S::Value, &S::Value) -> bool + 'static,
    ) -> Self {
        Self {
            vars: [source, target],
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }
}

impl<S: DomainSemantics> std::fmt::Debug for PredicateConstraint<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredicateConstraint")
            .field("vars", &self.vars)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<S: DomainSemantics> Constraint<S> for PredicateConstraint<S> {
    fn source(&self) -> VariableId {
        self.vars[0]
    }

    fn target(&self) -> VariableId {
        self.vars[1]
    }

    fn admissible(&self, source_value: &S::Value, target_value: &S::Value) -> bool {
        (self.predicate)(source_value, target_value)
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "PredicateConstraint".to_string(),
            description: format!("{}(?{}, ?{})", self.name, self.vars[0], self.vars[1]),
        }
    }
}
