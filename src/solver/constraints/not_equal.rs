use crate::solver::{
    constraint::{Constraint, ConstraintDescriptor},
    engine::VariableId,
    semantics::DomainSemantics,
};

/// The default arc: the two variables must take different values.
///
/// This is the pairwise building block of the all-different family used by
/// Sudoku, map colouring, and similar problems. The relation is symmetric,
/// so frontends register it in both orientations.
#[derive(Debug, Clone)]
pub struct NotEqualConstraint<S: DomainSemantics> {
    pub vars: [VariableId; 2],
    _phantom: std::marker::PhantomData<S>,
}

impl<S: DomainSemantics> NotEqualConstraint<S> {
    pub fn new(source: VariableId, target: VariableId) -> Self {
        Self {
            vars: [source, target],
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<S: DomainSemantics> Constraint<S> for NotEqualConstraint<S> {
    fn source(&self) -> VariableId {
        self.vars[0]
    }

    fn target(&self) -> VariableId {
        self.vars[1]
    }

    fn admissible(&self, source_value: &S::Value, target_value: &S::Value) -> bool {
        source_value != target_value
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "NotEqualConstraint".to_string(),
            description: format!("?{} != ?{}", self.vars[0], self.vars[1]),
        }
    }
}
