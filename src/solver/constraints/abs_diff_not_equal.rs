use crate::solver::{
    constraint::{Constraint, ConstraintDescriptor},
    engine::VariableId,
    semantics::DomainSemantics,
    value::ValueArithmetic,
};

/// An arc requiring `|source_value - target_value| != difference`.
///
/// The classic use is N-queens diagonals: queens in columns `i` and `j`
/// attack diagonally exactly when their rows differ by `|i - j|`.
#[derive(Debug, Clone)]
pub struct AbsoluteDifferenceNotEqualConstraint<S: DomainSemantics> {
    pub vars: [VariableId; 2],
    difference: S::Value,
}

impl<S: DomainSemantics> AbsoluteDifferenceNotEqualConstraint<S> {
    pub fn new(source: VariableId, target: VariableId, difference: S::Value) -> Self {
        Self {
            vars: [source, target],
            difference,
        }
    }
}

impl<S: DomainSemantics> Constraint<S> for AbsoluteDifferenceNotEqualConstraint<S>
where
    S::Value: ValueArithmetic,
{
    fn source(&self) -> VariableId {
        self.vars[0]
    }

    fn target(&self) -> VariableId {
        self.vars[1]
    }

    fn admissible(&self, source_value: &S::Value, target_value: &S::Value) -> bool {
        source_value.sub(target_value).abs() != self.difference
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "AbsoluteDifferenceNotEqualConstraint".to_string(),
            description: format!(
                "|?{} - ?{}| != {:?}",
                self.vars[0], self.vars[1], self.difference
            ),
        }
    }
}
