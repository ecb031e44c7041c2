use crate::solver::{engine::VariableId, semantics::DomainSemantics};

#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// A directed binary constraint — an *arc* — between two distinct variables.
///
/// The arc `(source, target)` carries an admissibility predicate over value
/// pairs. Arcs are directional for arc-consistency purposes: the propagator
/// prunes the *source* domain against the *target* domain. A symmetric
/// relation (like Sudoku's not-equal) must therefore be registered in both
/// orientations by the problem frontend.
pub trait Constraint<S: DomainSemantics>: std::fmt::Debug {
    /// The variable whose domain this arc prunes.
    fn source(&self) -> VariableId;

    /// The variable whose domain supplies support values.
    fn target(&self) -> VariableId;

    /// Whether the pair `(source_value, target_value)` satisfies the
    /// constraint.
    fn admissible(&self, source_value: &S::Value, target_value: &S::Value) -> bool;

    fn descriptor(&self) -> ConstraintDescriptor;

    /// The variable this arc connects `variable` to, or `None` if the arc
    /// does not touch `variable` at all.
    fn neighbor_of(&self, variable: VariableId) -> Option<VariableId> {
        if self.source() == variable {
            Some(self.target())
        } else if self.target() == variable {
            Some(self.source())
        } else {
            None
        }
    }
}
