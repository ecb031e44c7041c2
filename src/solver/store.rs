use std::sync::Arc;

use im::{HashMap, OrdSet};

use crate::{
    error::{Result, SolverError},
    solver::{
        engine::VariableId,
        semantics::DomainSemantics,
        value::{ValueEquality, ValueOrdering},
    },
};

pub type Domains<V> = HashMap<VariableId, Domain<V>>;

/// The set of candidate values for a single variable.
///
/// Backed by a persistent ordered set: narrowing produces a new `Domain`
/// sharing structure with the old one, and iteration order is always the
/// value order, which keeps the heuristics deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain<V: ValueOrdering>(OrdSet<V>);

impl<V: ValueOrdering> Domain<V> {
    pub fn new(values: OrdSet<V>) -> Self {
        Self(values)
    }

    /// A domain containing exactly one value.
    pub fn singleton(value: V) -> Self {
        Self(OrdSet::unit(value))
    }

    /// Returns the number of candidate values in the domain.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the domain contains no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the domain contains exactly one value.
    pub fn is_singleton(&self) -> bool {
        self.len() == 1
    }

    /// If the domain is a singleton, returns the single value. Otherwise, `None`.
    pub fn singleton_value(&self) -> Option<V> {
        if self.is_singleton() {
            self.0.get_min().cloned()
        } else {
            None
        }
    }

    pub fn contains(&self, value: &V) -> bool {
        self.0.contains(value)
    }

    /// Iterates the candidate values in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.0.iter()
    }

    /// Creates a new domain containing only the values that satisfy the predicate.
    pub fn retain(&self, f: impl Fn(&V) -> bool) -> Self {
        Self(self.0.iter().filter(|v| f(v)).cloned().collect())
    }
}

impl<V: ValueOrdering> FromIterator<V> for Domain<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The current candidate-value set for every variable in a problem.
///
/// A `DomainStore` is one state in the solver's search space. Because it uses
/// persistent (immutable) data structures, it can be cloned cheaply: pruning
/// a domain creates a successor store rather than modifying this one, so
/// backtracking is simply dropping the successor.
#[derive(Clone, Debug)]
pub struct DomainStore<S: DomainSemantics> {
    domains: Domains<S::Value>,
    semantics: Arc<S>,
}

impl<S: DomainSemantics> DomainStore<S> {
    pub fn new(domains: Domains<S::Value>, semantics: Arc<S>) -> Self {
        Self { domains, semantics }
    }

    /// Read-only access to the problem's semantics, shared across all stores.
    pub fn semantics(&self) -> &Arc<S> {
        &self.semantics
    }

    pub fn variable_count(&self) -> usize {
        self.domains.len()
    }

    pub fn variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.domains.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &Domain<S::Value>)> {
        self.domains.iter().map(|(variable, domain)| (*variable, domain))
    }

    /// The domain of `variable`.
    ///
    /// A missing entry is a caller programming error (a constraint referencing
    /// a variable that was never given a domain) and fails loudly.
    pub fn domain(&self, variable: VariableId) -> Result<&Domain<S::Value>> {
        Ok(self
            .domains
            .get(&variable)
            .ok_or(SolverError::UnknownVariable(variable))?)
    }

    /// Whether `variable`'s domain has been wiped out.
    pub fn is_empty(&self, variable: VariableId) -> Result<bool> {
        Ok(self.domain(variable)?.is_empty())
    }

    /// Checks if every variable's domain is a singleton.
    pub fn is_complete(&self) -> bool {
        self.domains.values().all(Domain::is_singleton)
    }

    /// A successor store with `variable` bound to `domain`.
    pub fn with_domain(&self, variable: VariableId, domain: Domain<S::Value>) -> Self {
        Self {
            domains: self.domains.update(variable, domain),
            semantics: self.semantics.clone(),
        }
    }

    /// Removes every value of `variable`'s domain failing `predicate`.
    ///
    /// Returns the (possibly unchanged) store plus whether any value was
    /// removed. Narrowing only — a store never regains values.
    pub fn narrow(
        &self,
        variable: VariableId,
        predicate: impl Fn(&S::Value) -> bool,
    ) -> Result<(Self, bool)> {
        let current = self.domain(variable)?;
        let narrowed = current.retain(predicate);
        if narrowed.len() < current.len() {
            Ok((self.with_domain(variable, narrowed), true))
        } else {
            Ok((self.clone(), false))
        }
    }
}

/// A partial mapping from variables to chosen values, built during search.
///
/// The top-level solve call owns exactly one `Assignment` and passes it by
/// exclusive reference into each recursive search step; entries are added on
/// trial and removed on backtrack. It is never reused across problem
/// instances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment<V: ValueEquality> {
    values: std::collections::HashMap<VariableId, V>,
}

impl<V: ValueEquality> Assignment<V> {
    pub fn new() -> Self {
        Self {
            values: std::collections::HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn assign(&mut self, variable: VariableId, value: V) {
        self.values.insert(variable, value);
    }

    pub fn unassign(&mut self, variable: VariableId) {
        self.values.remove(&variable);
    }

    pub fn value_of(&self, variable: VariableId) -> Option<&V> {
        self.values.get(&variable)
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.values.contains_key(&variable)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &V)> {
        self.values.iter().map(|(variable, value)| (*variable, value))
    }
}

impl<V: ValueEquality> Default for Assignment<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{constraint::Constraint, value::StandardValue};

    #[derive(Debug, Clone)]
    struct TestSemantics;

    impl DomainSemantics for TestSemantics {
        type Value = StandardValue;
        type ConstraintDefinition = ();

        fn build_constraint(
            &self,
            _definition: &Self::ConstraintDefinition,
        ) -> Box<dyn Constraint<Self>> {
            unimplemented!("not needed for store unit tests")
        }
    }

    fn int_val(i: i64) -> StandardValue {
        StandardValue::Int(i)
    }

    fn store_with(domains: &[(VariableId, &[i64])]) -> DomainStore<TestSemantics> {
        let mut map = Domains::new();
        for (variable, values) in domains {
            map.insert(*variable, values.iter().copied().map(int_val).collect());
        }
        DomainStore::new(map, Arc::new(TestSemantics))
    }

    #[test]
    fn narrow_removes_failing_values_and_reports_removal() {
        let store = store_with(&[(0, &[1, 2, 3])]);

        let (narrowed, removed) = store.narrow(0, |v| *v != int_val(2)).unwrap();

        assert!(removed);
        assert_eq!(
            narrowed.domain(0).unwrap().iter().cloned().collect::<Vec<_>>(),
            vec![int_val(1), int_val(3)]
        );
        assert!(!narrowed.domain(0).unwrap().contains(&int_val(2)));
        // The original store is untouched.
        assert_eq!(store.domain(0).unwrap().len(), 3);
    }

    #[test]
    fn narrow_reports_no_removal_when_all_values_pass() {
        let store = store_with(&[(0, &[1, 2])]);

        let (narrowed, removed) = store.narrow(0, |_| true).unwrap();

        assert!(!removed);
        assert_eq!(narrowed.domain(0).unwrap().len(), 2);
    }

    #[test]
    fn unknown_variable_fails_loudly() {
        let store = store_with(&[(0, &[1])]);

        assert!(store.domain(7).is_err());
        assert!(store.narrow(7, |_| true).is_err());
    }

    #[test]
    fn wiped_out_domain_is_reported_empty() {
        let store = store_with(&[(0, &[1])]);

        let (narrowed, removed) = store.narrow(0, |_| false).unwrap();

        assert!(removed);
        assert!(narrowed.is_empty(0).unwrap());
    }

    #[test]
    fn complete_store_has_only_singletons() {
        assert!(store_with(&[(0, &[4]), (1, &[7])]).is_complete());
        assert!(!store_with(&[(0, &[4]), (1, &[7, 8])]).is_complete());
    }

    #[test]
    fn assignment_tracks_trial_and_undo() {
        let mut assignment = Assignment::new();
        assert!(assignment.is_empty());

        assignment.assign(3, int_val(5));
        assert_eq!(assignment.value_of(3), Some(&int_val(5)));
        assert!(assignment.is_assigned(3));
        assert_eq!(assignment.len(), 1);

        assignment.unassign(3);
        assert!(!assignment.is_assigned(3));
        assert!(assignment.is_empty());
    }
}
