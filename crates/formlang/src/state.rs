//! State and symbol types for automata.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;

/// Bound alias for automaton states: opaque, comparable, hashable
/// identifiers (integers, chars, strings, ...).
pub trait State: Clone + Ord + Hash + fmt::Debug {}

impl<T: Clone + Ord + Hash + fmt::Debug> State for T {}

/// Bound alias for input symbols.
pub trait Symbol: Clone + Ord + Hash + fmt::Debug {}

impl<T: Clone + Ord + Hash + fmt::Debug> Symbol for T {}

/// A set of states with value equality.
///
/// Backed by a sorted set so that equal sets of states are one canonical
/// value: two `StateSet`s compare equal exactly when they hold the same
/// states, and hash accordingly. This lets a `StateSet` serve as a map key
/// and, after subset construction, as a DFA state in its own right.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateSet<Q: State> {
    states: BTreeSet<Q>,
}

impl<Q: State> StateSet<Q> {
    /// Create a new empty state set.
    pub fn new() -> Self {
        Self {
            states: BTreeSet::new(),
        }
    }

    /// Create a state set containing a single state.
    pub fn singleton(state: Q) -> Self {
        let mut set = Self::new();
        set.insert(state);
        set
    }

    /// Insert a state into the set.
    pub fn insert(&mut self, state: Q) {
        self.states.insert(state);
    }

    /// Check if the set contains a state.
    pub fn contains(&self, state: &Q) -> bool {
        self.states.contains(state)
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Get the number of states in the set.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Iterate over all states in the set, in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Q> + '_ {
        self.states.iter()
    }

    /// Union this set with another, modifying self in place.
    pub fn union_with(&mut self, other: &StateSet<Q>) {
        for state in other.iter() {
            self.states.insert(state.clone());
        }
    }

    /// Check if this set intersects with another.
    pub fn intersects(&self, other: &StateSet<Q>) -> bool {
        self.states.intersection(&other.states).next().is_some()
    }
}

impl<Q: State> Default for StateSet<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: State> fmt::Debug for StateSet<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<Q: State> FromIterator<Q> for StateSet<Q> {
    fn from_iter<I: IntoIterator<Item = Q>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}
