//! Nondeterministic Finite Automaton (NFA) implementation.

use std::collections::{BTreeSet, HashMap};

use crate::inference;
use crate::state::{State, StateSet, Symbol};

/// A Nondeterministic Finite Automaton.
///
/// The transition relation maps `(source, symbol)` to a *set* of successor
/// states: zero, one, or many. A missing entry means "no transition" and
/// simulation treats it as the empty successor set, never as an error.
///
/// Automata are built once and then queried; no query mutates the
/// automaton, so instances can be shared read-only.
#[derive(Debug, Clone)]
pub struct Nfa<Q: State, S: Symbol> {
    /// Transitions: (source, symbol) -> set of destination states
    transitions: HashMap<(Q, S), StateSet<Q>>,
    /// Initial state
    initial_state: Q,
    /// Final (accepting) states
    final_states: StateSet<Q>,
}

impl<Q: State, S: Symbol> Nfa<Q, S> {
    /// Create an NFA with the given initial state and no transitions.
    pub fn new(initial_state: Q) -> Self {
        Self {
            transitions: HashMap::new(),
            initial_state,
            final_states: StateSet::new(),
        }
    }

    /// Create an NFA from a complete transition relation, an initial state,
    /// and an iterable of final states.
    pub fn from_parts<F>(
        transitions: HashMap<(Q, S), StateSet<Q>>,
        initial_state: Q,
        final_states: F,
    ) -> Self
    where
        F: IntoIterator<Item = Q>,
    {
        Self {
            transitions,
            initial_state,
            final_states: final_states.into_iter().collect(),
        }
    }

    /// Add a transition from source to destination on the given symbol.
    pub fn add_transition(&mut self, source: Q, symbol: S, destination: Q) {
        self.transitions
            .entry((source, symbol))
            .or_default()
            .insert(destination);
    }

    /// Add a final (accepting) state.
    pub fn add_final_state(&mut self, state: Q) {
        self.final_states.insert(state);
    }

    /// Get the initial state.
    pub fn initial_state(&self) -> &Q {
        &self.initial_state
    }

    /// Get the final states.
    pub fn final_states(&self) -> &StateSet<Q> {
        &self.final_states
    }

    /// Get the input alphabet, inferred from the transition relation.
    pub fn alphabet(&self) -> BTreeSet<S> {
        inference::alphabet(&self.transitions)
    }

    /// Get the full state set, inferred from the transition relation and
    /// the initial state.
    pub fn states(&self) -> StateSet<Q> {
        inference::states(&self.transitions, &self.initial_state)
    }

    /// One-symbol step from a set of states: the union of all successor
    /// sets. States with no transition on `symbol` contribute nothing.
    pub fn move_on_symbol(&self, states: &StateSet<Q>, symbol: &S) -> StateSet<Q> {
        let mut reached = StateSet::new();
        for state in states.iter() {
            if let Some(destinations) = self.transitions.get(&(state.clone(), symbol.clone())) {
                reached.union_with(destinations);
            }
        }
        reached
    }

    /// Extended transition function: the set of states reachable from
    /// `state` after consuming the whole input.
    ///
    /// Empty input returns `{state}` unchanged.
    pub fn extended_transition<I>(&self, state: &Q, input: I) -> StateSet<Q>
    where
        I: IntoIterator<Item = S>,
    {
        let mut current = StateSet::singleton(state.clone());
        for symbol in input {
            current = self.move_on_symbol(&current, &symbol);
        }
        current
    }

    /// Check whether the automaton accepts the input, i.e. whether any
    /// state reachable from the initial state after consuming it is final.
    pub fn accepts<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = S>,
    {
        self.extended_transition(&self.initial_state, input)
            .intersects(&self.final_states)
    }

    /// Get all transitions as (source, symbol, destination) triples.
    pub fn transitions(&self) -> impl Iterator<Item = (&Q, &S, &Q)> + '_ {
        self.transitions
            .iter()
            .flat_map(|((source, symbol), destinations)| {
                destinations
                    .iter()
                    .map(move |destination| (source, symbol, destination))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The three-state automaton over {0, 1} accepting strings with "11"
    /// somewhere after the first 0 branch: q0 --0--> {q0, q1},
    /// q0 --1--> {q0}, q1 --1--> {q2}, final {q2}.
    fn sample_nfa() -> Nfa<&'static str, char> {
        let mut nfa = Nfa::new("q0");
        nfa.add_transition("q0", '0', "q0");
        nfa.add_transition("q0", '0', "q1");
        nfa.add_transition("q0", '1', "q0");
        nfa.add_transition("q1", '1', "q2");
        nfa.add_final_state("q2");
        nfa
    }

    #[test]
    fn test_accepts_sample_strings() {
        let nfa = sample_nfa();
        assert!(nfa.accepts("0001".chars()));
        assert!(!nfa.accepts("00010".chars()));
        assert!(nfa.accepts("100101".chars()));
    }

    #[test]
    fn test_extended_transition_identity() {
        let nfa = sample_nfa();
        let result = nfa.extended_transition(&"q1", std::iter::empty());
        assert_eq!(result, StateSet::singleton("q1"));
    }

    #[test]
    fn test_extended_transition_branches() {
        let nfa = sample_nfa();
        let result = nfa.extended_transition(&"q0", "0".chars());
        let expected: StateSet<&str> = ["q0", "q1"].into_iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_undefined_transition_is_empty_not_error() {
        let nfa = sample_nfa();
        // q2 has no outgoing transitions and 'x' is not in the alphabet.
        assert!(nfa.extended_transition(&"q2", "0".chars()).is_empty());
        assert!(nfa.extended_transition(&"q0", "x".chars()).is_empty());
        assert!(!nfa.accepts("x".chars()));
    }

    #[test]
    fn test_inferred_alphabet_and_states() {
        let nfa = sample_nfa();
        assert_eq!(nfa.alphabet(), ['0', '1'].into_iter().collect());

        let states = nfa.states();
        assert_eq!(states.len(), 3);
        for state in ["q0", "q1", "q2"] {
            assert!(states.contains(&state));
        }
    }

    #[test]
    fn test_degenerate_nfa_without_transitions() {
        let nfa: Nfa<&str, char> = Nfa::new("q0");
        assert!(nfa.alphabet().is_empty());
        assert_eq!(nfa.states(), StateSet::singleton("q0"));
        assert!(!nfa.accepts("".chars()));
        assert!(!nfa.accepts("0001".chars()));
    }

    #[test]
    fn test_from_parts() {
        let mut transitions = HashMap::new();
        transitions.insert(("q0", '0'), ["q0", "q1"].into_iter().collect());
        transitions.insert(("q0", '1'), ["q0"].into_iter().collect());
        transitions.insert(("q1", '1'), ["q2"].into_iter().collect());
        let nfa = Nfa::from_parts(transitions, "q0", ["q2"]);

        assert!(nfa.accepts("0001".chars()));
        assert!(!nfa.accepts("00010".chars()));
        assert_eq!(nfa.transitions().count(), 4);
    }
}
