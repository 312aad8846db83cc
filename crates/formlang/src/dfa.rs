//! Deterministic Finite Automaton (DFA) implementation.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::state::{State, StateSet, Symbol};

/// Error raised when simulation hits a (state, symbol) pair with no
/// transition. A DFA is expected to be complete over the alphabet it was
/// built for, so absence means either an incomplete automaton (a
/// construction bug) or a query symbol outside that alphabet. Either way
/// the query fails loudly instead of returning a silently wrong verdict.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DfaError<Q: fmt::Debug, S: fmt::Debug> {
    #[error("no transition from state {state:?} on symbol {symbol:?}")]
    MissingTransition { state: Q, symbol: S },
}

/// Result alias for DFA simulation.
pub type DfaResult<T, Q, S> = Result<T, DfaError<Q, S>>;

/// A Deterministic Finite Automaton.
///
/// The transition relation maps `(source, symbol)` to exactly one successor
/// state. Unlike [`crate::Nfa`], a missing entry during simulation is an
/// error, not an empty step.
#[derive(Debug, Clone)]
pub struct Dfa<Q: State, S: Symbol> {
    /// Transitions: (source, symbol) -> destination
    transitions: HashMap<(Q, S), Q>,
    /// Initial state
    initial_state: Q,
    /// Final (accepting) states
    final_states: StateSet<Q>,
}

impl<Q: State, S: Symbol> Dfa<Q, S> {
    /// Create a DFA with the given initial state and no transitions.
    pub fn new(initial_state: Q) -> Self {
        Self {
            transitions: HashMap::new(),
            initial_state,
            final_states: StateSet::new(),
        }
    }

    /// Create a DFA from a complete transition relation, an initial state,
    /// and an iterable of final states.
    pub fn from_parts<F>(transitions: HashMap<(Q, S), Q>, initial_state: Q, final_states: F) -> Self
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
        self.transitions.insert((source, symbol), destination);
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

    /// Get the transition from a state on a symbol, if defined.
    pub fn transition(&self, source: &Q, symbol: &S) -> Option<&Q> {
        self.transitions.get(&(source.clone(), symbol.clone()))
    }

    /// Get the input alphabet, inferred from the transition relation.
    pub fn alphabet(&self) -> BTreeSet<S> {
        self.transitions
            .keys()
            .map(|(_, symbol)| symbol.clone())
            .collect()
    }

    /// Get the full state set: the initial state plus every transition
    /// source and destination.
    pub fn states(&self) -> StateSet<Q> {
        let mut all = StateSet::singleton(self.initial_state.clone());
        for ((source, _), destination) in &self.transitions {
            all.insert(source.clone());
            all.insert(destination.clone());
        }
        all
    }

    /// Extended transition function: the unique state reached from `state`
    /// after consuming the whole input.
    ///
    /// Empty input returns `state` unchanged. Every (state, symbol) pair
    /// encountered must have a transition; otherwise the simulation stops
    /// with [`DfaError::MissingTransition`].
    pub fn extended_transition<I>(&self, state: &Q, input: I) -> DfaResult<Q, Q, S>
    where
        I: IntoIterator<Item = S>,
    {
        let mut current = state.clone();
        for symbol in input {
            match self.transitions.get(&(current.clone(), symbol.clone())) {
                Some(destination) => current = destination.clone(),
                None => {
                    return Err(DfaError::MissingTransition {
                        state: current,
                        symbol,
                    });
                }
            }
        }
        Ok(current)
    }

    /// Check whether the automaton accepts the input, i.e. whether the
    /// state reached from the initial state after consuming it is final.
    pub fn accepts<I>(&self, input: I) -> DfaResult<bool, Q, S>
    where
        I: IntoIterator<Item = S>,
    {
        let reached = self.extended_transition(&self.initial_state, input)?;
        Ok(self.final_states.contains(&reached))
    }

    /// Check that every (state, symbol) pair over the given alphabet has a
    /// transition.
    pub fn is_complete<'a, I>(&self, alphabet: I) -> bool
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        let symbols: Vec<&S> = alphabet.into_iter().collect();
        self.states().iter().all(|state| {
            symbols
                .iter()
                .all(|&symbol| self.transition(state, symbol).is_some())
        })
    }

    /// Get all transitions as (source, symbol, destination) triples.
    pub fn transitions(&self) -> impl Iterator<Item = (&Q, &S, &Q)> + '_ {
        self.transitions
            .iter()
            .map(|((source, symbol), destination)| (source, symbol, destination))
    }
}
