//! Alphabet and state inference over a bare transition relation.
//!
//! An automaton never declares its alphabet or state set up front; both are
//! derived from the transition relation on demand. Both functions are total:
//! an empty relation yields an empty alphabet and a state set holding only
//! the initial state.

use std::collections::{BTreeSet, HashMap};

use crate::state::{State, StateSet, Symbol};

/// The set of symbols appearing in any transition key.
pub fn alphabet<Q, S>(transitions: &HashMap<(Q, S), StateSet<Q>>) -> BTreeSet<S>
where
    Q: State,
    S: Symbol,
{
    transitions
        .keys()
        .map(|(_, symbol)| symbol.clone())
        .collect()
}

/// The full state set implied by a transition relation: the initial state,
/// every state with an outgoing transition, and every transition target.
pub fn states<Q, S>(transitions: &HashMap<(Q, S), StateSet<Q>>, initial_state: &Q) -> StateSet<Q>
where
    Q: State,
    S: Symbol,
{
    let mut all = StateSet::singleton(initial_state.clone());
    for ((source, _), destinations) in transitions {
        all.insert(source.clone());
        all.union_with(destinations);
    }
    all
}
