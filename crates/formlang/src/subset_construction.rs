//! Subset construction algorithm for converting an NFA to a DFA.

use std::collections::HashMap;

use indexmap::IndexSet;

use crate::dfa::Dfa;
use crate::nfa::Nfa;
use crate::state::{State, StateSet, Symbol};

/// Convert an NFA into a DFA recognizing the identical language, using the
/// powerset construction.
///
/// Each DFA state is a set of NFA states; only sets reachable from the
/// NFA's initial state are explored, so the output has at most 2^n states
/// and usually far fewer. The empty set serves as an explicit dead state,
/// which makes the result complete over the NFA's inferred alphabet: every
/// discovered state has exactly one transition per symbol.
///
/// A power-set state is accepting iff it intersects the NFA's final-state
/// set. The input NFA is not mutated.
pub fn subset_construction<Q, S>(nfa: &Nfa<Q, S>) -> Dfa<StateSet<Q>, S>
where
    Q: State,
    S: Symbol,
{
    let alphabet = nfa.alphabet();
    let initial = StateSet::singleton(nfa.initial_state().clone());

    // Power-set states seen so far, in discovery order. Exploration order
    // does not affect the result, but a stable order keeps runs
    // reproducible.
    let mut discovered: IndexSet<StateSet<Q>> = IndexSet::new();
    discovered.insert(initial.clone());

    // Discovered but not yet expanded.
    let mut worklist: Vec<StateSet<Q>> = vec![initial.clone()];

    let mut transitions: HashMap<(StateSet<Q>, S), StateSet<Q>> = HashMap::new();

    while let Some(current) = worklist.pop() {
        for symbol in &alphabet {
            let successor = nfa.move_on_symbol(&current, symbol);

            if discovered.insert(successor.clone()) {
                log::debug!("discovered power-set state {successor:?}");
                worklist.push(successor.clone());
            }

            // Recorded even when the successor is empty, so the DFA stays
            // complete over the alphabet.
            transitions.insert((current.clone(), symbol.clone()), successor);
        }
    }

    let final_states: Vec<StateSet<Q>> = discovered
        .iter()
        .filter(|subset| subset.intersects(nfa.final_states()))
        .cloned()
        .collect();

    log::debug!(
        "subset construction: {} power-set states over {} symbols, {} accepting",
        discovered.len(),
        alphabet.len(),
        final_states.len()
    );

    Dfa::from_parts(transitions, initial, final_states)
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_initial_state_is_singleton_of_nfa_initial() {
        let dfa = subset_construction(&sample_nfa());
        assert_eq!(dfa.initial_state(), &StateSet::singleton("q0"));
    }

    #[test]
    fn test_converted_dfa_matches_nfa_verdicts() {
        let nfa = sample_nfa();
        let dfa = subset_construction(&nfa);

        for input in ["0001", "00010", "100101", "", "0", "11", "0101"] {
            assert_eq!(
                dfa.accepts(input.chars()),
                Ok(nfa.accepts(input.chars())),
                "verdicts diverge on {input:?}"
            );
        }
    }

    #[test]
    fn test_converted_dfa_is_complete() {
        let nfa = sample_nfa();
        let dfa = subset_construction(&nfa);
        let alphabet = nfa.alphabet();

        assert_eq!(dfa.alphabet(), alphabet);
        assert!(dfa.is_complete(alphabet.iter()));
        // Exactly one transition per discovered state and symbol.
        assert_eq!(
            dfa.transitions().count(),
            dfa.states().len() * alphabet.len()
        );
    }

    #[test]
    fn test_accepting_states_intersect_nfa_finals() {
        let nfa = sample_nfa();
        let dfa = subset_construction(&nfa);

        for state in dfa.states().iter() {
            assert_eq!(
                dfa.final_states().contains(state),
                state.intersects(nfa.final_states())
            );
        }
    }

    #[test]
    fn test_state_count_within_powerset_bound() {
        let nfa = sample_nfa();
        let dfa = subset_construction(&nfa);
        assert!(dfa.states().len() <= 1 << nfa.states().len());
    }

    #[test]
    fn test_empty_alphabet_produces_single_state_dfa() {
        // Zero transitions: the converter must still terminate with a
        // single non-accepting state and no transitions.
        let nfa: Nfa<&str, char> = Nfa::new("q0");
        let dfa = subset_construction(&nfa);

        assert_eq!(dfa.states().len(), 1);
        assert_eq!(dfa.transitions().count(), 0);
        assert_eq!(dfa.accepts("".chars()), Ok(false));
    }

    #[test]
    fn test_empty_alphabet_accepting_initial() {
        let mut nfa: Nfa<&str, char> = Nfa::new("q0");
        nfa.add_final_state("q0");
        let dfa = subset_construction(&nfa);

        assert_eq!(dfa.states().len(), 1);
        assert_eq!(dfa.accepts("".chars()), Ok(true));
    }
}
