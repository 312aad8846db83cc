//! Finite automata with subset construction.
//!
//! This crate provides:
//! - [`Nfa`], a nondeterministic finite automaton evaluator
//! - [`Dfa`], a deterministic finite automaton evaluator
//! - [`subset_construction`], the NFA-to-DFA powerset conversion
//! - alphabet/state inference over a bare transition relation
//!
//! States and symbols are opaque caller-supplied identifiers; anything
//! `Clone + Ord + Hash + Debug` works. Input strings are consumed as
//! iterators of symbols, so `&str` queries are written as `.chars()`:
//!
//! ```
//! use formlang::{Nfa, subset_construction};
//!
//! let mut nfa = Nfa::new("q0");
//! nfa.add_transition("q0", '0', "q0");
//! nfa.add_transition("q0", '0', "q1");
//! nfa.add_transition("q0", '1', "q0");
//! nfa.add_transition("q1", '1', "q2");
//! nfa.add_final_state("q2");
//!
//! let dfa = subset_construction(&nfa);
//! assert!(nfa.accepts("0001".chars()));
//! assert_eq!(dfa.accepts("0001".chars()), Ok(true));
//! ```

mod dfa;
mod inference;
mod nfa;
mod state;
mod subset_construction;

pub use dfa::{Dfa, DfaError, DfaResult};
pub use inference::{alphabet, states};
pub use nfa::Nfa;
pub use state::{State, StateSet, Symbol};
pub use subset_construction::subset_construction;
