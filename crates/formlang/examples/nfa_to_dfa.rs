//! Builds a small sample NFA, evaluates a fixed list of strings, converts
//! it to a DFA, and re-evaluates the same strings on the result.

use formlang::{Nfa, subset_construction};

fn main() {
    // q0 --0--> {q0, q1}, q0 --1--> {q0}, q1 --1--> {q2}, final {q2}
    let mut nfa = Nfa::new("q0");
    nfa.add_transition("q0", '0', "q0");
    nfa.add_transition("q0", '0', "q1");
    nfa.add_transition("q0", '1', "q0");
    nfa.add_transition("q1", '1', "q2");
    nfa.add_final_state("q2");

    let inputs = ["0001", "00010", "100101"];

    println!("nfa");
    for input in inputs {
        println!("{} -> {}", input, nfa.accepts(input.chars()));
    }

    let dfa = subset_construction(&nfa);
    println!("dfa ({} states)", dfa.states().len());
    for input in inputs {
        match dfa.accepts(input.chars()) {
            Ok(accepted) => println!("{input} -> {accepted}"),
            Err(err) => println!("{input} -> {err}"),
        }
    }
}
