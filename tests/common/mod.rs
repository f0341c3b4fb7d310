//! Automata shared by the integration tests.

#![allow(dead_code)]

use pushdown::builder::{input_rule, lambda_rule, production, DefinitionBuilder, RuleBuilder};
use pushdown::core::StackMatch::{Any, Top};
use pushdown::core::StackOp::{Pop, Push};
use pushdown::core::StateId;
use pushdown::definition::{AcceptanceMode, Definition};
use pushdown::state_enum;

pub fn id(name: &str) -> StateId {
    StateId::from(name)
}

/// `a^n b^n $` for n >= 1: push A per `a`, pop one per `b`, accept on `$`
/// over the bottom marker.
pub fn balanced() -> Definition<StateId> {
    DefinitionBuilder::new()
        .states([id("p"), id("q"), id("f")])
        .input_alphabet("ab$")
        .stack_alphabet("AZ")
        .bottom_marker('Z')
        .initial(id("p"))
        .accepting([id("f")])
        .acceptance(AcceptanceMode::FinalStateAndEmptyStack)
        .end_marker('$')
        .rules([
            input_rule(id("p"), 'a', Top('Z'), id("p"), vec![Push('A')]),
            input_rule(id("p"), 'a', Top('A'), id("p"), vec![Push('A')]),
            input_rule(id("p"), 'b', Top('A'), id("q"), vec![Pop]),
            input_rule(id("q"), 'b', Top('A'), id("q"), vec![Pop]),
            input_rule(id("q"), '$', Top('Z'), id("f"), vec![]),
        ])
        .build()
        .expect("balanced automaton is well formed")
}

state_enum! {
    /// States of the grammar-expansion recognizer for `S -> aSb | ε`.
    ///
    /// `Read` consumes one symbol and remembers it in `SawA`, `SawB` or
    /// `SawEnd`; lambda rules there expand or match the stack top.
    pub enum Expansion {
        Start,
        Read,
        SawA,
        SawB,
        SawEnd,
        Accept,
    }
}

/// `a^n b^n $` for n >= 0, driven by lambda expansions of `S -> aSb | ε`.
pub fn grammar() -> Definition<Expansion> {
    use Expansion::*;

    DefinitionBuilder::new()
        .states([Start, Read, SawA, SawB, SawEnd, Accept])
        .input_alphabet("ab$")
        .stack_alphabet("Zab$S")
        .bottom_marker('Z')
        .initial(Start)
        .accepting([Accept])
        .end_marker('$')
        // P -> S$
        .rule_with(
            RuleBuilder::new()
                .from(Start)
                .on_lambda()
                .top('Z')
                .to(Read)
                .push('$')
                .push('S')
                .label("P -> S$"),
        )
        .map(|b| {
            b.rules([
                input_rule(Read, 'a', Any, SawA, vec![]),
                input_rule(Read, 'b', Any, SawB, vec![]),
                input_rule(Read, '$', Any, SawEnd, vec![]),
                production(SawA, 'S', "aSb"),
                production(SawB, 'S', ""),
                production(SawEnd, 'S', ""),
                lambda_rule(SawA, 'a', Read, vec![Pop]),
                lambda_rule(SawB, 'b', Read, vec![Pop]),
                lambda_rule(SawEnd, '$', Accept, vec![Pop]),
            ])
        })
        .and_then(|b| b.build())
        .expect("grammar automaton is well formed")
}

/// Whether `input` is `a^n b^n $` with `n >= min`.
pub fn is_anbn_terminated(input: &str, min: usize) -> bool {
    let Some(body) = input.strip_suffix('$') else {
        return false;
    };
    let n = body.chars().take_while(|&c| c == 'a').count();
    n >= min && body.len() == 2 * n && body[n..].chars().all(|c| c == 'b')
}
