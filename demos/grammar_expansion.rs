//! Grammar Expansion
//!
//! This demo turns the grammar `S -> aSb | ε` into a top-down recognizer.
//! Productions are lambda rules that replace a nonterminal on the stack
//! with its right-hand side; terminals on the stack are matched against
//! the symbol just read.
//!
//! Key concepts:
//! - Enum states generated with `state_enum!`
//! - Wildcard stack matching for the read step
//! - Productions pushed so the leftmost symbol lands on top
//! - Rule labels carried into each configuration
//!
//! Run with: cargo run --example grammar_expansion

use pushdown::builder::{input_rule, lambda_rule, production};
use pushdown::builder::{BuildError, DefinitionBuilder, RuleBuilder};
use pushdown::core::StackMatch::Any;
use pushdown::core::StackOp::Pop;
use pushdown::definition::Definition;
use pushdown::state_enum;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Parser {
        Start,
        Read,
        SawA,
        SawB,
        SawEnd,
        Accept,
    }
}

fn recognizer() -> Result<Definition<Parser>, BuildError> {
    use Parser::*;

    DefinitionBuilder::new()
        .states([Start, Read, SawA, SawB, SawEnd, Accept])
        .input_alphabet("ab$")
        .stack_alphabet("Zab$S")
        .bottom_marker('Z')
        .initial(Start)
        .accepting([Accept])
        .end_marker('$')
        .rule_with(
            RuleBuilder::new()
                .from(Start)
                .on_lambda()
                .top('Z')
                .to(Read)
                .push('$')
                .push('S')
                .label("P -> S$"),
        )?
        // read one symbol, remembering which
        .rules([
            input_rule(Read, 'a', Any, SawA, vec![]),
            input_rule(Read, 'b', Any, SawB, vec![]),
            input_rule(Read, '$', Any, SawEnd, vec![]),
        ])
        // expand S against the lookahead
        .rule(production(SawA, 'S', "aSb"))
        .rule(production(SawB, 'S', ""))
        .rule(production(SawEnd, 'S', ""))
        // match terminals on the stack
        .rules([
            lambda_rule(SawA, 'a', Read, vec![Pop]),
            lambda_rule(SawB, 'b', Read, vec![Pop]),
            lambda_rule(SawEnd, '$', Accept, vec![Pop]),
        ])
        .build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("=== Grammar Expansion Demo ===\n");

    let definition = recognizer()?;

    println!("Transition table:");
    for rule in definition.rules() {
        match &rule.label {
            Some(label) => println!("  {rule}  [{label}]"),
            None => println!("  {rule}"),
        }
    }

    for input in ["aabb$", "$", "aab$", "ba$"] {
        println!("\n--- Trace of {input:?} ---");
        println!("{}", definition.trace(input).render());
    }

    println!("\n--- Productions applied to \"aaabbb$\" ---");
    let applied: Vec<String> = definition
        .run("aaabbb$")
        .filter_map(|c| c.rule_label)
        .collect();
    println!("  {}", applied.join(", "));

    println!("\n--- Definition document ---");
    println!("{}", definition.to_json()?);

    Ok(())
}
