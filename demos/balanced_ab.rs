//! Balanced a^n b^n
//!
//! This demo recognizes `a^n b^n $` with one stack symbol per `a`.
//!
//! Key concepts:
//! - String-labelled states via `StateId`
//! - Exact stack-top matching and the bottom marker
//! - Lazy step-by-step runs versus collected traces
//! - Saving a run report as JSON
//!
//! Run with: cargo run --example balanced_ab
//! Set RUST_LOG=pushdown=trace to see every fired rule.

use pushdown::builder::{input_rule, BuildError, DefinitionBuilder, RuleBuilder};
use pushdown::core::StackMatch::Top;
use pushdown::core::StackOp::{Pop, Push};
use pushdown::core::StateId;
use pushdown::definition::Definition;
use pushdown::report::RunReport;
use tracing_subscriber::EnvFilter;

fn balanced() -> Result<Definition<StateId>, BuildError> {
    let (p, q, f) = (StateId::from("p"), StateId::from("q"), StateId::from("f"));

    DefinitionBuilder::new()
        .states([p.clone(), q.clone(), f.clone()])
        .input_alphabet("ab$")
        .stack_alphabet("AZ")
        .bottom_marker('Z')
        .initial(p.clone())
        .accepting([f.clone()])
        .end_marker('$')
        .rules([
            input_rule(p.clone(), 'a', Top('Z'), p.clone(), vec![Push('A')]),
            input_rule(p.clone(), 'a', Top('A'), p.clone(), vec![Push('A')]),
            input_rule(p, 'b', Top('A'), q.clone(), vec![Pop]),
            input_rule(q.clone(), 'b', Top('A'), q.clone(), vec![Pop]),
        ])
        .rule_with(
            RuleBuilder::new()
                .from(q)
                .on('$')
                .top('Z')
                .to(f)
                .label("accept"),
        )?
        .build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("=== Balanced a^n b^n Demo ===\n");

    let definition = balanced()?;

    println!("Transition table:");
    for rule in definition.rules() {
        println!("  {rule}");
    }

    println!("\n--- Stepping through \"aabb$\" ---");
    for configuration in definition.run("aabb$") {
        println!("  {configuration}");
    }

    for input in ["ab$", "aab$", "abb$", "ab"] {
        println!("\n--- Trace of {input:?} ---");
        println!("{}", definition.trace(input).render());
    }

    println!("\n--- Terminated run of \"aaabbb\" ---");
    let trace = definition.run_terminated("aaabbb").into_trace();
    println!("{}", trace.render());

    println!("\n--- Run report ---");
    let report = RunReport::capture(&definition, "ab$");
    println!("{}", report.to_json()?);

    Ok(())
}
