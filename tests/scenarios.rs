//! End-to-end runs of complete automata.

mod common;

use common::{balanced, grammar, id, Expansion};
use pushdown::builder::DefinitionBuilder;
use pushdown::core::{Configuration, RunError, Stack, State, StateId};
use pushdown::definition::{AcceptanceMode, Definition};
use pushdown::report::RunReport;

#[test]
fn balanced_input_yields_six_configurations() {
    let definition = balanced();
    let configs: Vec<Configuration<StateId>> = definition.run("aabb$").collect();

    assert_eq!(configs.len(), 6);

    let summary: Vec<(&str, &str, String)> = configs
        .iter()
        .map(|c| {
            (
                c.state.name(),
                c.remaining_input.as_str(),
                c.stack.render_top_down(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("p", "aabb$", "Z".to_string()),
            ("p", "abb$", "AZ".to_string()),
            ("p", "bb$", "AAZ".to_string()),
            ("q", "b$", "AZ".to_string()),
            ("q", "$", "Z".to_string()),
            ("f", "", "Z".to_string()),
        ]
    );

    let last = configs.last().unwrap();
    assert_eq!(last.state, id("f"));
    assert!(last.stack.holds_only_bottom());
    assert!(last.terminal_error.is_none());
    assert!(definition.accepts(last));
}

#[test]
fn fired_rules_are_recorded_per_step() {
    let definition = balanced();
    let rules: Vec<String> = definition
        .run("ab$")
        .map(|c| c.fired_rule.map(|r| r.to_string()).unwrap_or_default())
        .collect();

    assert_eq!(
        rules,
        vec![
            String::new(),
            "(p, a, Z) -> (p, A)".to_string(),
            "(p, b, A) -> (q, λ)".to_string(),
            "(q, $, Z) -> (f, λ)".to_string(),
        ]
    );
}

#[test]
fn missing_end_symbol_is_rejected() {
    let definition = balanced();
    let trace = definition.trace("ab");

    let last = trace.last().unwrap();
    assert_ne!(last.state, id("f"));
    assert_eq!(
        last.terminal_error,
        Some(RunError::NotAcceptedAtExhaustion {
            state: "q".to_string()
        })
    );
    assert!(!trace.is_accepted());
}

#[test]
fn run_terminated_supplies_the_end_symbol() {
    let definition = balanced();
    let trace = definition.run_terminated("ab").into_trace();
    assert!(trace.is_accepted());
    assert_eq!(trace.len(), 4);
}

#[test]
fn symbol_outside_alphabet_is_a_normal_rejection() {
    let definition = balanced();
    let trace = definition.trace("ax$");

    assert_eq!(
        trace.error(),
        Some(&RunError::NoMatchingTransition {
            state: "p".to_string(),
            input: 'x',
            stack_top: 'A',
        })
    );
    assert_eq!(trace.last().unwrap().remaining_input, "x$");
}

#[test]
fn empty_input_on_accepting_start_yields_one_configuration() {
    let definition = DefinitionBuilder::new()
        .states([id("s")])
        .stack_alphabet("Z")
        .bottom_marker('Z')
        .initial(id("s"))
        .accepting([id("s")])
        .acceptance(AcceptanceMode::FinalStateAndEmptyStack)
        .build()
        .unwrap();

    let configs: Vec<_> = definition.run("").collect();
    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].state, id("s"));
    assert_eq!(configs[0].stack, Stack::new('Z'));
    assert!(configs[0].terminal_error.is_none());
}

#[test]
fn grammar_expansion_pushes_reversed_and_renders_reading_order() {
    let definition = grammar();
    let configs: Vec<_> = definition.run("ab$").collect();

    let expansion = configs
        .iter()
        .find(|c| c.rule_label.as_deref() == Some("S -> aSb"))
        .expect("the a-production fires");

    // leftmost symbol of the right-hand side lands on top
    assert_eq!(expansion.stack.render_top_down(), "aSb$Z");
    assert_eq!(expansion.stack.render_bottom_up(), "Z$bSa");

    let rule = expansion.fired_rule.as_ref().unwrap();
    assert_eq!(rule.to_string(), "(SawA, λ, S) -> (SawA, aSb)");
    assert_eq!(rule.right_hand_side(), "aSb");

    let start = &configs[1];
    assert_eq!(start.rule_label.as_deref(), Some("P -> S$"));
    assert_eq!(start.stack.render_top_down(), "S$Z");
    assert_eq!(
        start.fired_rule.as_ref().unwrap().to_string(),
        "(Start, λ, Z) -> (Read, S$)"
    );
}

#[test]
fn grammar_expansion_accepts_and_rejects() {
    let definition = grammar();

    let trace = definition.trace("ab$");
    assert!(trace.is_accepted());
    assert_eq!(trace.len(), 10);
    assert_eq!(trace.last().unwrap().state, Expansion::Accept);

    assert!(definition.trace("aabb$").is_accepted());
    assert!(definition.trace("$").is_accepted());
    assert!(definition.run_terminated("").into_trace().is_accepted());

    assert!(!definition.trace("aab$").is_accepted());
    assert!(!definition.trace("ba$").is_accepted());
    assert!(!definition.trace("ab").is_accepted());
}

#[test]
fn lambda_moves_run_after_last_symbol() {
    let definition = grammar();
    let configs: Vec<_> = definition.run("$").collect();

    // Start, Read (S$Z), SawEnd, SawEnd (S popped), Accept
    let exhausted: Vec<String> = configs
        .iter()
        .filter(|c| c.input_exhausted())
        .map(|c| c.stack.render_top_down())
        .collect();
    assert_eq!(exhausted, vec!["S$Z", "$Z", "Z"]);
}

#[test]
fn retained_snapshots_never_change() {
    let definition = balanced();
    let mut run = definition.run("aabb$");

    let first = run.next().unwrap();
    let second = run.next().unwrap();
    let kept_first = first.clone();
    let kept_second = second.clone();

    let rest: Vec<_> = run.collect();
    assert_eq!(rest.len(), 4);
    assert_eq!(first, kept_first);
    assert_eq!(second, kept_second);
    assert_eq!(second.stack.render_top_down(), "AZ");
}

#[test]
fn runs_over_one_definition_are_independent() {
    let definition = balanced();
    let mut left = definition.run("aabb$");
    let mut right = definition.run("ab");

    left.next();
    right.next();
    let l = left.next().unwrap();
    let r = right.next().unwrap();
    assert_eq!(l.remaining_input, "abb$");
    assert_eq!(r.remaining_input, "b");
    assert_eq!(l.stack, r.stack);

    assert!(left.into_trace().is_accepted());
    assert!(!right.into_trace().is_accepted());
}

#[test]
fn definition_loads_from_json_document() {
    let json = r#"{
        "states": ["p", "q", "f"],
        "input_alphabet": ["a", "b", "$"],
        "stack_alphabet": ["A", "Z"],
        "bottom_marker": "Z",
        "initial_state": "p",
        "accepting_states": ["f"],
        "acceptance": "final_state_and_empty_stack",
        "end_marker": "$",
        "rules": [
            { "from": "p", "trigger": { "input": "a" }, "stack_top": { "top": "Z" }, "to": "p", "actions": ["A"] },
            { "from": "p", "trigger": { "input": "a" }, "stack_top": { "top": "A" }, "to": "p", "actions": ["A"] },
            { "from": "p", "trigger": { "input": "b" }, "stack_top": { "top": "A" }, "to": "q", "actions": ["pop"] },
            { "from": "q", "trigger": { "input": "b" }, "stack_top": { "top": "A" }, "to": "q", "actions": ["pop"] },
            { "from": "q", "trigger": { "input": "$" }, "stack_top": { "top": "Z" }, "to": "f", "actions": [], "label": "accept" }
        ]
    }"#;

    let loaded = Definition::<StateId>::from_json(json).unwrap();
    let built = balanced();

    for input in ["aabb$", "ab", "", "ba$", "aaabbb$"] {
        let from_json: Vec<_> = loaded.run(input).collect();
        let from_builder: Vec<_> = built.run(input).collect();
        assert_eq!(from_json.len(), from_builder.len(), "input {input:?}");
        assert_eq!(
            from_json.last().map(|c| &c.terminal_error),
            from_builder.last().map(|c| &c.terminal_error),
            "input {input:?}"
        );
    }

    let last = loaded.trace("ab$").last().cloned().unwrap();
    assert_eq!(last.rule_label.as_deref(), Some("accept"));
}

#[test]
fn report_captures_rendered_trace() {
    let definition = balanced();
    let report = RunReport::capture(&definition, "ab$");
    let rendered = report.trace.render();

    assert_eq!(
        rendered,
        [
            "Step 0: State: p, Stack: Z, Remaining Input: ab$",
            "Step 1: State: p, Stack: AZ, Remaining Input: b$, Rule: (p, a, Z) -> (p, A)",
            "Step 2: State: q, Stack: Z, Remaining Input: $, Rule: (p, b, A) -> (q, λ)",
            "Step 3: State: f, Stack: Z, Remaining Input: , Rule: (q, $, Z) -> (f, λ)",
            "Accepted",
        ]
        .join("\n")
    );

    let restored = RunReport::<StateId>::from_json(&report.to_json().unwrap()).unwrap();
    assert_eq!(restored.trace, report.trace);
}
