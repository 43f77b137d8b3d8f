//! Tests for the template variable engine.

use crate::template::{BindingState, TemplateBinding, build, derive_variables, scan};

#[test]
fn test_derivation_is_idempotent() {
    let body = "{b} {a} {c} {a} {human input} {}";
    let first = build(scan(body));
    let second = build(scan(body));
    assert_eq!(first, second);
    assert_eq!(first, vec!["b", "a", "c"]);
}

#[test]
fn test_order_preservation() {
    let binding = TemplateBinding::new("{b} and {a} and {b}");
    assert_eq!(binding.variables(), ["b", "a"]);
}

#[test]
fn test_deduplication_bounded_by_distinct_names() {
    let body = "{x}".repeat(50) + &"{y}".repeat(50);
    let vars = derive_variables(&body);
    assert_eq!(vars, vec!["x", "y"]);
}

#[test]
fn test_invalid_name_with_space_is_rejected() {
    let binding = TemplateBinding::new("{human input}");
    assert!(!binding.variables().iter().any(|v| v == "human input"));
    assert!(binding.variables().is_empty());
}

#[test]
fn test_empty_body_yields_no_variables() {
    let binding = TemplateBinding::empty();
    assert_eq!(binding.body(), "");
    assert!(binding.variables().is_empty());

    let binding = TemplateBinding::new("");
    assert!(binding.variables().is_empty());
}

#[test]
fn test_only_malformed_placeholders_yields_no_variables() {
    let binding = TemplateBinding::new("{} {human input} {unterminated {a-b}");
    assert!(binding.variables().is_empty());
}

#[test]
fn test_chat_history_is_an_ordinary_placeholder() {
    let binding = TemplateBinding::new("{chat_history}\nHuman: {human_input}");
    assert_eq!(binding.variables(), ["chat_history", "human_input"]);
}

#[test]
fn test_set_body_recomputes_synchronously() {
    let mut binding = TemplateBinding::new("Hello {name}");
    binding.set_body("Hello {first} {last}");
    assert_eq!(binding.body(), "Hello {first} {last}");
    assert_eq!(binding.variables(), ["first", "last"]);

    binding.set_body("");
    assert!(binding.variables().is_empty());
}

#[test]
fn test_transient_invalid_syntax_while_typing() {
    let mut binding = TemplateBinding::empty();
    let mut typed = String::new();
    for ch in "Hi {name}!".chars() {
        typed.push(ch);
        binding.set_body(typed.clone());
        assert_eq!(binding.variables(), derive_variables(&typed).as_slice());
    }
    assert_eq!(binding.variables(), ["name"]);
}

#[test]
fn test_submit_transitions_state_and_snapshot_is_isolated() {
    let mut binding = TemplateBinding::new("Hello {name}");
    assert_eq!(binding.state(), BindingState::Editing);

    let snapshot = binding.submit();
    assert_eq!(binding.state(), BindingState::Submitted);

    binding.set_body("Bye {other}");
    assert_eq!(binding.state(), BindingState::Editing);

    assert_eq!(snapshot.body(), "Hello {name}");
    assert_eq!(snapshot.variables(), ["name"]);
}

#[test]
fn test_snapshot_matches_body_at_submission() {
    let mut binding = TemplateBinding::new("{a}");
    binding.set_body("{a} {b} {a}");
    let (body, vars) = binding.submit().into_parts();
    assert_eq!(body, "{a} {b} {a}");
    assert_eq!(vars, vec!["a", "b"]);
}

#[test]
fn test_resubmit_after_edit_takes_new_snapshot() {
    let mut binding = TemplateBinding::new("{a}");
    let first = binding.submit();
    binding.set_body("{b}");
    let second = binding.submit();

    assert_eq!(binding.state(), BindingState::Submitted);
    assert_eq!(first.variables(), ["a"]);
    assert_eq!(second.variables(), ["b"]);
}

#[test]
fn test_from_conversions() {
    let a: TemplateBinding = "{x}".into();
    let b: TemplateBinding = String::from("{x}").into();
    assert_eq!(a, b);
}
