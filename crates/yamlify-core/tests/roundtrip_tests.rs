//! Round-trip tests: emitted YAML, parsed back through serde_yaml (via the
//! reverse direction), reconstructs a structurally equal value.
//!
//! Strings containing parseable non-string JSON are intentionally excluded:
//! those expand into the parsed value and do not round-trip (see DESIGN.md).

use serde_json::Value;
use yamlify_core::{emit, yaml_to_json};

/// Emit `json`, parse the YAML back, and compare both sides structurally.
fn round_trip(json: &str) {
    let yaml = emit(json).unwrap();
    let back = yaml_to_json(&yaml).unwrap();
    let original: Value = serde_json::from_str(json).unwrap();
    let reparsed: Value = serde_json::from_str(&back).unwrap();
    assert_eq!(
        original, reparsed,
        "round-trip mismatch\n  json: {}\n  yaml:\n{}\n  back: {}",
        json, yaml, back
    );
}

#[test]
fn scalars() {
    round_trip("null");
    round_trip("true");
    round_trip("false");
    round_trip("42");
    round_trip("-7");
    round_trip("3.14");
    round_trip("-0.25");
}

#[test]
fn strings() {
    round_trip(r#""hello""#);
    round_trip(r#""New York""#);
    round_trip(r#""""#);
    round_trip(r#""yes""#);
    round_trip(r#""café""#);
    round_trip(r#""-flag""#);
    round_trip(r#""@handle""#);
    round_trip(r#""1.2.3""#);
    round_trip(r#"" leading space""#);
}

#[test]
fn strings_with_newlines() {
    round_trip(r#"{"text":"line1\nline2"}"#);
    // clip and keep blocks need a following node to anchor their trailing
    // line break: the emitted document itself carries no final newline
    round_trip(r#"{"text":"line1\nline2\n","after":1}"#);
    round_trip(r#"{"text":"a\n\nb\nc\n","after":2}"#);
}

#[test]
fn keep_chomping_round_trips_inside_a_document() {
    round_trip(r#"{"text":"a\nb\n\n","after":1}"#);
}

#[test]
fn colon_space_string() {
    round_trip(r#"{"cmd":"key: value"}"#);
}

#[test]
fn containers() {
    round_trip("[]");
    round_trip("{}");
    round_trip("[1,2,3]");
    round_trip(r#"{"a":[],"b":{}}"#);
    round_trip(r#"{"z":1,"a":2,"m":3}"#);
    round_trip(r#"[[1,2],[3],[]]"#);
}

#[test]
fn nested_combinations() {
    round_trip(
        r#"{"name":"svc","replicas":3,"env":{"RUST_LOG":"info","verbose":"no"},
            "ports":[8080,8443],"meta":{"labels":[{"k":"team","v":"infra"}]}}"#,
    );
}

#[test]
fn end_to_end_scenario() {
    round_trip(r#"{"name":"John","age":30,"city":"New York"}"#);
}

#[test]
fn multiline_strings_nested_in_containers() {
    round_trip(r#"[{"note":"a\nb"},{"note":"c\nd\n","done":true}]"#);
    round_trip(r#"{"outer":{"text":"x\ny\n"},"tail":0}"#);
}

#[test]
fn quoted_keys_round_trip() {
    round_trip(r#"{"123":1,"":2,"true":3,"my key":4}"#);
}

#[test]
fn embedded_json_expansion_is_documented_lossy() {
    // "123" expands to the number 123: the round-trip yields the parsed
    // value, not the original string
    let yaml = emit(r#"{"n":"123"}"#).unwrap();
    let back = yaml_to_json(&yaml).unwrap();
    let reparsed: Value = serde_json::from_str(&back).unwrap();
    assert_eq!(reparsed, serde_json::json!({"n": 123}));
}
