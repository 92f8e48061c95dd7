//! Unit tests for expression parsing
//!
//! Construction is the strict regime: these tests pin down the typed
//! error surface and the round-trip guarantees of well-formed input.

use serde_json::json;
use verdict_core::Value;
use verdict_engine::{AttributeContext, ExpressionParser, ParseError};

fn decode(expr: serde_json::Value) -> Value {
    serde_json::from_value(expr).expect("fixture must decode")
}

#[test]
fn test_parse_leaf() {
    let parser = ExpressionParser::new();
    let cond = parser
        .parse(&decode(json!({
            "operator": "StringEquals",
            "key": "bk_cmdb.host.system",
            "values": ["linux"],
        })))
        .unwrap();

    assert_eq!(cond.name(), "StringEquals");
    assert_eq!(cond.get_keys(), vec!["bk_cmdb.host.system"]);
}

#[test]
fn test_parse_any_without_key_or_values() {
    let parser = ExpressionParser::new();
    let cond = parser.parse(&decode(json!({"operator": "Any"}))).unwrap();
    assert_eq!(cond.name(), "Any");
    assert!(cond.get_keys().is_empty());
    assert!(cond.eval(&AttributeContext::new()));
}

#[test]
fn test_unknown_operator_at_depth_fails_whole_parse() {
    let parser = ExpressionParser::new();
    let err = parser
        .parse(&decode(json!({
            "operator": "AND",
            "content": [
                {"operator": "Any"},
                {"operator": "OR", "content": [
                    {"operator": "StringSuffix", "key": "k", "values": ["v"]},
                ]},
            ],
        })))
        .unwrap_err();

    // wrapped with each parent operator, still naming the offender
    let msg = err.to_string();
    assert!(msg.contains("AND condition parse error"), "{msg}");
    assert!(msg.contains("OR condition parse error"), "{msg}");
    assert!(msg.contains("StringSuffix"), "{msg}");
}

#[test]
fn test_empty_composite_is_parse_error() {
    let parser = ExpressionParser::new();
    for op in ["AND", "OR"] {
        let err = parser
            .parse(&decode(json!({"operator": op, "content": []})))
            .unwrap_err();
        assert!(
            matches!(err, ParseError::MalformedNode { .. }),
            "{op}: {err}"
        );
    }
}

#[test]
fn test_composite_with_leaf_key_is_rejected() {
    let parser = ExpressionParser::new();
    let err = parser
        .parse(&decode(json!({
            "operator": "AND",
            "key": "region",
            "values": ["us"],
        })))
        .unwrap_err();

    match err {
        ParseError::InvalidKeyForComposite { operator, key } => {
            assert_eq!(operator, "AND");
            assert_eq!(key, "region");
        }
        other => panic!("expected InvalidKeyForComposite, got {other}"),
    }
}

#[test]
fn test_missing_fields_are_malformed() {
    let parser = ExpressionParser::new();

    let missing_operator = parser.parse(&decode(json!({"key": "k", "values": []})));
    assert!(matches!(
        missing_operator,
        Err(ParseError::MalformedNode { .. })
    ));

    let missing_key = parser.parse(&decode(json!({
        "operator": "StringEquals",
        "values": ["a"],
    })));
    assert!(matches!(missing_key, Err(ParseError::MalformedNode { .. })));

    let missing_values = parser.parse(&decode(json!({
        "operator": "StringEquals",
        "key": "k",
    })));
    assert!(matches!(
        missing_values,
        Err(ParseError::MalformedNode { .. })
    ));

    let missing_content = parser.parse(&decode(json!({"operator": "AND"})));
    assert!(matches!(
        missing_content,
        Err(ParseError::MalformedNode { .. })
    ));
}

#[test]
fn test_non_scalar_literal_rejected() {
    let parser = ExpressionParser::new();
    let err = parser
        .parse(&decode(json!({
            "operator": "StringEquals",
            "key": "k",
            "values": [["nested"]],
        })))
        .unwrap_err();
    assert!(matches!(err, ParseError::MalformedNode { .. }));
}

#[test]
fn test_wrong_literal_family_rejected() {
    let parser = ExpressionParser::new();

    let err = parser
        .parse(&decode(json!({
            "operator": "NumericEquals",
            "key": "level",
            "values": ["3"],
        })))
        .unwrap_err();
    assert!(err.to_string().contains("must be a number"));

    let err = parser
        .parse(&decode(json!({
            "operator": "Bool",
            "key": "is_enabled",
            "values": [1],
        })))
        .unwrap_err();
    assert!(err.to_string().contains("must be a bool"));
}

#[test]
fn test_get_keys_round_trip() {
    let parser = ExpressionParser::new();
    let cond = parser
        .parse(&decode(json!({
            "operator": "AND",
            "content": [
                {"operator": "StringEquals", "key": "region", "values": ["us"]},
                {"operator": "Any"},
                {"operator": "OR", "content": [
                    {"operator": "NumericEquals", "key": "level", "values": [1]},
                    {"operator": "StringEquals", "key": "region", "values": ["eu"]},
                ]},
            ],
        })))
        .unwrap();

    // exactly the leaf keys, composite order preserved, duplicates kept
    assert_eq!(cond.get_keys(), vec!["region", "level", "region"]);
}

#[test]
fn test_parse_json_entry_point() {
    let parser = ExpressionParser::new();
    let cond = parser
        .parse_json(r#"{"operator": "StringPrefix", "key": "iam_path", "values": ["/biz,1/"]}"#)
        .unwrap();
    assert!(cond.eval(&AttributeContext::new().with_attr("iam_path", "/biz,1/set,2/")));
}
