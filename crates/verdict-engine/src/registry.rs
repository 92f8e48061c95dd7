//! Operator registry
//!
//! Maps an operator-name string to the constructor that builds the typed
//! condition for it. The map is plain data over fn pointers, built once
//! when the parser is created and immutable afterwards; registering an
//! operator means one entry here plus one `Condition` variant.

use std::collections::HashMap;

use verdict_core::Value;

use crate::condition::{Condition, NumericOp};
use crate::error::{ParseError, Result};
use crate::operator;

/// Constructor kind for one operator
pub(crate) enum Factory {
    /// Builds from the leaf `(key, values)` pair
    Leaf(fn(String, Vec<Value>) -> Result<Condition>),
    /// Builds from already-parsed children (reserved key `content`)
    Composite(fn(Vec<Condition>) -> Result<Condition>),
    /// Takes nothing from the node at all
    Nullary(fn() -> Condition),
}

/// Registry of condition constructors, keyed by operator name
pub struct ConditionRegistry {
    factories: HashMap<&'static str, Factory>,
}

impl ConditionRegistry {
    pub fn new() -> Self {
        let mut factories = HashMap::new();
        factories.insert(operator::AND, Factory::Composite(new_and));
        factories.insert(operator::OR, Factory::Composite(new_or));
        factories.insert(operator::ANY, Factory::Nullary(new_any));
        factories.insert(operator::STRING_EQUALS, Factory::Leaf(new_string_equals));
        factories.insert(operator::STRING_PREFIX, Factory::Leaf(new_string_prefix));
        factories.insert(operator::STRING_CONTAINS, Factory::Leaf(new_string_contains));
        factories.insert(operator::NUMERIC_EQUALS, Factory::Leaf(new_numeric_equals));
        factories.insert(operator::NUMERIC_GT, Factory::Leaf(new_numeric_gt));
        factories.insert(operator::NUMERIC_GTE, Factory::Leaf(new_numeric_gte));
        factories.insert(operator::NUMERIC_LT, Factory::Leaf(new_numeric_lt));
        factories.insert(operator::NUMERIC_LTE, Factory::Leaf(new_numeric_lte));
        factories.insert(operator::BOOL, Factory::Leaf(new_bool));
        Self { factories }
    }

    pub(crate) fn get(&self, operator: &str) -> Option<&Factory> {
        self.factories.get(operator)
    }

    /// Whether the operator name is registered
    pub fn contains(&self, operator: &str) -> bool {
        self.factories.contains_key(operator)
    }
}

impl Default for ConditionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ================== constructors ==================

fn new_and(content: Vec<Condition>) -> Result<Condition> {
    if content.is_empty() {
        return Err(empty_content(operator::AND));
    }
    Ok(Condition::And { content })
}

fn new_or(content: Vec<Condition>) -> Result<Condition> {
    if content.is_empty() {
        return Err(empty_content(operator::OR));
    }
    Ok(Condition::Or { content })
}

fn new_any() -> Condition {
    Condition::Any
}

fn new_string_equals(key: String, values: Vec<Value>) -> Result<Condition> {
    let values = string_literals(operator::STRING_EQUALS, &values)?;
    Ok(Condition::StringEquals { key, values })
}

fn new_string_prefix(key: String, values: Vec<Value>) -> Result<Condition> {
    let values = string_literals(operator::STRING_PREFIX, &values)?;
    Ok(Condition::StringPrefix { key, values })
}

fn new_string_contains(key: String, values: Vec<Value>) -> Result<Condition> {
    let values = string_literals(operator::STRING_CONTAINS, &values)?;
    Ok(Condition::StringContains { key, values })
}

fn new_numeric_equals(key: String, values: Vec<Value>) -> Result<Condition> {
    let values = number_literals(operator::NUMERIC_EQUALS, &values)?;
    Ok(Condition::NumericEquals { key, values })
}

fn new_numeric_gt(key: String, values: Vec<Value>) -> Result<Condition> {
    new_numeric_compare(NumericOp::Gt, key, values)
}

fn new_numeric_gte(key: String, values: Vec<Value>) -> Result<Condition> {
    new_numeric_compare(NumericOp::Gte, key, values)
}

fn new_numeric_lt(key: String, values: Vec<Value>) -> Result<Condition> {
    new_numeric_compare(NumericOp::Lt, key, values)
}

fn new_numeric_lte(key: String, values: Vec<Value>) -> Result<Condition> {
    new_numeric_compare(NumericOp::Lte, key, values)
}

fn new_numeric_compare(op: NumericOp, key: String, values: Vec<Value>) -> Result<Condition> {
    // arity is deliberately left to evaluation, which returns false for != 1
    let values = number_literals(op.name(), &values)?;
    Ok(Condition::NumericCompare { key, op, values })
}

fn new_bool(key: String, values: Vec<Value>) -> Result<Condition> {
    // arity is deliberately left to evaluation, which returns false for != 1
    let values = bool_literals(operator::BOOL, &values)?;
    Ok(Condition::Bool { key, values })
}

// ================== literal extraction ==================
//
// Every leaf constructor funnels through extract(), so the literal-family
// checks the evaluator relies on live in one place.

fn string_literals(op: &'static str, values: &[Value]) -> Result<Vec<String>> {
    extract(op, "string", values, |v| v.as_str().map(str::to_string))
}

fn number_literals(op: &'static str, values: &[Value]) -> Result<Vec<f64>> {
    extract(op, "number", values, Value::as_f64)
}

fn bool_literals(op: &'static str, values: &[Value]) -> Result<Vec<bool>> {
    extract(op, "bool", values, Value::as_bool)
}

fn extract<T>(
    op: &'static str,
    expected: &'static str,
    values: &[Value],
    f: impl Fn(&Value) -> Option<T>,
) -> Result<Vec<T>> {
    if values.is_empty() {
        return Err(ParseError::MalformedNode {
            reason: format!("{op} requires at least one literal"),
        });
    }

    values
        .iter()
        .map(|v| {
            f(v).ok_or_else(|| ParseError::MalformedNode {
                reason: format!("{op} literal must be a {expected}, got {}", v.kind()),
            })
        })
        .collect()
}

fn empty_content(op: &'static str) -> ParseError {
    ParseError::MalformedNode {
        reason: format!("{op} content must not be empty"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_knows_all_operators() {
        let registry = ConditionRegistry::new();
        for op in [
            "AND",
            "OR",
            "Any",
            "StringEquals",
            "StringPrefix",
            "StringContains",
            "NumericEquals",
            "NumericGt",
            "NumericGte",
            "NumericLt",
            "NumericLte",
            "Bool",
        ] {
            assert!(registry.contains(op), "missing operator {op}");
        }
        assert!(!registry.contains("StringSuffix"));
    }

    #[test]
    fn test_empty_composite_rejected() {
        assert!(matches!(
            new_and(vec![]),
            Err(ParseError::MalformedNode { .. })
        ));
        assert!(matches!(
            new_or(vec![]),
            Err(ParseError::MalformedNode { .. })
        ));
    }

    #[test]
    fn test_literal_family_checked() {
        let err = new_string_equals(
            "region".to_string(),
            vec![Value::String("us".to_string()), Value::Number(3.0)],
        )
        .unwrap_err();
        assert!(err.to_string().contains("must be a string"));

        let err = new_numeric_equals("level".to_string(), vec![Value::String("3".to_string())])
            .unwrap_err();
        assert!(err.to_string().contains("must be a number"));
    }

    #[test]
    fn test_empty_values_rejected() {
        assert!(new_string_equals("region".to_string(), vec![]).is_err());
    }

    #[test]
    fn test_bool_arity_lenient_at_parse() {
        // two bool literals parse fine; eval returns false for them
        let cond =
            new_bool("is_enabled".to_string(), vec![Value::Bool(true), Value::Bool(false)])
                .unwrap();
        assert_eq!(
            cond,
            Condition::Bool {
                key: "is_enabled".to_string(),
                values: vec![true, false],
            }
        );
    }
}
