//! Expression parser
//!
//! Walks the generic nested value retrieved from policy storage and
//! produces the root [`Condition`] through the operator registry. The
//! expression is attacker-adjacent data, so the walk is strict: unknown
//! operators, missing fields, non-scalar literals, empty composites and
//! over-deep nesting are all typed errors. A policy that fails to parse
//! is unusable and the caller denies.

use verdict_core::Value;

use crate::condition::Condition;
use crate::error::{ParseError, Result};
use crate::registry::{ConditionRegistry, Factory};

/// Maximum nesting of expression nodes accepted by the parser
///
/// The evaluator itself is recursion-limit free; this bound at the trust
/// boundary keeps hand-crafted expressions from exhausting the stack.
pub const MAX_EXPRESSION_DEPTH: usize = 64;

/// Reserved key of composite operators
const CONTENT_KEY: &str = "content";

/// Recursive-descent parser from generic values to condition trees
///
/// Holds the operator registry; build one at process start and reuse it
/// for every expression retrieval.
pub struct ExpressionParser {
    registry: ConditionRegistry,
}

impl ExpressionParser {
    pub fn new() -> Self {
        Self {
            registry: ConditionRegistry::new(),
        }
    }

    /// Parse a decoded expression value into a condition tree
    pub fn parse(&self, expr: &Value) -> Result<Condition> {
        self.parse_node(expr, 0)
    }

    /// Decode a raw JSON expression and parse it
    ///
    /// serde_json applies its own recursion limit (128 levels) during
    /// decoding, and each expression node costs two of them, so a tree
    /// deep enough to hit [`MAX_EXPRESSION_DEPTH`] is rejected here as a
    /// `ParseError::Json` before the walk even starts. Either way the
    /// expression is refused at the trust boundary.
    pub fn parse_json(&self, raw: &str) -> Result<Condition> {
        let expr: Value = serde_json::from_str(raw)?;
        self.parse(&expr)
    }

    fn parse_node(&self, expr: &Value, depth: usize) -> Result<Condition> {
        if depth >= MAX_EXPRESSION_DEPTH {
            return Err(ParseError::DepthExceeded {
                limit: MAX_EXPRESSION_DEPTH,
            });
        }

        let node = expr.as_object().ok_or_else(|| ParseError::MalformedNode {
            reason: format!("expression node must be an object, got {}", expr.kind()),
        })?;

        let op = node
            .get("operator")
            .and_then(Value::as_str)
            .ok_or_else(|| ParseError::MalformedNode {
                reason: "expression node requires a string `operator` field".to_string(),
            })?;

        let factory = self
            .registry
            .get(op)
            .ok_or_else(|| ParseError::UnknownOperator {
                name: op.to_string(),
            })?;

        match factory {
            Factory::Nullary(ctor) => Ok(ctor()),
            Factory::Composite(ctor) => {
                if let Some(key) = node.get("key").and_then(Value::as_str) {
                    return Err(ParseError::InvalidKeyForComposite {
                        operator: op.to_string(),
                        key: key.to_string(),
                    });
                }

                let children = node
                    .get(CONTENT_KEY)
                    .and_then(Value::as_array)
                    .ok_or_else(|| ParseError::MalformedNode {
                        reason: format!("{op} node requires a `{CONTENT_KEY}` sequence"),
                    })?;

                let mut content = Vec::with_capacity(children.len());
                for child in children {
                    let parsed =
                        self.parse_node(child, depth + 1)
                            .map_err(|source| ParseError::Composite {
                                operator: op.to_string(),
                                source: Box::new(source),
                            })?;
                    content.push(parsed);
                }

                ctor(content)
            }
            Factory::Leaf(ctor) => {
                let key = node
                    .get("key")
                    .and_then(Value::as_str)
                    .ok_or_else(|| ParseError::MalformedNode {
                        reason: format!("{op} node requires a string `key` field"),
                    })?;

                let values = node
                    .get("values")
                    .and_then(Value::as_array)
                    .ok_or_else(|| ParseError::MalformedNode {
                        reason: format!("{op} node requires a `values` sequence"),
                    })?;

                ctor(key.to_string(), values.to_vec())
            }
        }
    }
}

impl Default for ExpressionParser {
    fn default() -> Self {
        Self::new()
    }
}
