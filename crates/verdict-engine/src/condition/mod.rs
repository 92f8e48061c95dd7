//! Condition tree evaluated against a per-request attribute context
//!
//! A [`Condition`] is one node of a parsed policy expression. The set of
//! variants is closed: adding an operator means adding a variant here and
//! one registry entry, with the exhaustive matches below catching every
//! call site at compile time.
//!
//! A tree is built once per expression retrieval, holds no mutable state,
//! and is shared freely across concurrent evaluations.

mod compare;
mod partial;

pub use compare::{PATH_ATTR_SUFFIX, PATH_WILDCARD_OPEN_TAIL, PATH_WILDCARD_TAIL};

use crate::operator;
use verdict_core::AttributeGetter;

/// Ordered numeric comparison kind
///
/// Unlike `NumericEquals`, the ordered comparisons take exactly one
/// literal; a different arity evaluates to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericOp {
    Gt,
    Gte,
    Lt,
    Lte,
}

impl NumericOp {
    /// Operator name as stored in persisted expressions
    pub fn name(self) -> &'static str {
        match self {
            NumericOp::Gt => operator::NUMERIC_GT,
            NumericOp::Gte => operator::NUMERIC_GTE,
            NumericOp::Lt => operator::NUMERIC_LT,
            NumericOp::Lte => operator::NUMERIC_LTE,
        }
    }

    pub(crate) fn compare(self, a: f64, b: f64) -> bool {
        match self {
            NumericOp::Gt => a > b,
            NumericOp::Gte => a >= b,
            NumericOp::Lt => a < b,
            NumericOp::Lte => a <= b,
        }
    }
}

/// One node of a policy expression tree
///
/// Literals are typed at construction time; the registry's extraction
/// helpers reject any literal outside the variant's type family, so
/// evaluation never has to re-check families it can trust.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// True iff all children are true
    And { content: Vec<Condition> },
    /// True iff at least one child is true
    Or { content: Vec<Condition> },
    /// Unconditional grant; always true, depends on no attribute
    Any,
    /// Attribute equals at least one literal
    StringEquals { key: String, values: Vec<String> },
    /// Attribute starts with at least one literal; hierarchical path keys
    /// support a trailing wildcard segment in the literal
    StringPrefix { key: String, values: Vec<String> },
    /// Attribute contains at least one literal as a substring
    StringContains { key: String, values: Vec<String> },
    /// Attribute numerically equals at least one literal
    NumericEquals { key: String, values: Vec<f64> },
    /// Attribute compares against a single literal (`>`, `>=`, `<`, `<=`)
    NumericCompare {
        key: String,
        op: NumericOp,
        values: Vec<f64>,
    },
    /// Attribute is a single boolean equal to the single literal
    Bool { key: String, values: Vec<bool> },
}

impl Condition {
    /// Operator name, for diagnostics and response translation
    pub fn name(&self) -> &'static str {
        match self {
            Condition::And { .. } => operator::AND,
            Condition::Or { .. } => operator::OR,
            Condition::Any => operator::ANY,
            Condition::StringEquals { .. } => operator::STRING_EQUALS,
            Condition::StringPrefix { .. } => operator::STRING_PREFIX,
            Condition::StringContains { .. } => operator::STRING_CONTAINS,
            Condition::NumericEquals { .. } => operator::NUMERIC_EQUALS,
            Condition::NumericCompare { op, .. } => op.name(),
            Condition::Bool { .. } => operator::BOOL,
        }
    }

    /// Evaluate against the request's attribute context
    ///
    /// Total by design: attribute misses, type mismatches and invalid
    /// literal arity all resolve to `false`. An authorization decision
    /// must always terminate with a boolean.
    pub fn eval<C: AttributeGetter + ?Sized>(&self, ctx: &C) -> bool {
        match self {
            Condition::And { content } => content.iter().all(|c| c.eval(ctx)),
            Condition::Or { content } => content.iter().any(|c| c.eval(ctx)),
            Condition::Any => true,
            Condition::StringEquals { key, values } => {
                compare::eval_any_pair(ctx, key, values, |a, b| a.as_str() == Some(b.as_str()))
            }
            Condition::StringPrefix { key, values } => {
                compare::eval_any_pair(ctx, key, values, |a, b| {
                    a.as_str()
                        .is_some_and(|s| s.starts_with(compare::prefix_literal(key, b)))
                })
            }
            Condition::StringContains { key, values } => {
                compare::eval_any_pair(ctx, key, values, |a, b| {
                    a.as_str().is_some_and(|s| s.contains(b.as_str()))
                })
            }
            Condition::NumericEquals { key, values } => {
                compare::eval_any_pair(ctx, key, values, |a, b| a.as_f64() == Some(*b))
            }
            Condition::NumericCompare { key, op, values } => {
                compare::eval_numeric_compare(ctx, key, *op, values)
            }
            Condition::Bool { key, values } => compare::eval_bool(ctx, key, values),
        }
    }

    /// All attribute keys this condition depends on
    ///
    /// The authorization pipeline calls this ahead of evaluation to fetch
    /// only the attributes actually referenced. Composite keys are the
    /// in-order concatenation of children's keys, not deduplicated; `Any`
    /// never forces a fetch.
    pub fn get_keys(&self) -> Vec<String> {
        match self {
            Condition::And { content } | Condition::Or { content } => {
                content.iter().flat_map(|c| c.get_keys()).collect()
            }
            Condition::Any => Vec::new(),
            Condition::StringEquals { key, .. }
            | Condition::StringPrefix { key, .. }
            | Condition::StringContains { key, .. }
            | Condition::NumericEquals { key, .. }
            | Condition::NumericCompare { key, .. }
            | Condition::Bool { key, .. } => vec![key.clone()],
        }
    }

    /// The single attribute key of a leaf condition, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            Condition::And { .. } | Condition::Or { .. } | Condition::Any => None,
            Condition::StringEquals { key, .. }
            | Condition::StringPrefix { key, .. }
            | Condition::StringContains { key, .. }
            | Condition::NumericEquals { key, .. }
            | Condition::NumericCompare { key, .. }
            | Condition::Bool { key, .. } => Some(key),
        }
    }
}
