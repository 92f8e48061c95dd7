//! Shared comparison helpers for leaf conditions
//!
//! Type-mismatch handling is centralized here: every leaf variant funnels
//! through [`eval_any_pair`], so a failed lookup or an attribute outside
//! the comparator's type family resolves to `false` in exactly one place.

use verdict_core::{AttributeGetter, Value};

use super::NumericOp;

/// Attribute keys ending in this suffix hold hierarchical resource paths
/// and enable the wildcard rewrite in `StringPrefix` literals.
pub const PATH_ATTR_SUFFIX: &str = "iam_path";

/// Trailing marker in a path literal meaning "any child at this level",
/// e.g. `/biz,1/set,*/` matches any `/biz,1/set,<anything>/`.
pub const PATH_WILDCARD_TAIL: &str = "*/";

/// Open-ended form of the marker: a literal ending in `/*` matches any
/// descendant of the branch, e.g. `/biz,1/*` matches `/biz,1/set,5/`.
pub const PATH_WILDCARD_OPEN_TAIL: &str = "/*";

/// OR-across-OR pairing rule
///
/// True iff some pairing of an attribute value (each element of a
/// multi-valued attribute counts) with a literal satisfies `cmp`. A
/// failed attribute lookup is a non-match, logged at debug level.
pub(crate) fn eval_any_pair<C, T, F>(ctx: &C, key: &str, literals: &[T], cmp: F) -> bool
where
    C: AttributeGetter + ?Sized,
    F: Fn(&Value, &T) -> bool,
{
    let attr = match ctx.get_attr(key) {
        Ok(v) => v,
        Err(err) => {
            tracing::debug!(key, %err, "attribute lookup failed, condition is false");
            return false;
        }
    };

    match &attr {
        Value::Array(items) => items.iter().any(|a| literals.iter().any(|b| cmp(a, b))),
        single => literals.iter().any(|b| cmp(single, b)),
    }
}

/// Strip the wildcard tail from a `StringPrefix` literal when the key is
/// a hierarchical path attribute; all other keys match literally.
///
/// `/biz,1/set,*/` becomes `/biz,1/set,` and `/biz,1/*` becomes
/// `/biz,1/` (the separator before a lone `*` is kept).
pub(crate) fn prefix_literal<'a>(key: &str, literal: &'a str) -> &'a str {
    if !key.ends_with(PATH_ATTR_SUFFIX) {
        return literal;
    }
    if literal.ends_with(PATH_WILDCARD_TAIL) {
        return &literal[..literal.len() - PATH_WILDCARD_TAIL.len()];
    }
    if literal.ends_with(PATH_WILDCARD_OPEN_TAIL) {
        return &literal[..literal.len() - 1];
    }
    literal
}

/// Ordered numeric comparison; the literal arity is fixed at one, any
/// other arity is a non-match.
pub(crate) fn eval_numeric_compare<C>(ctx: &C, key: &str, op: NumericOp, values: &[f64]) -> bool
where
    C: AttributeGetter + ?Sized,
{
    if values.len() != 1 {
        return false;
    }
    eval_any_pair(ctx, key, values, |a, b| {
        a.as_f64().is_some_and(|a| op.compare(a, *b))
    })
}

/// Bool never applies the OR rule: a multi-valued attribute never
/// matches, and neither does a literal arity other than one.
pub(crate) fn eval_bool<C>(ctx: &C, key: &str, values: &[bool]) -> bool
where
    C: AttributeGetter + ?Sized,
{
    let attr = match ctx.get_attr(key) {
        Ok(v) => v,
        Err(err) => {
            tracing::debug!(key, %err, "attribute lookup failed, condition is false");
            return false;
        }
    };

    if values.len() != 1 {
        return false;
    }

    match attr {
        Value::Bool(b) => b == values[0],
        _ => false,
    }
}
