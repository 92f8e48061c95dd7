//! Partial evaluation against an incomplete attribute context
//!
//! The authorization pipeline sometimes holds attributes for only part of
//! a request's resource types (e.g. when pre-filtering policies before
//! the remaining resources are fetched). `partial_eval` settles every
//! leaf whose resource type is present and returns what is left:
//!
//! - `None`: the expression is definitively false.
//! - `Some(Condition::Any)`: definitively true.
//! - `Some(cond)`: true so far, `cond` must still hold once the absent
//!   resource types are available.
//!
//! Leaf keys are scoped as `"{system}.{type}.{attr}"`; the resource type
//! is everything up to the last `.`. A leaf with an unscoped key denies
//! the whole expression.

use verdict_core::EvalContext;

use super::Condition;

impl Condition {
    /// Reduce the tree against the resource types present in `ctx`
    pub fn partial_eval<C: EvalContext + ?Sized>(&self, ctx: &C) -> Option<Condition> {
        match self {
            Condition::Any => Some(Condition::Any),
            Condition::And { content } => partial_and(content, ctx),
            Condition::Or { content } => partial_or(content, ctx),
            leaf => partial_leaf(leaf, ctx),
        }
    }
}

/// Resource type of a scoped leaf key, i.e. the part before the last `.`
fn resource_type(key: &str) -> Option<&str> {
    key.rfind('.').map(|idx| &key[..idx])
}

fn partial_leaf<C: EvalContext + ?Sized>(leaf: &Condition, ctx: &C) -> Option<Condition> {
    let key = leaf.key()?;
    let rtype = resource_type(key)?;

    if ctx.has_resource(rtype) {
        if leaf.eval(ctx) {
            Some(Condition::Any)
        } else {
            None
        }
    } else {
        Some(leaf.clone())
    }
}

fn partial_and<C: EvalContext + ?Sized>(content: &[Condition], ctx: &C) -> Option<Condition> {
    let mut remain = Vec::with_capacity(content.len());

    for child in content {
        match child {
            Condition::And { .. } | Condition::Or { .. } => {
                // a false composite child denies the whole AND
                let reduced = child.partial_eval(ctx)?;
                if reduced != Condition::Any {
                    remain.push(reduced);
                }
            }
            Condition::Any => {}
            leaf => {
                let key = leaf.key()?;
                let rtype = resource_type(key)?;
                if ctx.has_resource(rtype) {
                    if !leaf.eval(ctx) {
                        return None;
                    }
                } else {
                    remain.push(leaf.clone());
                }
            }
        }
    }

    match remain.len() {
        0 => Some(Condition::Any),
        1 => remain.pop(),
        _ => Some(Condition::And { content: remain }),
    }
}

fn partial_or<C: EvalContext + ?Sized>(content: &[Condition], ctx: &C) -> Option<Condition> {
    let mut remain = Vec::with_capacity(content.len());

    for child in content {
        match child {
            Condition::And { .. } | Condition::Or { .. } => {
                // a false composite child is simply dropped from an OR
                if let Some(reduced) = child.partial_eval(ctx) {
                    if reduced == Condition::Any {
                        return Some(Condition::Any);
                    }
                    remain.push(reduced);
                }
            }
            Condition::Any => return Some(Condition::Any),
            leaf => {
                let key = leaf.key()?;
                let rtype = resource_type(key)?;
                if ctx.has_resource(rtype) {
                    if leaf.eval(ctx) {
                        return Some(Condition::Any);
                    }
                    // present but false: drop it
                } else {
                    remain.push(leaf.clone());
                }
            }
        }
    }

    match remain.len() {
        0 => None,
        1 => remain.pop(),
        _ => Some(Condition::Or { content: remain }),
    }
}
