//! VERDICT Engine - condition expression engine for ABAC authorization
//!
//! Stored permission grants are boolean policy expressions over subject,
//! resource and environment attributes. This crate turns the persisted,
//! untrusted expression tree into a typed [`Condition`] and evaluates it
//! against a per-request attribute context:
//!
//! ```text
//! stored expression (generic Value) -> ExpressionParser -> Condition
//!     -> eval(AttributeGetter) -> bool
//! ```
//!
//! Construction is strict: any structural anomaly in the persisted
//! expression is a typed [`ParseError`]. Evaluation is total: a missing
//! attribute, a type mismatch or a malformed pairing is a `false` result,
//! never a panic or an error, because an authorization decision must
//! always terminate with a boolean.

pub mod condition;
pub mod context;
pub mod error;
pub mod operator;
pub mod parser;
pub mod registry;

// Re-export commonly used types
pub use condition::{
    Condition, NumericOp, PATH_ATTR_SUFFIX, PATH_WILDCARD_OPEN_TAIL, PATH_WILDCARD_TAIL,
};
pub use context::AttributeContext;
pub use error::ParseError;
pub use parser::{ExpressionParser, MAX_EXPRESSION_DEPTH};
pub use registry::ConditionRegistry;
