//! Operator names as they appear in persisted expressions
//!
//! These are the exact strings stored in the `operator` field; the
//! registry is keyed by them and `Condition::name` reports them back for
//! diagnostics.

pub const AND: &str = "AND";
pub const OR: &str = "OR";
pub const ANY: &str = "Any";
pub const STRING_EQUALS: &str = "StringEquals";
pub const STRING_PREFIX: &str = "StringPrefix";
pub const STRING_CONTAINS: &str = "StringContains";
pub const NUMERIC_EQUALS: &str = "NumericEquals";
pub const NUMERIC_GT: &str = "NumericGt";
pub const NUMERIC_GTE: &str = "NumericGte";
pub const NUMERIC_LT: &str = "NumericLt";
pub const NUMERIC_LTE: &str = "NumericLte";
pub const BOOL: &str = "Bool";
