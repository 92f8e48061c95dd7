//! Attribute lookup capabilities consumed by the condition engine
//!
//! The authorization pipeline resolves subject/resource/environment
//! attributes ahead of evaluation (driven by `Condition::get_keys`) and
//! hands the engine a getter over that snapshot. The engine never mutates
//! the getter and never initiates I/O through it; implementations are
//! expected to resolve in memory.

use crate::error::CoreError;
use crate::types::Value;

/// Per-request attribute lookup
///
/// Keys are dotted path strings, e.g. `"bk_cmdb.host.system"`. A missing
/// key is reported as `CoreError::AttributeNotFound`; evaluation treats
/// any lookup failure as a non-match, never as a fatal error.
pub trait AttributeGetter {
    fn get_attr(&self, key: &str) -> Result<Value, CoreError>;
}

/// Attribute lookup plus resource-presence queries, used by partial
/// evaluation to decide which leaves can be settled now and which must be
/// kept as a remainder.
pub trait EvalContext: AttributeGetter {
    /// Whether attributes of the given resource type (the `"system.type"`
    /// prefix of scoped keys) are present in this context
    fn has_resource(&self, resource_type: &str) -> bool;
}
