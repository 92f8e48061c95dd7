//! Snapshot attribute context
//!
//! The surrounding pipeline pre-fetches the attributes named by
//! `Condition::get_keys` and hands the engine this immutable snapshot.
//! Lookups resolve in memory; the engine never writes to it.

use std::collections::HashMap;

use verdict_core::{AttributeGetter, CoreError, EvalContext, Value};

/// Map-backed attribute snapshot for one request
#[derive(Debug, Clone, Default)]
pub struct AttributeContext {
    attrs: HashMap<String, Value>,
}

impl AttributeContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context from pre-resolved attributes
    pub fn from_attrs(attrs: HashMap<String, Value>) -> Self {
        Self { attrs }
    }

    /// Builder method to add one attribute
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Add or replace one attribute
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attrs.insert(key.into(), value.into());
    }
}

impl AttributeGetter for AttributeContext {
    fn get_attr(&self, key: &str) -> Result<Value, CoreError> {
        self.attrs
            .get(key)
            .cloned()
            .ok_or_else(|| CoreError::AttributeNotFound(key.to_string()))
    }
}

impl EvalContext for AttributeContext {
    /// `"bk_cmdb.host"` is present when some key reads `"bk_cmdb.host.<attr>"`
    fn has_resource(&self, resource_type: &str) -> bool {
        self.attrs
            .keys()
            .any(|k| k.strip_prefix(resource_type).is_some_and(|rest| rest.starts_with('.')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_attr() {
        let ctx = AttributeContext::new().with_attr("bk_cmdb.host.system", "linux");
        assert_eq!(
            ctx.get_attr("bk_cmdb.host.system").unwrap(),
            Value::String("linux".to_string())
        );
        assert!(matches!(
            ctx.get_attr("bk_cmdb.host.os"),
            Err(CoreError::AttributeNotFound(_))
        ));
    }

    #[test]
    fn test_has_resource() {
        let ctx = AttributeContext::new().with_attr("bk_cmdb.host.system", "linux");
        assert!(ctx.has_resource("bk_cmdb.host"));
        assert!(!ctx.has_resource("bk_cmdb.set"));
        // the full key is not itself a resource type
        assert!(!ctx.has_resource("bk_cmdb.host.system"));
    }
}
