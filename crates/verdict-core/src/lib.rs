//! VERDICT Core - Core types and definitions for the VERDICT authorization engine
//!
//! This crate provides the fundamental types shared across the VERDICT ecosystem:
//! - The generic `Value` representation for attributes and persisted expressions
//! - The `AttributeGetter` / `EvalContext` capability traits supplied per request
//! - Error types

pub mod attr;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use attr::{AttributeGetter, EvalContext};
pub use error::CoreError;
pub use types::Value;
