//! Type system for VERDICT
//!
//! This module contains the generic value representation used both for
//! resolved attribute values and for persisted policy expressions.

pub mod value;

pub use value::Value;
