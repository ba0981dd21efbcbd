//! Abstract syntax tree for the Arith expression language.
//!
//! This crate defines the AST nodes produced by the parser and
//! consumed by the evaluator, the visitor trait for traversing them,
//! and (behind the default-on `serde` feature) JSON serialization
//! helpers used for diagnostics.

#![warn(missing_docs)]

pub mod ast;
pub mod visit;

/// Serializes an AST node to a pretty-printed JSON string.
#[cfg(feature = "serde")]
pub fn to_json<T: serde::Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Deserializes an AST node from a JSON string.
#[cfg(feature = "serde")]
pub fn from_json<T: serde::de::DeserializeOwned>(json: &str) -> serde_json::Result<T> {
    serde_json::from_str(json)
}
