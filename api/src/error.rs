//! Synthesis and dispatch error types.

use opkit_attribute::{AttributeError, Capability};
use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthesisResult<T> = Result<T, SynthesisError>;

/// Errors that can occur while synthesizing or calling bound methods.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Item name {item:?} yields no method name tokens")]
    EmptyMethodName { item: String },

    #[error("Method name collision: {method} from item {existing} and item {incoming}")]
    NameCollision {
        method: String,
        existing: String,
        incoming: String,
    },

    #[error("Unknown method: {method}")]
    UnknownMethod { method: String },

    #[error("Invalid arity for {method}: expected {expected}, got {actual}")]
    Arity {
        method: String,
        expected: &'static str,
        actual: usize,
    },

    #[error("Invalid argument {position} for {method}: expected {expected}, got {actual}")]
    ArgumentType {
        method: String,
        position: usize,
        expected: &'static str,
        actual: String,
    },

    #[error("Item not found: {item}")]
    ItemNotFound { item: String },

    #[error("Item {item} no longer exposes the {capability} capability")]
    MissingCapability { item: String, capability: Capability },

    #[error("Invalid name pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("attribute error: {0}")]
    Attribute(#[from] AttributeError),
}

impl SynthesisError {
    pub fn empty_method_name(item: impl Into<String>) -> Self {
        Self::EmptyMethodName { item: item.into() }
    }

    pub fn name_collision(
        method: impl Into<String>,
        existing: impl Into<String>,
        incoming: impl Into<String>,
    ) -> Self {
        Self::NameCollision {
            method: method.into(),
            existing: existing.into(),
            incoming: incoming.into(),
        }
    }

    pub fn unknown_method(method: impl Into<String>) -> Self {
        Self::UnknownMethod {
            method: method.into(),
        }
    }

    pub fn arity(method: impl Into<String>, expected: &'static str, actual: usize) -> Self {
        Self::Arity {
            method: method.into(),
            expected,
            actual,
        }
    }

    pub fn argument_type(
        method: impl Into<String>,
        position: usize,
        expected: &'static str,
        actual: impl Into<String>,
    ) -> Self {
        Self::ArgumentType {
            method: method.into(),
            position,
            expected,
            actual: actual.into(),
        }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    pub fn item_not_found(item: impl Into<String>) -> Self {
        Self::ItemNotFound { item: item.into() }
    }

    pub fn missing_capability(item: impl Into<String>, capability: Capability) -> Self {
        Self::MissingCapability {
            item: item.into(),
            capability,
        }
    }
}
