//! Operation error types.

use opkit_api::SynthesisError;
use opkit_attribute::AttributeError;
use thiserror::Error;

/// Result type for operation and registry calls.
pub type OperationResult<T> = Result<T, OperationError>;

/// Errors that can occur while building operations or using the registry.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("Unknown operation: {namespace}.{type_name}")]
    UnknownOperation { namespace: String, type_name: String },

    #[error("Operation {namespace}.{type_name} was registered without a factory")]
    NotConstructible { namespace: String, type_name: String },

    #[error("synthesis error: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("attribute error: {0}")]
    Attribute(#[from] AttributeError),
}

impl OperationError {
    pub fn unknown_operation(namespace: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnknownOperation {
            namespace: namespace.into(),
            type_name: type_name.into(),
        }
    }

    pub fn not_constructible(namespace: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::NotConstructible {
            namespace: namespace.into(),
            type_name: type_name.into(),
        }
    }
}
