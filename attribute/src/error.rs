//! Attribute error types.

use thiserror::Error;

/// Result type for attribute operations.
pub type AttributeResult<T> = Result<T, AttributeError>;

/// Errors that can occur while building or updating parameter items.
#[derive(Debug, Error)]
pub enum AttributeError {
    #[error("Duplicate item name: {name} in {container}")]
    DuplicateItemName { container: String, name: String },

    #[error("Value index {index} out of range for item {item} ({len} values)")]
    IndexOutOfRange {
        item: String,
        index: usize,
        len: usize,
    },

    #[error("Invalid value type for item {item}: expected {expected}, got {actual}")]
    TypeMismatch {
        item: String,
        expected: String,
        actual: String,
    },

    #[error("Range constraint violated: {item} value {value} is out of range{range_desc}")]
    RangeViolation {
        item: String,
        value: String,
        range_desc: String,
    },

    #[error("Discrete choice {choice} out of range for item {item} ({len} choices)")]
    DiscreteIndexOutOfRange {
        item: String,
        choice: usize,
        len: usize,
    },

    #[error("Value {value} is not one of the discrete values of item {item}")]
    NotADiscreteValue { item: String, value: String },

    #[error("Item {item} of type {item_type} cannot hold values")]
    NotValueBearing { item: String, item_type: String },

    #[error("Invalid definition JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AttributeError {
    pub fn duplicate_item_name(container: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateItemName {
            container: container.into(),
            name: name.into(),
        }
    }

    pub fn index_out_of_range(item: impl Into<String>, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            item: item.into(),
            index,
            len,
        }
    }

    pub fn type_mismatch(
        item: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            item: item.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn range_violation(
        item: impl Into<String>,
        value: impl Into<String>,
        range_desc: impl Into<String>,
    ) -> Self {
        Self::RangeViolation {
            item: item.into(),
            value: value.into(),
            range_desc: range_desc.into(),
        }
    }

    pub fn discrete_index_out_of_range(item: impl Into<String>, choice: usize, len: usize) -> Self {
        Self::DiscreteIndexOutOfRange {
            item: item.into(),
            choice,
            len,
        }
    }

    pub fn not_a_discrete_value(item: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NotADiscreteValue {
            item: item.into(),
            value: value.into(),
        }
    }

    pub fn not_value_bearing(item: impl Into<String>, item_type: impl Into<String>) -> Self {
        Self::NotValueBearing {
            item: item.into(),
            item_type: item_type.into(),
        }
    }
}
