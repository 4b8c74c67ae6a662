//! Value checks for value-bearing items.

use opkit_core::Value;

use crate::error::{AttributeError, AttributeResult};
use crate::ItemType;

/// Check a value against an item's storage type, returning the value to store.
/// Int values assigned to Double items widen to Float. Null always passes and
/// clears the slot.
pub fn coerce_value(item: &str, item_type: ItemType, value: Value) -> AttributeResult<Value> {
    match (item_type, value) {
        (_, Value::Null) => Ok(Value::Null),
        (ItemType::Double, Value::Float(f)) => Ok(Value::Float(f)),
        (ItemType::Double, Value::Int(i)) => Ok(Value::Float(i as f64)),
        (ItemType::Int, Value::Int(i)) => Ok(Value::Int(i)),
        (ItemType::String, Value::String(s)) => Ok(Value::String(s)),
        (expected, actual) => Err(AttributeError::type_mismatch(
            item,
            expected.name(),
            actual.type_name(),
        )),
    }
}

/// Validate range constraints (min/max) for a value.
pub fn validate_range(
    item: &str,
    value: &Value,
    min: &Option<Value>,
    max: &Option<Value>,
) -> AttributeResult<()> {
    // Only numeric values are range-checked
    let Some(v) = value.as_float() else {
        return Ok(());
    };

    if let Some(min_val) = min.as_ref().and_then(Value::as_float) {
        if v < min_val {
            let range_desc = match max {
                Some(max_val) => format!(" [{}..{}]", min_val, max_val),
                None => format!(" [>= {}]", min_val),
            };
            return Err(AttributeError::range_violation(item, value.to_string(), range_desc));
        }
    }

    if let Some(max_val) = max.as_ref().and_then(Value::as_float) {
        if v > max_val {
            let range_desc = match min {
                Some(min_val) => format!(" [{}..{}]", min_val, max_val),
                None => format!(" [<= {}]", max_val),
            };
            return Err(AttributeError::range_violation(item, value.to_string(), range_desc));
        }
    }

    Ok(())
}
