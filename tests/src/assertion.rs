//! Assertion types and builders for verifying step results.

use opkit_core::Value;

use crate::error::{ScenarioError, ScenarioResult};

/// A complete assertion for a step result (the value returned by the
/// step's last call).
#[derive(Default)]
pub struct Assertion {
    pub value: Option<Value>,
    pub null: bool,
    pub error: Option<String>,
    pub error_pattern: Option<String>,
    #[allow(clippy::type_complexity)]
    pub custom: Option<Box<dyn Fn(&Value) -> bool + Send + Sync>>,
}

impl std::fmt::Debug for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assertion")
            .field("value", &self.value)
            .field("null", &self.null)
            .field("error", &self.error)
            .field("error_pattern", &self.error_pattern)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Assertion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify the assertion against a result.
    pub fn verify(&self, step: &str, result: &Result<Value, String>) -> ScenarioResult<()> {
        if let Some(ref expected_error) = self.error {
            return match result {
                Err(msg) if msg.contains(expected_error) => Ok(()),
                Err(msg) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error containing '{}', got: {}", expected_error, msg),
                )),
                Ok(_) => Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected error containing '{}', but step succeeded",
                        expected_error
                    ),
                )),
            };
        }

        if let Some(ref pattern) = self.error_pattern {
            let re = regex_lite::Regex::new(pattern).map_err(|e| {
                ScenarioError::assertion_failed(step, format!("invalid regex pattern: {}", e))
            })?;
            return match result {
                Err(msg) if re.is_match(msg) => Ok(()),
                Err(msg) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error matching '{}', got: {}", pattern, msg),
                )),
                Ok(_) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error matching '{}', but step succeeded", pattern),
                )),
            };
        }

        let actual = result
            .as_ref()
            .map_err(|msg| ScenarioError::assertion_failed(step, format!("step failed: {}", msg)))?;

        if let Some(ref custom) = self.custom {
            if !custom(actual) {
                return Err(ScenarioError::assertion_failed(step, "custom assertion failed"));
            }
        }

        if self.null && !actual.is_null() {
            return Err(ScenarioError::assertion_failed(
                step,
                format!("expected null, got {}", actual),
            ));
        }

        if let Some(ref expected) = self.value {
            if !values_equal(actual, expected) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("value mismatch:\n  expected: {}\n  actual:   {}", expected, actual),
                ));
            }
        }

        Ok(())
    }
}

/// Builder for fluent assertion construction.
pub struct AssertionBuilder {
    assertion: Assertion,
}

impl AssertionBuilder {
    pub fn new() -> Self {
        Self {
            assertion: Assertion::new(),
        }
    }

    pub fn build(self) -> Assertion {
        self.assertion
    }

    /// Assert that the step succeeds, whatever it returns.
    pub fn ok(self) -> Self {
        self
    }

    /// Assert that the last call returns `v`.
    pub fn value(mut self, v: impl Into<Value>) -> Self {
        self.assertion.value = Some(v.into());
        self
    }

    /// Assert that the last call returns null (setters, unset discrete slots).
    pub fn null(mut self) -> Self {
        self.assertion.null = true;
        self
    }

    /// Assert that the step fails with an error containing the given string.
    pub fn error(mut self, contains: impl Into<String>) -> Self {
        self.assertion.error = Some(contains.into());
        self
    }

    /// Assert that the step fails with an error matching the given regex.
    pub fn error_matches(mut self, pattern: impl Into<String>) -> Self {
        self.assertion.error_pattern = Some(pattern.into());
        self
    }

    /// Custom assertion function.
    pub fn assert_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.assertion.custom = Some(Box::new(f));
        self
    }
}

impl Default for AssertionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Float(a), Value::Float(b)) => (a - b).abs() < f64::EPSILON,
        (Value::Float(a), Value::Int(b)) | (Value::Int(b), Value::Float(a)) => {
            (a - *b as f64).abs() < f64::EPSILON
        }
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_assertion() {
        let assertion = AssertionBuilder::new().value(0.5).build();

        assert!(assertion.verify("s", &Ok(Value::Float(0.5))).is_ok());
        assert!(assertion.verify("s", &Ok(Value::Float(0.25))).is_err());
        assert!(assertion.verify("s", &Err("boom".into())).is_err());
    }

    #[test]
    fn test_error_assertions() {
        let contains = AssertionBuilder::new().error("Unknown method").build();
        let pattern = AssertionBuilder::new().error_matches(r"expected \(enabled\)").build();

        assert!(contains
            .verify("s", &Err("Unknown method: enableResolution".into()))
            .is_ok());
        assert!(contains.verify("s", &Ok(Value::Null)).is_err());
        assert!(pattern
            .verify("s", &Err("Invalid arity for enableDebug: expected (enabled), got 0".into()))
            .is_ok());
    }

    #[test]
    fn test_null_and_custom() {
        let null = AssertionBuilder::new().null().build();
        let custom = AssertionBuilder::new()
            .assert_fn(|v| v.as_int().is_some_and(|n| n > 10))
            .build();

        assert!(null.verify("s", &Ok(Value::Null)).is_ok());
        assert!(null.verify("s", &Ok(Value::Int(1))).is_err());
        assert!(custom.verify("s", &Ok(Value::Int(11))).is_ok());
        assert!(custom.verify("s", &Ok(Value::Int(3))).is_err());
    }
}
