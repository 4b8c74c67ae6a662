//! Loader for calls files.
//!
//! A calls file groups synthesized-method invocations under step markers
//! (`--# step_name`). Each non-comment line is one call, written as
//! `method(arg, ...)` with JSON literals as arguments.

use opkit_core::Value;
use regex_lite::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{ScenarioError, ScenarioResult};

fn call_pattern() -> Result<&'static Regex, String> {
    static CALL: OnceLock<Result<Regex, String>> = OnceLock::new();
    CALL.get_or_init(|| {
        Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\s*\((.*)\)$")
            .map_err(|e| format!("invalid call pattern: {}", e))
    })
    .as_ref()
    .map_err(Clone::clone)
}

/// One method invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: String,
    pub args: Vec<Value>,
}

impl Call {
    /// Parse `method(arg, ...)`.
    pub fn parse(line: &str) -> Result<Self, String> {
        let captures = call_pattern()?
            .captures(line)
            .ok_or_else(|| format!("not a call: {}", line))?;
        let method = captures[1].to_string();
        let args: Vec<Value> = serde_json::from_str(&format!("[{}]", &captures[2]))
            .map_err(|e| format!("bad arguments in '{}': {}", line, e))?;
        Ok(Self { method, args })
    }
}

/// A parsed calls file.
#[derive(Debug, Clone)]
pub struct Calls {
    /// Map of step name to its calls.
    pub steps: HashMap<String, Vec<Call>>,
    /// Steps in order of appearance.
    pub step_order: Vec<String>,
}

impl Calls {
    /// Parse a calls file from a string.
    pub fn parse(source: &str) -> ScenarioResult<Self> {
        let mut steps: HashMap<String, Vec<Call>> = HashMap::new();
        let mut step_order = Vec::new();
        let mut current_step: Option<String> = None;

        for line in source.lines() {
            let trimmed = line.trim();

            if let Some(suffix) = trimmed.strip_prefix("--#") {
                let step_name = suffix.trim().to_string();
                if step_name.is_empty() {
                    return Err(ScenarioError::calls_parse(
                        "<inline>",
                        "empty step name after --#",
                    ));
                }
                step_order.push(step_name.clone());
                steps.entry(step_name.clone()).or_default();
                current_step = Some(step_name);
            } else if trimmed.is_empty() || trimmed.starts_with("--") {
                continue;
            } else if let Some(ref step_name) = current_step {
                let call = Call::parse(trimmed)
                    .map_err(|message| ScenarioError::calls_parse("<inline>", message))?;
                steps.entry(step_name.clone()).or_default().push(call);
            }
            // Lines before the first step marker are ignored
        }

        Ok(Self { steps, step_order })
    }

    /// Load and parse a calls file from disk.
    pub fn load(path: &Path) -> ScenarioResult<Self> {
        let source =
            std::fs::read_to_string(path).map_err(|e| ScenarioError::file_read(path, e))?;
        Self::parse(&source).map_err(|e| ScenarioError::calls_parse(path, e.to_string()))
    }

    /// Calls of a step, in order.
    pub fn get_step(&self, name: &str) -> Option<&[Call]> {
        self.steps.get(name).map(|calls| calls.as_slice())
    }

    /// All step names in order.
    pub fn step_names(&self) -> &[String] {
        &self.step_order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_calls() {
        let source = r#"
-- Resolution round trip

--# set_resolution
setResolution(0.25)

--# read_back
resolution()
resolution(0)
"#;

        let calls = Calls::parse(source).unwrap();

        assert_eq!(calls.step_order, vec!["set_resolution", "read_back"]);
        assert_eq!(
            calls.get_step("set_resolution").unwrap(),
            &[Call {
                method: "setResolution".into(),
                args: vec![Value::Float(0.25)],
            }]
        );
        assert_eq!(calls.get_step("read_back").unwrap().len(), 2);
    }

    #[test]
    fn test_parse_argument_kinds() {
        let call = Call::parse(r#"setSolverType(1, "cg")"#).unwrap();
        assert_eq!(call.args, vec![Value::Int(1), Value::String("cg".into())]);

        let call = Call::parse("enableDebug(true)").unwrap();
        assert_eq!(call.args, vec![Value::Bool(true)]);
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert!(Calls::parse("--# s\nsetResolution 0.5").is_err());
        assert!(Calls::parse("--# s\nsetResolution(0.5,)").is_err());
        assert!(Calls::parse("--#\nresolution()").is_err());
    }

    #[test]
    fn test_list_arguments_rejected() {
        let err = Call::parse("setFixedPoints([1, 2, 3])").unwrap_err();
        assert!(err.starts_with("bad arguments in 'setFixedPoints([1, 2, 3])'"), "{}", err);
    }
}
