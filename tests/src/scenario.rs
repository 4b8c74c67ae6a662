//! Scenario definition and builder.

use opkit_attribute::Definition;
use std::path::{Path, PathBuf};

use crate::assertion::{Assertion, AssertionBuilder};
use crate::error::{ScenarioError, ScenarioResult};
use crate::loader::Calls;
use crate::runner::Runner;

/// A step in a scenario with its assertion.
#[derive(Debug)]
pub struct Step {
    /// Step name (matches `--# name` in the calls file).
    pub name: String,
    /// Assertion to verify the result.
    pub assertion: Assertion,
}

/// A complete test scenario: one definition, one operation, a series of calls.
pub struct Scenario {
    /// Scenario name, also the operation type name.
    name: String,
    /// Path to the definition JSON file.
    definition_path: Option<PathBuf>,
    /// Definition given inline.
    definition: Option<Definition>,
    /// Path to the calls file.
    calls_path: Option<PathBuf>,
    /// Parsed calls (if loaded inline).
    calls: Option<Calls>,
    /// Steps with assertions.
    steps: Vec<Step>,
    /// Base path for resolving relative paths.
    base_path: PathBuf,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition_path: None,
            definition: None,
            calls_path: None,
            calls: None,
            steps: Vec::new(),
            base_path: fixtures_root(),
        }
    }

    /// Set the base path for resolving relative paths.
    pub fn base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = path.into();
        self
    }

    /// Set the definition file path (relative to fixtures/).
    pub fn definition(mut self, path: impl Into<PathBuf>) -> Self {
        self.definition_path = Some(path.into());
        self
    }

    /// Use an in-memory definition.
    pub fn definition_value(mut self, definition: Definition) -> Self {
        self.definition = Some(definition);
        self
    }

    /// Set the calls file path (relative to fixtures/).
    pub fn calls(mut self, path: impl Into<PathBuf>) -> Self {
        self.calls_path = Some(path.into());
        self
    }

    /// Load calls from a string.
    pub fn calls_source(mut self, source: &str) -> ScenarioResult<Self> {
        self.calls = Some(Calls::parse(source)?);
        Ok(self)
    }

    /// Add a step with an assertion.
    ///
    /// The step name must match a `--# name` marker in the calls file.
    pub fn step<F>(mut self, name: impl Into<String>, assertion_fn: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        let name = name.into();
        let assertion = assertion_fn(AssertionBuilder::new()).build();
        self.steps.push(Step { name, assertion });
        self
    }

    /// Run the scenario.
    pub fn run(&self) -> ScenarioResult<()> {
        let runner = Runner::new(self)?;
        runner.run()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The definition, loading from file if needed.
    pub fn load_definition(&self) -> ScenarioResult<Definition> {
        if let Some(ref definition) = self.definition {
            return Ok(definition.clone());
        }

        let path = match &self.definition_path {
            Some(p) => self.resolve_path(p),
            None => return Err(ScenarioError::missing_definition(&self.name)),
        };
        let source =
            std::fs::read_to_string(&path).map_err(|e| ScenarioError::file_read(&path, e))?;
        Definition::from_json(&source)
            .map_err(|e| ScenarioError::definition_load(&path, e.to_string()))
    }

    /// The calls, loading from file if needed.
    pub fn load_calls(&self) -> ScenarioResult<Calls> {
        if let Some(ref calls) = self.calls {
            return Ok(calls.clone());
        }

        let path = match &self.calls_path {
            Some(p) => self.resolve_path(p),
            None => return Err(ScenarioError::missing_calls(PathBuf::from(&self.name))),
        };

        Calls::load(&path)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }
}

/// The fixtures directory of this crate.
pub fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}
