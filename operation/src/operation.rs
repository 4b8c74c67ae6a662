//! The Operation trait.

use opkit_api::{ParameterApi, SynthesisOptions};
use opkit_attribute::{Definition, Parameters};
use std::fmt;
use tracing::debug;

use crate::error::OperationResult;

/// An operation: a named type owning one parameter container.
pub trait Operation: fmt::Debug {
    /// The operation's type name.
    fn type_name(&self) -> &str;

    /// The raw parameter container.
    fn parameters(&self) -> &Parameters;

    fn parameters_mut(&mut self) -> &mut Parameters;

    /// The parameter container with its item-specific methods synthesized.
    ///
    /// Synthesis runs on every call, so the methods always match the current
    /// items.
    fn effective_parameters(&mut self) -> OperationResult<ParameterApi<'_>> {
        self.effective_parameters_with(&SynthesisOptions::default())
    }

    fn effective_parameters_with(
        &mut self,
        options: &SynthesisOptions,
    ) -> OperationResult<ParameterApi<'_>> {
        debug!(operation = self.type_name(), "synthesize effective parameters");
        Ok(ParameterApi::synthesize_with(
            self.parameters_mut(),
            options.clone(),
        )?)
    }
}

/// An operation whose parameters come straight from a definition.
#[derive(Debug)]
pub struct BasicOperation {
    type_name: String,
    parameters: Parameters,
}

impl BasicOperation {
    pub fn new(type_name: impl Into<String>, parameters: Parameters) -> Self {
        Self {
            type_name: type_name.into(),
            parameters,
        }
    }

    /// Build the operation and a fresh container from `definition`.
    pub fn from_definition(
        type_name: impl Into<String>,
        definition: &Definition,
    ) -> OperationResult<Self> {
        Ok(Self::new(type_name, definition.create_parameters()?))
    }
}

impl Operation for BasicOperation {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }
}
