//! ParameterApi - a container plus its synthesized methods.
//!
//! The wrapper exclusively borrows one `Parameters` instance, so methods
//! synthesized for it can never be reached through another container. It
//! dereferences to `Parameters`, keeping the generic `find`/`item` interface
//! available next to the synthesized one.

use opkit_attribute::Parameters;
use opkit_core::Value;
use std::ops::{Deref, DerefMut};

use crate::binding::{Binding, MethodKind};
use crate::error::{SynthesisError, SynthesisResult};
use crate::options::SynthesisOptions;
use crate::synthesizer::{MethodTable, Synthesizer};

/// A parameter container decorated with item-specific methods.
#[derive(Debug)]
pub struct ParameterApi<'p> {
    parameters: &'p mut Parameters,
    synthesizer: Synthesizer,
    methods: MethodTable,
    synthesized_version: u64,
}

impl<'p> ParameterApi<'p> {
    /// Synthesize with default options.
    pub fn synthesize(parameters: &'p mut Parameters) -> SynthesisResult<Self> {
        Self::synthesize_with(parameters, SynthesisOptions::default())
    }

    pub fn synthesize_with(
        parameters: &'p mut Parameters,
        options: SynthesisOptions,
    ) -> SynthesisResult<Self> {
        let synthesizer = Synthesizer::new(options);
        let methods = synthesizer.synthesize(parameters)?;
        Ok(Self {
            synthesized_version: parameters.version(),
            parameters,
            synthesizer,
            methods,
        })
    }

    /// Rebuild the method table from the container's current items.
    pub fn resynthesize(&mut self) -> SynthesisResult<()> {
        self.methods = self.synthesizer.synthesize(self.parameters)?;
        self.synthesized_version = self.parameters.version();
        Ok(())
    }

    /// Call a synthesized method by name. The container is the implicit receiver.
    pub fn call(&mut self, method: &str, args: &[Value]) -> SynthesisResult<Value> {
        let binding = self
            .methods
            .get(method)
            .cloned()
            .ok_or_else(|| SynthesisError::unknown_method(method))?;
        binding.invoke(method, self.parameters, args)
    }

    pub fn has_method(&self, method: &str) -> bool {
        self.methods.contains(method)
    }

    pub fn binding(&self, method: &str) -> Option<&Binding> {
        self.methods.get(method)
    }

    /// Synthesized method names, sorted.
    pub fn method_names(&self) -> Vec<&str> {
        self.methods.names().collect()
    }

    pub fn methods(&self) -> &MethodTable {
        &self.methods
    }

    /// Container version the method table was built from.
    pub fn synthesized_version(&self) -> u64 {
        self.synthesized_version
    }

    /// True once items were added, removed or replaced since synthesis.
    pub fn is_stale(&self) -> bool {
        self.parameters.version() != self.synthesized_version
    }

    /// Give back the container borrow.
    pub fn into_inner(self) -> &'p mut Parameters {
        self.parameters
    }

    // Typed shortcuts. Each routes through the bound method of `item`.

    pub fn set_value(
        &mut self,
        item: &str,
        index: usize,
        value: impl Into<Value>,
    ) -> SynthesisResult<()> {
        self.call_item(item, MethodKind::SetValue, &[Value::from(index), value.into()])
            .map(drop)
    }

    pub fn value(&mut self, item: &str, index: usize) -> SynthesisResult<Value> {
        self.call_item(item, MethodKind::Value, &[Value::from(index)])
    }

    pub fn enable(&mut self, item: &str, enabled: bool) -> SynthesisResult<()> {
        self.call_item(item, MethodKind::Enable, &[Value::Bool(enabled)])
            .map(drop)
    }

    pub fn is_enabled(&mut self, item: &str) -> SynthesisResult<bool> {
        let enabled = self.call_item(item, MethodKind::IsEnabled, &[])?;
        Ok(enabled.as_bool().unwrap_or(false))
    }

    pub fn set_discrete_index(
        &mut self,
        item: &str,
        index: usize,
        choice: usize,
    ) -> SynthesisResult<()> {
        self.call_item(
            item,
            MethodKind::SetDiscreteIndex,
            &[Value::from(index), Value::from(choice)],
        )
        .map(drop)
    }

    pub fn discrete_index(&mut self, item: &str, index: usize) -> SynthesisResult<Option<usize>> {
        let choice = self.call_item(item, MethodKind::DiscreteIndex, &[Value::from(index)])?;
        Ok(choice.as_index())
    }

    fn call_item(&mut self, item: &str, kind: MethodKind, args: &[Value]) -> SynthesisResult<Value> {
        let method = self
            .methods
            .method_for(item, kind)
            .map(str::to_string)
            .ok_or_else(|| SynthesisError::unknown_method(format!("{} of {}", kind, item)))?;
        self.call(&method, args)
    }
}

impl Deref for ParameterApi<'_> {
    type Target = Parameters;

    fn deref(&self) -> &Parameters {
        &*self.parameters
    }
}

impl DerefMut for ParameterApi<'_> {
    fn deref_mut(&mut self) -> &mut Parameters {
        &mut *self.parameters
    }
}
