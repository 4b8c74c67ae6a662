//! The synthesis pass: walk a container's items and bind accessors.

use opkit_attribute::Parameters;
use std::collections::BTreeMap;
use tracing::{debug, info, trace, warn};

use crate::binding::{Binding, MethodKind};
use crate::error::{SynthesisError, SynthesisResult};
use crate::naming::MethodNames;
use crate::options::{CollisionPolicy, SynthesisOptions};

/// Synthesized method name to binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodTable {
    methods: BTreeMap<String, Binding>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binding for a method name.
    pub fn get(&self, method: &str) -> Option<&Binding> {
        self.methods.get(method)
    }

    pub fn contains(&self, method: &str) -> bool {
        self.methods.contains_key(method)
    }

    /// The method bound to `item` with `kind`, if it survived collisions.
    pub fn method_for(&self, item: &str, kind: MethodKind) -> Option<&str> {
        self.methods
            .iter()
            .find(|(_, binding)| binding.item == item && binding.kind == kind)
            .map(|(name, _)| name.as_str())
    }

    /// Method names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(|name| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Bind `method`, applying `policy` when another item already owns the name.
    fn bind(
        &mut self,
        method: String,
        binding: Binding,
        policy: CollisionPolicy,
    ) -> SynthesisResult<()> {
        if let Some(existing) = self.methods.get(&method) {
            if existing.item != binding.item {
                match policy {
                    CollisionPolicy::FailFast => {
                        return Err(SynthesisError::name_collision(
                            method,
                            &existing.item,
                            &binding.item,
                        ));
                    }
                    CollisionPolicy::LastWriteWins => {
                        warn!(
                            method = %method,
                            replaced = %existing.item,
                            item = %binding.item,
                            "method name collision, later item wins"
                        );
                    }
                }
            }
        }

        debug!(item = %binding.item, method = %method, kind = %binding.kind, "bind method");
        self.methods.insert(method, binding);
        Ok(())
    }
}

/// Builds method tables from containers.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    options: SynthesisOptions,
}

impl Synthesizer {
    pub fn new(options: SynthesisOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    /// Derive the method table for `parameters`, visiting items by position.
    pub fn synthesize(&self, parameters: &Parameters) -> SynthesisResult<MethodTable> {
        let mut table = MethodTable::new();
        let verbs = &self.options.verbs;

        for position in 0..parameters.number_of_items() {
            let Some(item) = parameters.item(position) else {
                continue;
            };
            let capabilities = item.capabilities();
            if capabilities.is_empty() {
                trace!(item = item.name(), "no capabilities, nothing to bind");
                continue;
            }

            let names = MethodNames::derive(item.name())?;
            let facets = [
                (capabilities.value, MethodKind::VALUE),
                (capabilities.optional, MethodKind::OPTIONAL),
                (capabilities.discrete, MethodKind::DISCRETE),
            ];
            for (present, kinds) in facets {
                if !present {
                    continue;
                }
                for kind in kinds {
                    table.bind(
                        names.method(kind, verbs),
                        Binding::new(item.name(), kind),
                        self.options.collision,
                    )?;
                }
            }
        }

        info!(
            container = %parameters.id(),
            items = parameters.number_of_items(),
            methods = table.len(),
            "synthesized parameter api"
        );
        Ok(table)
    }
}
