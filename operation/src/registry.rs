//! The operation registry.

use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{OperationError, OperationResult};
use crate::hierarchy::TypeHierarchy;
use crate::namespace::{OperationFactory, TypeInfo};
use crate::operation::Operation;

/// Anything operation types can be registered with.
pub trait OperationRegistrar {
    /// Record `type_name` as an operation of `namespace`.
    fn register_operation(&mut self, namespace: &str, type_name: &str);

    /// Record an operation type with its full description. Registrars that
    /// only track names fall back to `register_operation`.
    fn register_operation_type(&mut self, namespace: &str, type_name: &str, _info: &TypeInfo) {
        self.register_operation(namespace, type_name);
    }

    /// Types known before a namespace is scanned, so members may derive from
    /// types declared elsewhere.
    fn known_types(&self) -> TypeHierarchy {
        TypeHierarchy::new()
    }
}

#[derive(Debug, Clone, Default)]
struct Entry {
    factory: Option<OperationFactory>,
}

/// Operations by (namespace, type name).
#[derive(Debug, Clone, Default)]
pub struct OperationRegistry {
    entries: BTreeMap<(String, String), Entry>,
    types: TypeHierarchy,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `info` known for later namespace scans without registering it.
    pub fn declare_type(&mut self, info: &TypeInfo) {
        self.types.declare(info.name.clone(), info.bases.iter().cloned());
    }

    pub fn contains(&self, namespace: &str, type_name: &str) -> bool {
        self.entries
            .contains_key(&(namespace.to_string(), type_name.to_string()))
    }

    /// Registered (namespace, type name) pairs, sorted.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .keys()
            .map(|(namespace, type_name)| (namespace.as_str(), type_name.as_str()))
    }

    /// Type names registered under `namespace`.
    pub fn operations_in<'a>(&'a self, namespace: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.iter()
            .filter(move |(ns, _)| *ns == namespace)
            .map(|(_, type_name)| type_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove an entry. Returns true if it existed.
    pub fn unregister(&mut self, namespace: &str, type_name: &str) -> bool {
        self.entries
            .remove(&(namespace.to_string(), type_name.to_string()))
            .is_some()
    }

    /// Instantiate a registered operation.
    pub fn create(&self, namespace: &str, type_name: &str) -> OperationResult<Box<dyn Operation>> {
        let entry = self
            .entries
            .get(&(namespace.to_string(), type_name.to_string()))
            .ok_or_else(|| OperationError::unknown_operation(namespace, type_name))?;
        let factory = entry
            .factory
            .ok_or_else(|| OperationError::not_constructible(namespace, type_name))?;
        factory()
    }

    fn insert(&mut self, namespace: &str, type_name: &str, entry: Entry) {
        debug!(namespace, type_name, "register operation");
        self.entries
            .insert((namespace.to_string(), type_name.to_string()), entry);
    }
}

impl OperationRegistrar for OperationRegistry {
    fn register_operation(&mut self, namespace: &str, type_name: &str) {
        self.insert(namespace, type_name, Entry::default());
    }

    fn register_operation_type(&mut self, namespace: &str, type_name: &str, info: &TypeInfo) {
        self.declare_type(info);
        self.insert(
            namespace,
            type_name,
            Entry {
                factory: info.factory,
            },
        );
    }

    fn known_types(&self) -> TypeHierarchy {
        self.types.clone()
    }
}
