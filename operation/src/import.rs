//! Bulk registration of the operation types found in a namespace.
//!
//! Each direct member is classified: types deriving from the operation base
//! type are registered under `(namespace id, member name)`; everything else
//! is skipped with a reason. Classification never fails, so one odd member
//! cannot abort the import. Nested namespaces are not entered.

use opkit_core::messages;
use std::fmt;
use tracing::{info, trace};

use crate::hierarchy::TypeHierarchy;
use crate::namespace::{MemberValue, Namespace, NamespaceMember, TypeInfo};
use crate::registry::OperationRegistrar;

/// Options for one bulk import.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Root type every imported type must derive from.
    pub base_type: String,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            base_type: messages::OPERATION_BASE_TYPE.to_string(),
        }
    }
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_type(mut self, base_type: impl Into<String>) -> Self {
        self.base_type = base_type.into();
        self
    }
}

/// Why a member was not registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotAType,
    NotAnOperation,
    NestedNamespace,
}

impl SkipReason {
    pub fn message(&self) -> &'static str {
        match self {
            SkipReason::NotAType => messages::SKIP_NOT_A_TYPE,
            SkipReason::NotAnOperation => messages::SKIP_NOT_AN_OPERATION,
            SkipReason::NestedNamespace => messages::SKIP_NESTED_NAMESPACE,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of a bulk import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Member names registered, in scan order.
    pub registered: Vec<String>,
    pub skipped: Vec<(String, SkipReason)>,
}

impl ImportSummary {
    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    pub fn skip_reason(&self, member: &str) -> Option<SkipReason> {
        self.skipped
            .iter()
            .find(|(name, _)| name == member)
            .map(|(_, reason)| *reason)
    }
}

/// Decide whether `value` is an operation type under `hierarchy`.
pub fn classify<'m>(
    hierarchy: &TypeHierarchy,
    value: &'m MemberValue,
    base_type: &str,
) -> Result<&'m TypeInfo, SkipReason> {
    match value {
        MemberValue::Namespace(_) => Err(SkipReason::NestedNamespace),
        MemberValue::Value(_) => Err(SkipReason::NotAType),
        MemberValue::Type(info) => {
            if hierarchy.is_subtype(&info.name, base_type) {
                Ok(info)
            } else {
                Err(SkipReason::NotAnOperation)
            }
        }
    }
}

/// Bulk import for any registrar.
pub trait RegisterNamespace: OperationRegistrar {
    /// Register every operation type among `members` under `namespace_id`.
    fn register_namespace_operations(
        &mut self,
        namespace_id: &str,
        members: &[NamespaceMember],
    ) -> ImportSummary {
        self.register_namespace_operations_with(namespace_id, members, &ImportOptions::default())
    }

    fn register_namespace_operations_with(
        &mut self,
        namespace_id: &str,
        members: &[NamespaceMember],
        options: &ImportOptions,
    ) -> ImportSummary {
        // Members may derive from each other regardless of scan order.
        let mut hierarchy = self.known_types();
        for info in members.iter().filter_map(|m| m.value.as_type()) {
            hierarchy.declare(info.name.clone(), info.bases.iter().cloned());
        }

        let mut summary = ImportSummary::default();
        for member in members {
            match classify(&hierarchy, &member.value, &options.base_type) {
                Ok(info) => {
                    self.register_operation_type(namespace_id, &member.name, info);
                    summary.registered.push(member.name.clone());
                }
                Err(reason) => {
                    trace!(namespace = namespace_id, member = %member.name, %reason, "skip member");
                    summary.skipped.push((member.name.clone(), reason));
                }
            }
        }

        info!(
            namespace = namespace_id,
            members = members.len(),
            registered = summary.registered.len(),
            "imported namespace operations"
        );
        summary
    }

    /// Register the operation types of `namespace` under its own name.
    fn register_namespace(&mut self, namespace: &Namespace) -> ImportSummary {
        self.register_namespace_operations(&namespace.name, namespace.members())
    }

    fn register_namespace_with(
        &mut self,
        namespace: &Namespace,
        options: &ImportOptions,
    ) -> ImportSummary {
        self.register_namespace_operations_with(&namespace.name, namespace.members(), options)
    }
}

impl<R: OperationRegistrar + ?Sized> RegisterNamespace for R {}
