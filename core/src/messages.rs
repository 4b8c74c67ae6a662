//! Common message fragments used across opkit components.
//!
//! These constants keep log fields and error text consistent between the
//! synthesizer and the registry importer.

/// Name of the root operation type that importable types must derive from.
pub const OPERATION_BASE_TYPE: &str = "Operation";

/// Skip reason: the namespace member is not a type.
pub const SKIP_NOT_A_TYPE: &str = "member is not a type";

/// Skip reason: the type does not derive from the operation base type.
pub const SKIP_NOT_AN_OPERATION: &str = "type is not an operation";

/// Skip reason: the member is a nested namespace (imports never recurse).
pub const SKIP_NESTED_NAMESPACE: &str = "nested namespaces are not scanned";
