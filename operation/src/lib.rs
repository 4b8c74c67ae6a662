//! opkit Operation
//!
//! Operations own a parameter container and hand out its synthesized API;
//! the registry records operation types and can bulk-import them from a
//! namespace.
//!
//! Responsibilities:
//! - The Operation trait and its `effective_parameters` entry point
//! - A registry of (namespace, type) entries with optional factories
//! - Classifying namespace members and registering the operation types
//!
//! # Module Structure
//!
//! - `operation` - Operation trait, BasicOperation
//! - `namespace` - Namespace, NamespaceMember, MemberValue, TypeInfo
//! - `hierarchy` - TypeHierarchy (transitive subtype queries by type name)
//! - `registry` - OperationRegistrar trait, OperationRegistry
//! - `import` - RegisterNamespace bulk importer and ImportOptions
//! - `error` - Error types for operation failures

mod error;
mod hierarchy;
mod import;
mod namespace;
mod operation;
mod registry;

pub use error::{OperationError, OperationResult};
pub use hierarchy::TypeHierarchy;
pub use import::{classify, ImportOptions, ImportSummary, RegisterNamespace, SkipReason};
pub use namespace::{MemberValue, Namespace, NamespaceMember, OperationFactory, TypeInfo};
pub use operation::{BasicOperation, Operation};
pub use registry::{OperationRegistrar, OperationRegistry};
