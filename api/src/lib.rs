//! opkit API
//!
//! Synthesizes a friendly, item-specific method surface over a generic
//! `Parameters` container.
//!
//! Responsibilities:
//! - Derive method names from item names
//! - Map each item's capability facets to getter/setter bindings
//! - Dispatch calls by method name, re-resolving the item by name each time
//!
//! # Module Structure
//!
//! - `naming` - item name to token sequence and method names
//! - `binding` - a bound method (item name + method kind) and its invocation
//! - `synthesizer` - builds the method table for one container
//! - `api` - ParameterApi, the wrapper that owns the table and the container borrow
//! - `options` - SynthesisOptions (collision policy, naming verbs)
//! - `error` - Error types for synthesis and dispatch failures

mod api;
mod binding;
mod error;
mod naming;
mod options;
mod synthesizer;

pub use api::ParameterApi;
pub use binding::{Binding, MethodKind};
pub use error::{SynthesisError, SynthesisResult};
pub use naming::{tokenize, MethodNames};
pub use options::{CollisionPolicy, NamingVerbs, SynthesisOptions};
pub use synthesizer::{MethodTable, Synthesizer};
