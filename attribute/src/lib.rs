//! opkit Attribute
//!
//! The parameter container consumed by the API synthesizer and by operations.
//!
//! Responsibilities:
//! - Describe items through definitions (optionally loaded from JSON)
//! - Hold live items in an ordered, name-addressable container
//! - Expose each item's capability facets (value-bearing, optional, discrete)
//!   as separate traits that callers probe for
//!
//! # Module Structure
//!
//! - `definition` - ItemDefinition / Definition and JSON loading
//! - `item` - the Item trait and the capability facet traits
//! - `items` - concrete ValueItem and VoidItem
//! - `parameters` - the Parameters container
//! - `validation` - value checks shared by value-bearing items
//! - `error` - Error types for attribute failures

mod definition;
mod error;
mod item;
mod items;
mod parameters;
mod validation;

pub use definition::{Definition, DiscreteChoice, ItemDefinition, ItemType};
pub use error::{AttributeError, AttributeResult};
pub use item::{Capabilities, Capability, Discrete, Item, Optional, ValueBearing};
pub use items::{ValueItem, VoidItem};
pub use parameters::Parameters;
