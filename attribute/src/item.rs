//! The Item trait and its capability facets.
//!
//! An item exposes any subset of three facets. Callers discover them by
//! probing (`as_value`, `as_optional`, `as_discrete`) rather than by reading
//! the definition, so an item type decides for itself which facets it offers.

use opkit_core::Value;
use std::fmt;

use crate::error::AttributeResult;
use crate::ItemDefinition;

/// A single named parameter slot.
pub trait Item: fmt::Debug {
    /// The item's name, unique within its container.
    fn name(&self) -> &str;

    /// The definition this item was created from.
    fn definition(&self) -> &ItemDefinition;

    /// Value-bearing facet, if present.
    fn as_value(&self) -> Option<&dyn ValueBearing> {
        None
    }

    fn as_value_mut(&mut self) -> Option<&mut dyn ValueBearing> {
        None
    }

    /// Optional (enableable) facet, if present.
    fn as_optional(&self) -> Option<&dyn Optional> {
        None
    }

    fn as_optional_mut(&mut self) -> Option<&mut dyn Optional> {
        None
    }

    /// Discrete facet, if present.
    fn as_discrete(&self) -> Option<&dyn Discrete> {
        None
    }

    fn as_discrete_mut(&mut self) -> Option<&mut dyn Discrete> {
        None
    }

    /// The set of facets this item currently exposes.
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            value: self.as_value().is_some(),
            optional: self.as_optional().is_some(),
            discrete: self.as_discrete().is_some(),
        }
    }
}

/// Items holding one or more indexed values.
pub trait ValueBearing {
    fn number_of_values(&self) -> usize;

    /// Value at `index`.
    fn value(&self, index: usize) -> AttributeResult<Value>;

    /// Store `value` at `index`.
    fn set_value(&mut self, index: usize, value: Value) -> AttributeResult<()>;
}

/// Items that can be switched on and off.
pub trait Optional {
    fn is_enabled(&self) -> bool;

    fn set_is_enabled(&mut self, enabled: bool);
}

/// Items whose slots select among a fixed enumeration.
pub trait Discrete {
    fn number_of_discrete_values(&self) -> usize;

    /// Label of enumeration entry `choice`.
    fn discrete_label(&self, choice: usize) -> Option<&str>;

    /// Choice currently selected in slot `index`, `None` when the slot is unset.
    fn discrete_index(&self, index: usize) -> AttributeResult<Option<usize>>;

    /// Select enumeration entry `choice` in slot `index`.
    fn set_discrete_index(&mut self, index: usize, choice: usize) -> AttributeResult<()>;
}

/// One capability facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Value,
    Optional,
    Discrete,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Value => write!(f, "value"),
            Capability::Optional => write!(f, "optional"),
            Capability::Discrete => write!(f, "discrete"),
        }
    }
}

/// Snapshot of the facets an item exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub value: bool,
    pub optional: bool,
    pub discrete: bool,
}

impl Capabilities {
    /// Returns true if the item exposes no facet at all.
    pub fn is_empty(&self) -> bool {
        !(self.value || self.optional || self.discrete)
    }
}
