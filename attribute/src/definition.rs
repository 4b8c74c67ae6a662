//! Item and attribute definitions.
//!
//! A `Definition` is the schema of one parameter container: an ordered list of
//! `ItemDefinition`s. Definitions are plain data; `Definition::create_parameters`
//! turns one into a live `Parameters` container.

use opkit_core::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{AttributeError, AttributeResult};
use crate::items::{ValueItem, VoidItem};
use crate::{Item, Parameters};

/// The storage type of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Double,
    Int,
    String,
    /// Carries no value; only meaningful when optional.
    Void,
}

impl ItemType {
    /// Returns true if items of this type hold values.
    pub fn is_value_bearing(&self) -> bool {
        !matches!(self, ItemType::Void)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ItemType::Double => "Double",
            ItemType::Int => "Int",
            ItemType::String => "String",
            ItemType::Void => "Void",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One legal value of a discrete item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscreteChoice {
    /// Human-readable label.
    pub label: String,
    /// Value stored when this choice is selected.
    pub value: Value,
}

impl DiscreteChoice {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

fn one() -> usize {
    1
}

/// Definition of a single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Item name; unique within its container.
    pub name: String,
    /// Storage type.
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Number of value slots.
    #[serde(default = "one")]
    pub number_of_values: usize,
    /// Whether the item can be enabled/disabled.
    #[serde(default)]
    pub optional: bool,
    /// Initial enabled state for optional items.
    #[serde(default)]
    pub enabled_by_default: bool,
    /// Default value for every slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Minimum value constraint (for Int, Double).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Value>,
    /// Maximum value constraint (for Int, Double).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Value>,
    /// Enumeration of legal values; empty for non-discrete items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discrete: Vec<DiscreteChoice>,
    /// Choice selected in every slot at creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_discrete_index: Option<usize>,
}

impl ItemDefinition {
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            name: name.into(),
            item_type,
            number_of_values: 1,
            optional: false,
            enabled_by_default: false,
            default: None,
            min: None,
            max: None,
            discrete: Vec::new(),
            default_discrete_index: None,
        }
    }

    pub fn double(name: impl Into<String>) -> Self {
        Self::new(name, ItemType::Double)
    }

    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, ItemType::Int)
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ItemType::String)
    }

    pub fn void(name: impl Into<String>) -> Self {
        Self::new(name, ItemType::Void)
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn enabled_by_default(mut self, enabled: bool) -> Self {
        self.enabled_by_default = enabled;
        self
    }

    pub fn with_number_of_values(mut self, count: usize) -> Self {
        self.number_of_values = count;
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn with_range(mut self, min: Option<Value>, max: Option<Value>) -> Self {
        // Merge rather than replace: only update if Some is provided
        if min.is_some() {
            self.min = min;
        }
        if max.is_some() {
            self.max = max;
        }
        self
    }

    pub fn with_choice(mut self, label: impl Into<String>, value: impl Into<Value>) -> Self {
        self.discrete.push(DiscreteChoice::new(label, value));
        self
    }

    pub fn with_default_discrete_index(mut self, choice: usize) -> Self {
        self.default_discrete_index = Some(choice);
        self
    }

    /// Returns true if the item selects among a fixed enumeration.
    pub fn is_discrete(&self) -> bool {
        self.item_type.is_value_bearing() && !self.discrete.is_empty()
    }

    /// Instantiate a live item for this definition.
    pub fn create_item(&self) -> AttributeResult<Box<dyn Item>> {
        if self.item_type.is_value_bearing() {
            Ok(Box::new(ValueItem::new(self.clone())?))
        } else {
            Ok(Box::new(VoidItem::new(self.clone())))
        }
    }
}

/// Schema of one parameter container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Definition {
    /// Container (attribute) type name.
    pub name: String,
    /// Ordered item definitions.
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
}

impl Definition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Append an item definition.
    pub fn item(mut self, item: ItemDefinition) -> Self {
        self.items.push(item);
        self
    }

    /// Parse a definition from JSON text.
    pub fn from_json(source: &str) -> AttributeResult<Self> {
        let definition: Definition = serde_json::from_str(source)?;
        definition.check_unique_names()?;
        Ok(definition)
    }

    /// Serialize this definition to pretty-printed JSON.
    pub fn to_json(&self) -> AttributeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get an item definition by name.
    pub fn get_item(&self, name: &str) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Build a live container holding one item per definition, in order.
    pub fn create_parameters(&self) -> AttributeResult<Parameters> {
        self.check_unique_names()?;
        let mut parameters = Parameters::new(self.name.clone());
        for item_def in &self.items {
            parameters.add_item(item_def.create_item()?)?;
        }
        Ok(parameters)
    }

    fn check_unique_names(&self) -> AttributeResult<()> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.name.as_str()) {
                return Err(AttributeError::duplicate_item_name(&self.name, &item.name));
            }
        }
        Ok(())
    }
}
