//! Concrete item kinds.
//!
//! - `ValueItem` holds typed values; it is optional and/or discrete when its
//!   definition says so.
//! - `VoidItem` holds nothing; it exists to be switched on or off.

use opkit_core::Value;
use tracing::trace;

use crate::error::{AttributeError, AttributeResult};
use crate::item::{Discrete, Item, Optional, ValueBearing};
use crate::validation;
use crate::ItemDefinition;

/// An item holding one or more Double, Int or String values.
#[derive(Debug, Clone)]
pub struct ValueItem {
    definition: ItemDefinition,
    /// Discrete values, coerced to the item type.
    choices: Vec<Value>,
    values: Vec<Value>,
    enabled: bool,
}

impl ValueItem {
    pub fn new(definition: ItemDefinition) -> AttributeResult<Self> {
        let name = definition.name.as_str();
        let item_type = definition.item_type;
        if !item_type.is_value_bearing() {
            return Err(AttributeError::not_value_bearing(name, item_type.name()));
        }

        let choices = definition
            .discrete
            .iter()
            .map(|choice| validation::coerce_value(name, item_type, choice.value.clone()))
            .collect::<AttributeResult<Vec<_>>>()?;

        let initial = match definition.default_discrete_index {
            Some(choice) => choices.get(choice).cloned().ok_or_else(|| {
                AttributeError::discrete_index_out_of_range(name, choice, choices.len())
            })?,
            None => match &definition.default {
                Some(value) => validation::coerce_value(name, item_type, value.clone())?,
                None => Value::Null,
            },
        };

        Ok(Self {
            values: vec![initial; definition.number_of_values],
            enabled: definition.enabled_by_default,
            choices,
            definition,
        })
    }

    fn check_index(&self, index: usize) -> AttributeResult<()> {
        if index >= self.values.len() {
            return Err(AttributeError::index_out_of_range(
                &self.definition.name,
                index,
                self.values.len(),
            ));
        }
        Ok(())
    }
}

impl Item for ValueItem {
    fn name(&self) -> &str {
        &self.definition.name
    }

    fn definition(&self) -> &ItemDefinition {
        &self.definition
    }

    fn as_value(&self) -> Option<&dyn ValueBearing> {
        Some(self)
    }

    fn as_value_mut(&mut self) -> Option<&mut dyn ValueBearing> {
        Some(self)
    }

    fn as_optional(&self) -> Option<&dyn Optional> {
        if self.definition.optional {
            Some(self)
        } else {
            None
        }
    }

    fn as_optional_mut(&mut self) -> Option<&mut dyn Optional> {
        if self.definition.optional {
            Some(self)
        } else {
            None
        }
    }

    fn as_discrete(&self) -> Option<&dyn Discrete> {
        if self.choices.is_empty() {
            None
        } else {
            Some(self)
        }
    }

    fn as_discrete_mut(&mut self) -> Option<&mut dyn Discrete> {
        if self.choices.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl ValueBearing for ValueItem {
    fn number_of_values(&self) -> usize {
        self.values.len()
    }

    fn value(&self, index: usize) -> AttributeResult<Value> {
        self.check_index(index)?;
        Ok(self.values[index].clone())
    }

    fn set_value(&mut self, index: usize, value: Value) -> AttributeResult<()> {
        self.check_index(index)?;
        let def = &self.definition;
        let value = validation::coerce_value(&def.name, def.item_type, value)?;
        validation::validate_range(&def.name, &value, &def.min, &def.max)?;
        if !self.choices.is_empty() && !value.is_null() && !self.choices.contains(&value) {
            return Err(AttributeError::not_a_discrete_value(
                &def.name,
                value.to_string(),
            ));
        }

        trace!(item = %def.name, index, value = %value, "set value");
        self.values[index] = value;
        Ok(())
    }
}

impl Optional for ValueItem {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_is_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl Discrete for ValueItem {
    fn number_of_discrete_values(&self) -> usize {
        self.choices.len()
    }

    fn discrete_label(&self, choice: usize) -> Option<&str> {
        self.definition
            .discrete
            .get(choice)
            .map(|c| c.label.as_str())
    }

    fn discrete_index(&self, index: usize) -> AttributeResult<Option<usize>> {
        self.check_index(index)?;
        let current = &self.values[index];
        if current.is_null() {
            return Ok(None);
        }
        Ok(self.choices.iter().position(|choice| choice == current))
    }

    fn set_discrete_index(&mut self, index: usize, choice: usize) -> AttributeResult<()> {
        self.check_index(index)?;
        let value = self.choices.get(choice).cloned().ok_or_else(|| {
            AttributeError::discrete_index_out_of_range(
                &self.definition.name,
                choice,
                self.choices.len(),
            )
        })?;

        trace!(item = %self.definition.name, index, choice, "set discrete index");
        self.values[index] = value;
        Ok(())
    }
}

/// An item without values.
#[derive(Debug, Clone)]
pub struct VoidItem {
    definition: ItemDefinition,
    enabled: bool,
}

impl VoidItem {
    pub fn new(definition: ItemDefinition) -> Self {
        Self {
            enabled: definition.enabled_by_default,
            definition,
        }
    }
}

impl Item for VoidItem {
    fn name(&self) -> &str {
        &self.definition.name
    }

    fn definition(&self) -> &ItemDefinition {
        &self.definition
    }

    fn as_optional(&self) -> Option<&dyn Optional> {
        if self.definition.optional {
            Some(self)
        } else {
            None
        }
    }

    fn as_optional_mut(&mut self) -> Option<&mut dyn Optional> {
        if self.definition.optional {
            Some(self)
        } else {
            None
        }
    }
}

impl Optional for VoidItem {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_is_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
