//! The Parameters container - an ordered, name-addressable set of items.

use opkit_core::ContainerId;
use tracing::debug;

use crate::error::{AttributeError, AttributeResult};
use crate::Item;

/// An ordered collection of items with unique names.
///
/// `version` increases on every structural change (item added, removed or
/// replaced); value updates leave it untouched.
#[derive(Debug)]
pub struct Parameters {
    id: ContainerId,
    name: String,
    items: Vec<Box<dyn Item>>,
    version: u64,
}

impl Parameters {
    /// Create an empty container.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ContainerId::next(),
            name: name.into(),
            items: Vec::new(),
            version: 0,
        }
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn number_of_items(&self) -> usize {
        self.items.len()
    }

    /// Item at `position`.
    pub fn item(&self, position: usize) -> Option<&dyn Item> {
        self.items.get(position).map(|item| item.as_ref())
    }

    /// Item named `name`.
    pub fn find(&self, name: &str) -> Option<&dyn Item> {
        self.items
            .iter()
            .find(|item| item.name() == name)
            .map(|item| item.as_ref())
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut dyn Item> {
        for item in self.items.iter_mut() {
            if item.name() == name {
                return Some(item.as_mut());
            }
        }
        None
    }

    /// All item names, in order.
    pub fn item_names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name()).collect()
    }

    /// Append an item. Names must be unique.
    pub fn add_item(&mut self, item: Box<dyn Item>) -> AttributeResult<()> {
        if self.position(item.name()).is_some() {
            return Err(AttributeError::duplicate_item_name(&self.name, item.name()));
        }
        debug!(container = %self.id, item = item.name(), "add item");
        self.items.push(item);
        self.version += 1;
        Ok(())
    }

    /// Remove the item named `name`, returning it.
    pub fn remove_item(&mut self, name: &str) -> Option<Box<dyn Item>> {
        let position = self.position(name)?;
        debug!(container = %self.id, item = name, "remove item");
        self.version += 1;
        Some(self.items.remove(position))
    }

    /// Replace the item with the same name in place, or append it if absent.
    /// Returns the replaced item.
    pub fn replace_item(&mut self, item: Box<dyn Item>) -> Option<Box<dyn Item>> {
        self.version += 1;
        match self.position(item.name()) {
            Some(position) => Some(std::mem::replace(&mut self.items[position], item)),
            None => {
                self.items.push(item);
                None
            }
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }
}
