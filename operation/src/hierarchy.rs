//! Type hierarchy keyed by type name.

use std::collections::{HashMap, HashSet};

/// Direct base relationships plus transitive subtype queries.
#[derive(Debug, Clone, Default)]
pub struct TypeHierarchy {
    /// For each type, its direct bases.
    bases: HashMap<String, Vec<String>>,
}

impl TypeHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` with its direct `bases`. Later declarations add bases.
    pub fn declare<I, S>(&mut self, name: impl Into<String>, bases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.bases.entry(name.into()).or_default();
        for base in bases {
            let base = base.into();
            if !entry.contains(&base) {
                entry.push(base);
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bases.contains_key(name)
    }

    /// Merge every declaration of `other` into this hierarchy.
    pub fn extend(&mut self, other: &TypeHierarchy) {
        for (name, bases) in &other.bases {
            self.declare(name.clone(), bases.iter().cloned());
        }
    }

    /// All supertypes of `name` (transitive, not including itself).
    pub fn supertypes(&self, name: &str) -> HashSet<&str> {
        let mut seen = HashSet::new();
        let mut pending: Vec<&str> = self.direct_bases(name).collect();
        while let Some(base) = pending.pop() {
            if seen.insert(base) {
                pending.extend(self.direct_bases(base));
            }
        }
        seen
    }

    /// Check if `sub` is `super_type` or derives from it.
    pub fn is_subtype(&self, sub: &str, super_type: &str) -> bool {
        if sub == super_type {
            return true;
        }
        self.supertypes(sub).contains(super_type)
    }

    fn direct_bases<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.bases
            .get(name)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}
