//! Configuration for API synthesis.

/// What to do when two items derive the same method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// The later item's binding replaces the earlier one.
    #[default]
    LastWriteWins,
    /// Abort synthesis with `SynthesisError::NameCollision`.
    FailFast,
}

/// Fixed verbs and suffixes used to build method names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingVerbs {
    /// Prefix for value and discrete setters.
    pub set: String,
    /// Prefix for the enable action of optional items.
    pub enable: String,
    /// Suffix for discrete accessors.
    pub index: String,
    /// Suffix for the enabled-state getter.
    pub enabled: String,
}

impl Default for NamingVerbs {
    fn default() -> Self {
        Self {
            set: "set".to_string(),
            enable: "enable".to_string(),
            index: "Index".to_string(),
            enabled: "Enabled".to_string(),
        }
    }
}

/// Options controlling one synthesis pass.
#[derive(Debug, Clone, Default)]
pub struct SynthesisOptions {
    pub collision: CollisionPolicy,
    pub verbs: NamingVerbs,
}

impl SynthesisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collision(mut self, policy: CollisionPolicy) -> Self {
        self.collision = policy;
        self
    }

    pub fn with_verbs(mut self, verbs: NamingVerbs) -> Self {
        self.verbs = verbs;
        self
    }

    /// Options that reject colliding method names.
    pub fn strict() -> Self {
        Self::default().with_collision(CollisionPolicy::FailFast)
    }
}
