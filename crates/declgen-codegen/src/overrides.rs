use std::collections::HashMap;
use std::sync::Arc;

use declgen_core::schema::MemberEntry;

/// Generator that replaces default emission for one member.
pub type OverrideFn = Arc<dyn Fn(&MemberEntry) -> Vec<String> + Send + Sync>;

/// Identity of an overridden member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverrideKey {
    pub group: String,
    pub member: String,
}

impl OverrideKey {
    pub fn new(group: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            member: member.into(),
        }
    }
}

impl std::fmt::Display for OverrideKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.group, self.member)
    }
}

/// Table of member overrides.
///
/// Populated during start-up, then handed to the emitter by shared reference
/// for the rest of the run.
#[derive(Clone, Default)]
pub struct OverrideRegistry {
    overrides: HashMap<OverrideKey, OverrideFn>,
}

impl OverrideRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    /// Register a generator for a (group, member) pair.
    pub fn register<F>(&mut self, group: impl Into<String>, member: impl Into<String>, generator: F)
    where
        F: Fn(&MemberEntry) -> Vec<String> + Send + Sync + 'static,
    {
        let key = OverrideKey::new(group, member);
        tracing::debug!(key = %key, "Registered member override");
        if self.overrides.insert(key.clone(), Arc::new(generator)).is_some() {
            tracing::warn!(key = %key, "Member override replaced an earlier registration");
        }
    }

    /// Get the generator for a (group, member) pair.
    pub fn lookup(&self, group: &str, member: &str) -> Option<&OverrideFn> {
        self.overrides.get(&OverrideKey::new(group, member))
    }

    /// All registered keys.
    pub fn keys(&self) -> impl Iterator<Item = &OverrideKey> {
        self.overrides.keys()
    }

    /// Get the number of registered overrides.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl std::fmt::Debug for OverrideRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverrideRegistry")
            .field("keys", &self.overrides.keys().collect::<Vec<_>>())
            .finish()
    }
}
