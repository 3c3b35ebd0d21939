use serde::{Deserialize, Serialize};

/// Built-in override provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialsConfig {
    /// Register the built-in overrides.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Member replaced by the registry listing.
    #[serde(default = "default_registry_key")]
    pub registry: SpecialKey,

    /// Member replaced by the tag listing.
    #[serde(default = "default_tags_key")]
    pub tags: SpecialKey,

    /// Language whose keys are merged over `en_us` for `LangKey`.
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for SpecialsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            registry: default_registry_key(),
            tags: default_tags_key(),
            language: default_language(),
        }
    }
}

/// A (group, member) pair addressed by an override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialKey {
    pub group: String,
    pub member: String,
}

impl SpecialKey {
    pub fn new(group: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            member: member.into(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_registry_key() -> SpecialKey {
    SpecialKey::new("StartupEvents", "registry")
}

fn default_tags_key() -> SpecialKey {
    SpecialKey::new("ServerEvents", "tags")
}

fn default_language() -> String {
    "en_us".to_string()
}
