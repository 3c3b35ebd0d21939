mod logging;
mod output;
mod specials;

pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use specials::{SpecialKey, SpecialsConfig};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{DeclError, Result};

/// Root configuration for declgen, usually read from `declgen.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeclgenConfig {
    /// Project metadata.
    #[serde(default)]
    pub project: ProjectConfig,

    /// Where the snapshot is read from.
    #[serde(default)]
    pub snapshot: SnapshotConfig,

    /// Generated document layout.
    #[serde(default)]
    pub output: OutputConfig,

    /// Metadata resolution behaviour.
    #[serde(default)]
    pub resolution: ResolutionConfig,

    /// Built-in override providers.
    #[serde(default)]
    pub specials: SpecialsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DeclgenConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| DeclError::Config(format!("Failed to read config file: {}", e)))?;

        Self::parse_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let content = substitute_env_vars(content);

        let config: Self = toml::from_str(&content)
            .map_err(|e| DeclError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Render this configuration back to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| DeclError::Serialization(e.to_string()))
    }

    fn validate(&self) -> Result<()> {
        if self.output.events_file.trim().is_empty() {
            return Err(DeclError::Config(
                "output.events_file must not be empty".to_string(),
            ));
        }
        if self.resolution.fallback_extra_type.trim().is_empty() {
            return Err(DeclError::Config(
                "resolution.fallback_extra_type must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Project metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name, used in log output only.
    #[serde(default = "default_project_name")]
    pub name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_project_name(),
        }
    }
}

fn default_project_name() -> String {
    "declgen".to_string()
}

/// Snapshot source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// A snapshot JSON file or a directory of them.
    #[serde(default = "default_snapshot_path")]
    pub path: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: default_snapshot_path(),
        }
    }
}

fn default_snapshot_path() -> String {
    "snapshot".to_string()
}

/// Metadata resolution configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionConfig {
    /// Type used for an extra parameter when no ancestor declares one.
    #[serde(default = "default_fallback_extra_type")]
    pub fallback_extra_type: String,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            fallback_extra_type: default_fallback_extra_type(),
        }
    }
}

fn default_fallback_extra_type() -> String {
    "string".to_string()
}

static ENV_VAR_PATTERN: Lazy<regex_lite::Regex> =
    Lazy::new(|| regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap());

/// Substitute environment variables in the format ${VAR_NAME}.
fn substitute_env_vars(content: &str) -> String {
    let mut result = content.to_string();

    for cap in ENV_VAR_PATTERN.captures_iter(content) {
        let var_name = &cap[1];
        if let Ok(value) = std::env::var(var_name) {
            result = result.replace(&cap[0], &value);
        }
    }

    result
}
