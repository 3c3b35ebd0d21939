mod formatter;
mod writer;

pub use formatter::{NamespacedFormatter, TypeFormatter};
pub use writer::{remove_stale, write_atomic};

use std::path::PathBuf;

use declgen_core::config::DeclgenConfig;
use declgen_core::schema::Snapshot;
use declgen_core::DeclError;

use crate::emitter::{DeclarationEmitter, EmitOptions};
use crate::overrides::OverrideRegistry;
use crate::specials;

/// TypeScript declaration generator.
///
/// Generates the event declaration document, and the `Special` language key
/// document when the snapshot carries translations.
pub struct TypeScriptGenerator {
    /// Output directory for generated files.
    output_dir: PathBuf,

    config: DeclgenConfig,
}

impl TypeScriptGenerator {
    /// Create a new TypeScript generator.
    pub fn new(output_dir: impl Into<PathBuf>, config: DeclgenConfig) -> Self {
        Self {
            output_dir: output_dir.into(),
            config,
        }
    }

    /// Formatter configured for this generator's type namespace.
    pub fn formatter(&self) -> NamespacedFormatter {
        NamespacedFormatter::new(self.config.output.type_namespace.clone())
    }

    /// Build the override table for a run. Call once, before [`generate`].
    ///
    /// [`generate`]: TypeScriptGenerator::generate
    pub fn build_overrides(&self, snapshot: &Snapshot) -> OverrideRegistry {
        let mut overrides = OverrideRegistry::new();
        specials::register_specials(
            &mut overrides,
            snapshot,
            &self.config.specials,
            &self.formatter(),
            self.config.output.indent,
        );
        overrides
    }

    /// Generate all TypeScript artifacts.
    ///
    /// The event document is assembled completely before anything is
    /// written; an unresolved event class leaves existing output untouched.
    pub fn generate(
        &self,
        snapshot: &Snapshot,
        overrides: &OverrideRegistry,
    ) -> Result<GenerationReport, Error> {
        let graph = snapshot.type_graph();
        let formatter = self.formatter();
        let emitter = DeclarationEmitter::new(
            &graph,
            overrides,
            &formatter,
            EmitOptions::from(&self.config),
        );

        let document = emitter.emit_document(&snapshot.groups)?;
        let events_path = self.output_dir.join(&self.config.output.events_file);
        write_atomic(&events_path, &document)?;
        tracing::info!(path = %events_path.display(), "Generated event declarations");

        let lang_path = self.generate_lang(snapshot)?;

        let overridden = snapshot
            .groups
            .iter()
            .flat_map(|g| g.members().map(move |m| (g.name.as_str(), m.name.as_str())))
            .filter(|(group, member)| overrides.lookup(group, member).is_some())
            .count();

        Ok(GenerationReport {
            events_path,
            lang_path,
            groups: snapshot.groups.len(),
            members: snapshot.member_count(),
            overridden,
            classes: graph.len(),
        })
    }

    /// Write the language key document, or remove one left by an earlier run
    /// when this run produces none.
    fn generate_lang(&self, snapshot: &Snapshot) -> Result<Option<PathBuf>, Error> {
        let path = self.output_dir.join(&self.config.output.lang_file);

        let lines = if self.config.specials.enabled {
            let keys = specials::lang_keys(&snapshot.lang, &self.config.specials.language);
            specials::format_lang_keys(&keys, self.config.output.indent)
        } else {
            Vec::new()
        };

        if lines.is_empty() {
            if remove_stale(&path)? {
                tracing::info!(path = %path.display(), "Removed stale language keys");
            } else {
                tracing::debug!("No language data, skipping lang document");
            }
            return Ok(None);
        }

        write_atomic(&path, &specials::lang_document(&lines))?;
        tracing::info!(path = %path.display(), "Generated language keys");
        Ok(Some(path))
    }
}

/// Summary of one generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub events_path: PathBuf,
    pub lang_path: Option<PathBuf>,
    pub groups: usize,
    pub members: usize,
    pub overridden: usize,
    pub classes: usize,
}

/// Code generation error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unresolved event class `{class}` for {group}.{member}")]
    UnresolvedClass {
        group: String,
        member: String,
        class: String,
    },

    #[error(transparent)]
    Core(#[from] DeclError),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::fs;

    use declgen_core::schema::{
        ClassDescriptor, CommentFragment, EventGroup, ExtraSpec, MemberEntry, TypeRef,
    };

    fn snapshot() -> Snapshot {
        Snapshot {
            classes: vec![
                ClassDescriptor::new("dev.mods.ItemEvent")
                    .with_comment(CommentFragment::line("Item interactions."))
                    .with_extra(TypeRef::class("dev.mods.ItemId")),
                ClassDescriptor::new("dev.mods.RegistryEvent").with_type_parameter("T"),
            ],
            groups: vec![
                EventGroup::new("StartupEvents")
                    .with_member(MemberEntry::new("registry", "dev.mods.RegistryEvent")),
                EventGroup::new("ItemEvents").with_member(
                    MemberEntry::new("rightClicked", "dev.mods.ItemEvent")
                        .with_extra(ExtraSpec::Optional)
                        .with_context("server")
                        .with_context("client")
                        .cancellable(),
                ),
            ],
            registries: vec!["minecraft:item".to_string()],
            lang: BTreeMap::from([(
                "en_us".to_string(),
                BTreeMap::from([("item.apple".to_string(), "Apple".to_string())]),
            )]),
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_writes_documents() {
        let dir = tempfile::tempdir().unwrap();
        let generator = TypeScriptGenerator::new(dir.path(), DeclgenConfig::default());
        let snapshot = snapshot();
        let overrides = generator.build_overrides(&snapshot);

        let report = generator.generate(&snapshot, &overrides).unwrap();

        assert_eq!(report.groups, 2);
        assert_eq!(report.members, 2);
        assert_eq!(report.overridden, 1);
        assert_eq!(report.classes, 2);

        let events = fs::read_to_string(&report.events_path).unwrap();
        assert!(events.starts_with("/// <reference path=\"./globals.d.ts\" />\n"));
        assert!(events.contains(
            "    registry(type: \"minecraft:item\", handler: (event: Registry.Item) => void):void,"
        ));
        assert!(events.contains("     * @at *server, client*\n     * @cancellable\n"));
        assert!(events.contains(
            "    rightClicked(extra: Internal.ItemId, handler: (event: Internal.ItemEvent) => void):void,"
        ));
        assert!(events.contains(
            "    rightClicked(handler: (event: Internal.ItemEvent) => void):void,"
        ));

        let lang = fs::read_to_string(report.lang_path.unwrap()).unwrap();
        assert!(lang.contains("type LangKey = \"item.apple\""));
    }

    #[test]
    fn test_unresolved_class_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let events_path = dir.path().join("events.d.ts");
        fs::write(&events_path, "previous").unwrap();

        let mut snapshot = snapshot();
        snapshot.classes.retain(|c| c.name != "dev.mods.ItemEvent");

        let generator = TypeScriptGenerator::new(dir.path(), DeclgenConfig::default());
        let overrides = generator.build_overrides(&snapshot);
        let err = generator.generate(&snapshot, &overrides).unwrap_err();

        assert!(matches!(err, Error::UnresolvedClass { .. }));
        assert_eq!(
            err.to_string(),
            "Unresolved event class `dev.mods.ItemEvent` for ItemEvents.rightClicked"
        );
        assert_eq!(fs::read_to_string(&events_path).unwrap(), "previous");
    }

    #[test]
    fn test_run_without_lang_data_removes_old_lang_document() {
        let dir = tempfile::tempdir().unwrap();
        let generator = TypeScriptGenerator::new(dir.path(), DeclgenConfig::default());

        let first = snapshot();
        let overrides = generator.build_overrides(&first);
        let lang_path = generator
            .generate(&first, &overrides)
            .unwrap()
            .lang_path
            .unwrap();
        assert!(lang_path.exists());

        let mut second = snapshot();
        second.lang.clear();
        let overrides = generator.build_overrides(&second);
        let report = generator.generate(&second, &overrides).unwrap();

        assert!(report.lang_path.is_none());
        assert!(!lang_path.exists());
    }

    #[test]
    fn test_repeated_group_declared_once() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot: Snapshot = serde_json::from_str(
            r#"{
                "classes": [{"name": "a.TickEvent"}],
                "groups": [
                    {"name": "G", "members": [{"name": "a", "event_class": "a.TickEvent"}]},
                    {"name": "G", "members": [{"name": "b", "event_class": "a.TickEvent"}]}
                ]
            }"#,
        )
        .unwrap();
        let generator = TypeScriptGenerator::new(dir.path(), DeclgenConfig::default());
        let overrides = generator.build_overrides(&snapshot);

        let report = generator.generate(&snapshot, &overrides).unwrap();

        let events = fs::read_to_string(&report.events_path).unwrap();
        assert_eq!(events.matches("declare const G:").count(), 1);
        assert!(events.contains("    a(handler: (event: Internal.TickEvent) => void):void,"));
        assert!(events.contains("    b(handler: (event: Internal.TickEvent) => void):void,"));
    }

    #[test]
    fn test_disabled_specials_use_default_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = DeclgenConfig::default();
        config.specials.enabled = false;
        let generator = TypeScriptGenerator::new(dir.path(), config);
        let snapshot = snapshot();
        let overrides = generator.build_overrides(&snapshot);

        let report = generator.generate(&snapshot, &overrides).unwrap();

        assert_eq!(report.overridden, 0);
        assert!(report.lang_path.is_none());
        let events = fs::read_to_string(&report.events_path).unwrap();
        assert!(events.contains(
            "    registry(handler: (event: Internal.RegistryEvent<any>) => void):void,"
        ));
    }
}
