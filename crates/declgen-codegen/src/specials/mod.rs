//! Built-in member overrides and special type formatters.
//!
//! Some members cannot be described by a fixed event type: the registry
//! event takes one overload per registry key and the tag event one overload
//! per tagged registry. Both are registered as overrides before generation.

mod lang;
mod registry;
mod tags;

pub use lang::{format_lang_keys, lang_document, lang_keys};
pub use registry::{registry_type_name, RegistryListing};
pub use tags::TagListing;

use declgen_core::config::SpecialsConfig;
use declgen_core::schema::Snapshot;

use crate::overrides::OverrideRegistry;
use crate::typescript::NamespacedFormatter;

/// Register the registry and tag listings for `snapshot`.
pub fn register_specials(
    overrides: &mut OverrideRegistry,
    snapshot: &Snapshot,
    config: &SpecialsConfig,
    formatter: &NamespacedFormatter,
    indent: usize,
) {
    if !config.enabled {
        tracing::debug!("Built-in overrides disabled");
        return;
    }

    let listing = RegistryListing::new(snapshot.registries.clone(), indent);
    overrides.register(
        config.registry.group.clone(),
        config.registry.member.clone(),
        move |member| listing.lines(member),
    );

    let tags = TagListing::new(snapshot.tags.clone(), formatter.clone(), indent);
    overrides.register(
        config.tags.group.clone(),
        config.tags.member.clone(),
        move |member| tags.lines(member),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use declgen_core::config::SpecialKey;
    use declgen_core::schema::MemberEntry;

    #[test]
    fn test_register_specials_default_keys() {
        let snapshot = Snapshot {
            registries: vec!["minecraft:block".to_string()],
            ..Default::default()
        };
        let mut overrides = OverrideRegistry::new();
        register_specials(
            &mut overrides,
            &snapshot,
            &SpecialsConfig::default(),
            &NamespacedFormatter::default(),
            4,
        );

        assert_eq!(overrides.len(), 2);
        let generator = overrides.lookup("StartupEvents", "registry").unwrap();
        let lines = generator(&MemberEntry::new("registry", "a.RegistryEvent"));
        assert_eq!(
            lines,
            vec!["    registry(type: \"minecraft:block\", handler: (event: Registry.Block) => void):void,"]
        );
        assert!(overrides.lookup("ServerEvents", "tags").is_some());
    }

    #[test]
    fn test_register_specials_custom_keys() {
        let config = SpecialsConfig {
            registry: SpecialKey::new("Startup", "registries"),
            tags: SpecialKey::new("Server", "tagging"),
            ..Default::default()
        };
        let mut overrides = OverrideRegistry::new();
        register_specials(
            &mut overrides,
            &Snapshot::default(),
            &config,
            &NamespacedFormatter::default(),
            4,
        );

        assert!(overrides.lookup("Startup", "registries").is_some());
        assert!(overrides.lookup("Server", "tagging").is_some());
        assert!(overrides.lookup("StartupEvents", "registry").is_none());
    }

    #[test]
    fn test_disabled_registers_nothing() {
        let config = SpecialsConfig {
            enabled: false,
            ..Default::default()
        };
        let mut overrides = OverrideRegistry::new();
        register_specials(
            &mut overrides,
            &Snapshot::default(),
            &config,
            &NamespacedFormatter::default(),
            4,
        );

        assert!(overrides.is_empty());
    }
}
