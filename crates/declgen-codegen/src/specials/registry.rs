use declgen_core::schema::MemberEntry;

use crate::emitter::property_key;

/// One overload per registry key, each typed by that registry's builder.
#[derive(Debug, Clone)]
pub struct RegistryListing {
    keys: Vec<String>,
    indent: usize,
}

impl RegistryListing {
    pub fn new(keys: Vec<String>, indent: usize) -> Self {
        Self { keys, indent }
    }

    /// Declaration lines for `member`.
    pub fn lines(&self, member: &MemberEntry) -> Vec<String> {
        let pad = " ".repeat(self.indent);
        let key = property_key(&member.name);

        self.keys
            .iter()
            .map(|registry| {
                format!(
                    "{}{}(type: {}, handler: (event: Registry.{}) => void):void,",
                    pad,
                    key,
                    serde_json::Value::String(registry.clone()),
                    registry_type_name(registry)
                )
            })
            .collect()
    }
}

/// PascalCase type name for a registry key.
///
/// The `minecraft` namespace is dropped; other namespaces stay as a prefix.
/// `minecraft:worldgen/biome` becomes `WorldgenBiome`, `create:fluid_type`
/// becomes `CreateFluidType`.
pub fn registry_type_name(key: &str) -> String {
    let key = key.strip_prefix("minecraft:").unwrap_or(key);

    key.split(|c: char| c == ':' || c == '/' || c == '_' || c == '.' || c == '-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
