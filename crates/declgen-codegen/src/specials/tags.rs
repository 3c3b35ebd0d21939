use std::collections::{BTreeMap, HashSet};

use declgen_core::schema::MemberEntry;

use crate::emitter::property_key;
use crate::typescript::{NamespacedFormatter, TypeFormatter};

/// One overload per tagged registry, typing the event by the registry's tag
/// names.
#[derive(Debug, Clone)]
pub struct TagListing {
    tags: BTreeMap<String, Vec<String>>,
    formatter: NamespacedFormatter,
    indent: usize,
}

impl TagListing {
    pub fn new(
        tags: BTreeMap<String, Vec<String>>,
        formatter: NamespacedFormatter,
        indent: usize,
    ) -> Self {
        Self {
            tags,
            formatter,
            indent,
        }
    }

    /// Declaration lines for `member`.
    pub fn lines(&self, member: &MemberEntry) -> Vec<String> {
        let pad = " ".repeat(self.indent);
        let key = property_key(&member.name);
        let event = self.formatter.format_class(&member.event_class, 0);

        self.tags
            .iter()
            .filter(|(_, names)| !names.is_empty())
            .map(|(registry, names)| {
                format!(
                    "{}{}(extra: {}, handler: (event: {}<{}>) => void):void,",
                    pad,
                    key,
                    serde_json::Value::String(registry.clone()),
                    event,
                    tag_union(names)
                )
            })
            .collect()
    }
}

fn tag_union(names: &[String]) -> String {
    let mut seen = HashSet::new();
    names
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .map(|name| serde_json::Value::String(name.clone()).to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_overload_per_tagged_registry() {
        let mut tags = BTreeMap::new();
        tags.insert(
            "minecraft:item".to_string(),
            vec!["minecraft:logs".to_string(), "minecraft:planks".to_string()],
        );
        tags.insert("minecraft:fluid".to_string(), Vec::new());
        tags.insert(
            "minecraft:block".to_string(),
            vec!["minecraft:logs".to_string(), "minecraft:logs".to_string()],
        );

        let listing = TagListing::new(tags, NamespacedFormatter::default(), 4);
        let lines = listing.lines(&MemberEntry::new("tags", "dev.mods.TagEvent"));

        assert_eq!(
            lines,
            vec![
                "    tags(extra: \"minecraft:block\", handler: (event: Internal.TagEvent<\"minecraft:logs\">) => void):void,",
                "    tags(extra: \"minecraft:item\", handler: (event: Internal.TagEvent<\"minecraft:logs\" | \"minecraft:planks\">) => void):void,",
            ]
        );
    }
}
