//! The host's exported state for one generation run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::class::ClassDescriptor;
use super::event::EventGroup;
use super::registry::TypeGraph;

/// Reflected classes, event groups, and the listings used by the built-in
/// overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub classes: Vec<ClassDescriptor>,

    /// Groups keyed by name. Same-name entries are merged on load.
    #[serde(default, deserialize_with = "deserialize_groups")]
    pub groups: Vec<EventGroup>,

    /// Registry keys such as `minecraft:block`, in host order.
    #[serde(default)]
    pub registries: Vec<String>,

    /// Tag names per registry key.
    #[serde(default)]
    pub tags: BTreeMap<String, Vec<String>>,

    /// Language code to translation key to text.
    #[serde(default)]
    pub lang: BTreeMap<String, BTreeMap<String, String>>,
}

fn deserialize_groups<'de, D>(deserializer: D) -> Result<Vec<EventGroup>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Vec::<EventGroup>::deserialize(deserializer)?;
    let mut groups = Vec::with_capacity(raw.len());
    for group in raw {
        merge_group(&mut groups, group);
    }
    Ok(groups)
}

/// Fold `group` into the group of the same name, or append it.
fn merge_group(groups: &mut Vec<EventGroup>, group: EventGroup) {
    match groups.iter_mut().find(|g| g.name == group.name) {
        Some(existing) => {
            for member in group.members() {
                existing.insert(member.clone());
            }
        }
        None => groups.push(group),
    }
}

impl Snapshot {
    /// Append another snapshot's contents.
    ///
    /// Groups with the same name are merged member by member.
    pub fn extend(&mut self, other: Snapshot) {
        self.classes.extend(other.classes);

        for group in other.groups {
            merge_group(&mut self.groups, group);
        }

        for registry in other.registries {
            if !self.registries.contains(&registry) {
                self.registries.push(registry);
            }
        }

        for (registry, tags) in other.tags {
            self.tags.entry(registry).or_default().extend(tags);
        }

        for (language, entries) in other.lang {
            self.lang.entry(language).or_default().extend(entries);
        }
    }

    /// Build the type graph for this snapshot.
    pub fn type_graph(&self) -> TypeGraph {
        TypeGraph::from_classes(self.classes.iter().cloned())
    }

    /// Total number of members across all groups.
    pub fn member_count(&self) -> usize {
        self.groups.iter().map(EventGroup::len).sum()
    }
}
