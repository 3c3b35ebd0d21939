//! Event groups and the members declared in them.

use serde::{Deserialize, Serialize};

/// Whether a member accepts an extra parameter before its handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraSpec {
    /// Only the handler is accepted.
    #[default]
    Absent,
    /// The extra parameter may be omitted.
    Optional,
    /// The extra parameter must be given.
    Required,
}

impl ExtraSpec {
    /// Whether an overload with the extra parameter is declared.
    pub fn has_extra(&self) -> bool {
        !matches!(self, ExtraSpec::Absent)
    }

    /// Whether an overload with only the handler is declared.
    pub fn allows_handler_only(&self) -> bool {
        !matches!(self, ExtraSpec::Required)
    }
}

/// One declarable member of a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberEntry {
    /// Member identifier.
    pub name: String,

    /// Class of the event passed to the handler.
    pub event_class: String,

    /// Extra parameter requirement.
    #[serde(default)]
    pub extra: ExtraSpec,

    /// Script contexts the handler may be registered from.
    #[serde(default)]
    pub valid_contexts: Vec<String>,

    /// Whether the handler result can cancel the event.
    #[serde(default)]
    pub cancellable: bool,
}

impl MemberEntry {
    /// Create a member with no extra parameter and no contexts.
    pub fn new(name: impl Into<String>, event_class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            event_class: event_class.into(),
            extra: ExtraSpec::Absent,
            valid_contexts: Vec::new(),
            cancellable: false,
        }
    }

    /// Set the extra parameter requirement.
    pub fn with_extra(mut self, extra: ExtraSpec) -> Self {
        self.extra = extra;
        self
    }

    /// Add a valid context.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.valid_contexts.push(context.into());
        self
    }

    /// Mark the member cancellable.
    pub fn cancellable(mut self) -> Self {
        self.cancellable = true;
        self
    }
}

/// A named namespace of members, iterated in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventGroup {
    /// Group identifier, emitted as the declared constant's name.
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_members")]
    members: Vec<MemberEntry>,
}

/// Later duplicates replace earlier ones, keeping the first position.
fn deserialize_members<'de, D>(deserializer: D) -> Result<Vec<MemberEntry>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Vec::<MemberEntry>::deserialize(deserializer)?;
    let mut group = EventGroup::new(String::new());
    for member in raw {
        group.insert(member);
    }
    Ok(group.members)
}

impl EventGroup {
    /// Create an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a member, replacing an existing one with the same name in place.
    pub fn insert(&mut self, member: MemberEntry) {
        match self.members.iter_mut().find(|m| m.name == member.name) {
            Some(existing) => *existing = member,
            None => self.members.push(member),
        }
    }

    /// Builder form of [`EventGroup::insert`].
    pub fn with_member(mut self, member: MemberEntry) -> Self {
        self.insert(member);
        self
    }

    /// Get a member by name.
    pub fn get(&self, name: &str) -> Option<&MemberEntry> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Members in insertion order.
    pub fn members(&self) -> impl Iterator<Item = &MemberEntry> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
