//! Reflected class descriptors and the metadata attached to them.

use serde::{Deserialize, Serialize};

use super::comment::CommentFragment;
use super::types::TypeRef;

/// Kind of metadata a descriptor can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    /// Documentation comment.
    Comment,
    /// Type of an event's extra parameter.
    Extra,
}

impl MetadataKind {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataKind::Comment => "comment",
            MetadataKind::Extra => "extra",
        }
    }
}

impl std::fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MetadataKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "comment" => Ok(MetadataKind::Comment),
            "extra" => Ok(MetadataKind::Extra),
            other => Err(format!("unknown metadata kind: {}", other)),
        }
    }
}

/// A metadata fragment attached to a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Metadata {
    Comment(CommentFragment),
    Extra {
        #[serde(rename = "type")]
        ty: TypeRef,
    },
}

impl Metadata {
    pub fn kind(&self) -> MetadataKind {
        match self {
            Metadata::Comment(_) => MetadataKind::Comment,
            Metadata::Extra { .. } => MetadataKind::Extra,
        }
    }

    pub fn as_comment(&self) -> Option<&CommentFragment> {
        match self {
            Metadata::Comment(fragment) => Some(fragment),
            _ => None,
        }
    }

    pub fn as_extra(&self) -> Option<&TypeRef> {
        match self {
            Metadata::Extra { ty } => Some(ty),
            _ => None,
        }
    }
}

/// Immutable snapshot of one reflected class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Fully qualified name.
    pub name: String,

    /// Declared superclass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<TypeRef>,

    /// Implemented interfaces in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<TypeRef>,

    /// Declared type parameter names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<String>,

    /// Metadata attached directly to this class.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<Metadata>,
}

impl ClassDescriptor {
    /// Create a descriptor with no ancestry and no metadata.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            interfaces: Vec::new(),
            type_parameters: Vec::new(),
            metadata: Vec::new(),
        }
    }

    /// Set the parent class.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(TypeRef::class(parent));
        self
    }

    /// Add an implemented interface.
    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(TypeRef::class(interface));
        self
    }

    /// Add a type parameter.
    pub fn with_type_parameter(mut self, name: impl Into<String>) -> Self {
        self.type_parameters.push(name.into());
        self
    }

    /// Attach a metadata fragment.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata.push(metadata);
        self
    }

    /// Attach a documentation comment.
    pub fn with_comment(self, fragment: CommentFragment) -> Self {
        self.with_metadata(Metadata::Comment(fragment))
    }

    /// Attach an extra parameter type.
    pub fn with_extra(self, ty: TypeRef) -> Self {
        self.with_metadata(Metadata::Extra { ty })
    }

    /// First fragment of `kind` declared directly on this class.
    pub fn find_own(&self, kind: MetadataKind) -> Option<&Metadata> {
        self.metadata.iter().find(|m| m.kind() == kind)
    }

    /// All fragments of `kind` declared directly on this class.
    pub fn own_of_kind(&self, kind: MetadataKind) -> impl Iterator<Item = &Metadata> {
        self.metadata.iter().filter(move |m| m.kind() == kind)
    }
}
