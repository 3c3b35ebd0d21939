use serde::{Deserialize, Serialize};

/// Semantic type reference as exported by the host's reflection layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    /// A reflected class, optionally parameterised.
    Class {
        name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        params: Vec<TypeRef>,
    },
    /// A primitive such as `int` or `boolean`.
    Primitive { name: String },
    /// Array of another type.
    Array { component: Box<TypeRef> },
    /// Union of several types.
    Union { types: Vec<TypeRef> },
    /// A literal value (string, number, boolean).
    Literal { value: serde_json::Value },
    /// A type variable such as `T`.
    Variable { name: String },
    /// Unknown or erased type.
    Any,
}

impl TypeRef {
    /// Reference a class by name.
    pub fn class(name: impl Into<String>) -> Self {
        TypeRef::Class {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Reference a parameterised class.
    pub fn parameterized(name: impl Into<String>, params: Vec<TypeRef>) -> Self {
        TypeRef::Class {
            name: name.into(),
            params,
        }
    }

    /// Reference a primitive.
    pub fn primitive(name: impl Into<String>) -> Self {
        TypeRef::Primitive { name: name.into() }
    }

    /// A string literal type.
    pub fn string_literal(value: impl Into<String>) -> Self {
        TypeRef::Literal {
            value: serde_json::Value::String(value.into()),
        }
    }

    /// The raw class name this reference points at, if it points at a class.
    ///
    /// Only class references take part in ancestry walks.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            TypeRef::Class { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// Short class name: package stripped, nested classes joined with `$`.
pub fn simple_class_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}
