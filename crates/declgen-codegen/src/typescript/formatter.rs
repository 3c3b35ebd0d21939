use declgen_core::schema::{simple_class_name, TypeRef};

/// Renders semantic type references as TypeScript type text.
pub trait TypeFormatter {
    /// Render a type reference.
    fn format(&self, ty: &TypeRef) -> String;

    /// Render a class, filling each of its `arity` type parameters with `any`.
    fn format_class(&self, name: &str, arity: usize) -> String {
        self.format(&TypeRef::parameterized(name, vec![TypeRef::Any; arity]))
    }
}

/// Places reflected classes in one namespace (`Internal.ItemEvent`) and maps
/// well-known platform classes and primitives to TypeScript built-ins.
#[derive(Debug, Clone)]
pub struct NamespacedFormatter {
    namespace: String,
}

impl NamespacedFormatter {
    /// Create a formatter for a namespace. An empty namespace adds no prefix.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    fn format_class_ref(&self, name: &str, params: &[TypeRef]) -> String {
        if let Some(builtin) = builtin_class(name) {
            return builtin.to_string();
        }

        let simple = simple_class_name(name);
        let base = if self.namespace.is_empty() {
            simple.to_string()
        } else {
            format!("{}.{}", self.namespace, simple)
        };

        if params.is_empty() {
            base
        } else {
            let args: Vec<String> = params.iter().map(|p| self.format(p)).collect();
            format!("{}<{}>", base, args.join(", "))
        }
    }
}

impl Default for NamespacedFormatter {
    fn default() -> Self {
        Self::new("Internal")
    }
}

impl TypeFormatter for NamespacedFormatter {
    fn format(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Class { name, params } => self.format_class_ref(name, params),
            TypeRef::Primitive { name } => primitive(name).to_string(),
            TypeRef::Array { component } => {
                let inner = self.format(component);
                if matches!(**component, TypeRef::Union { .. }) {
                    format!("({})[]", inner)
                } else {
                    format!("{}[]", inner)
                }
            }
            TypeRef::Union { types } => {
                if types.is_empty() {
                    return "never".to_string();
                }
                let parts: Vec<String> = types.iter().map(|t| self.format(t)).collect();
                parts.join(" | ")
            }
            TypeRef::Literal { value } => value.to_string(),
            TypeRef::Variable { name } => name.clone(),
            TypeRef::Any => "any".to_string(),
        }
    }
}

fn builtin_class(name: &str) -> Option<&'static str> {
    match name {
        "java.lang.String" | "java.lang.CharSequence" | "java.lang.Character" => Some("string"),
        "java.lang.Integer" | "java.lang.Long" | "java.lang.Double" | "java.lang.Float"
        | "java.lang.Short" | "java.lang.Byte" | "java.lang.Number" => Some("number"),
        "java.lang.Boolean" => Some("boolean"),
        "java.lang.Void" => Some("void"),
        "java.lang.Object" => Some("any"),
        _ => None,
    }
}

fn primitive(name: &str) -> &'static str {
    match name {
        "int" | "long" | "double" | "float" | "short" | "byte" => "number",
        "boolean" => "boolean",
        "char" => "string",
        "void" => "void",
        _ => "any",
    }
}
