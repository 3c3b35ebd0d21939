use std::collections::HashMap;

use super::class::ClassDescriptor;
use super::types::TypeRef;

/// Read-only view over the reflected classes of one generation run.
///
/// Lookups for unknown names return `None`; a missing ancestor simply ends a
/// resolution walk.
#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    classes: HashMap<String, ClassDescriptor>,
}

impl TypeGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    /// Build a graph from descriptors. Later duplicates replace earlier ones.
    pub fn from_classes(classes: impl IntoIterator<Item = ClassDescriptor>) -> Self {
        let mut graph = Self::new();
        for class in classes {
            graph.register(class);
        }
        graph
    }

    /// Register a class descriptor.
    pub fn register(&mut self, class: ClassDescriptor) {
        if let Some(previous) = self.classes.insert(class.name.clone(), class) {
            tracing::warn!(class = %previous.name, "Class registered twice, keeping the later one");
        }
    }

    /// Get a descriptor by fully qualified name.
    pub fn descriptor_for(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(name)
    }

    /// Name of the declared parent class, if it is a class reference.
    pub fn parent_of<'a>(&self, class: &'a ClassDescriptor) -> Option<&'a str> {
        class.parent.as_ref().and_then(TypeRef::class_name)
    }

    /// Names of the declared interfaces, in declaration order.
    pub fn interfaces_of<'a>(&self, class: &'a ClassDescriptor) -> impl Iterator<Item = &'a str> {
        class.interfaces.iter().filter_map(TypeRef::class_name)
    }

    /// All registered class names.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(|s| s.as_str())
    }

    /// Get the number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
