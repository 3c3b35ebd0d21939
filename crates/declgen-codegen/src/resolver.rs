//! Metadata resolution over the class hierarchy.
//!
//! Walks are depth-first: the class itself, then its parent's subtree, then
//! each interface's subtree in declaration order. Every walk tracks the class
//! names it has visited, so a malformed cyclic hierarchy ends the branch
//! instead of looping.

use std::collections::HashSet;

use declgen_core::schema::{Metadata, MetadataKind, TypeGraph};

/// Finds metadata attached to a class or its ancestors.
pub trait PropertyResolver {
    /// Nearest fragment of `kind`, first match wins.
    fn find_property<'g>(
        &self,
        graph: &'g TypeGraph,
        start: &str,
        kind: MetadataKind,
    ) -> Option<&'g Metadata>;

    /// Every fragment of `kind` in walk order, each class contributing once.
    fn collect_property<'g>(
        &self,
        graph: &'g TypeGraph,
        start: &str,
        kind: MetadataKind,
    ) -> Vec<&'g Metadata>;
}

/// The default resolver: parent before interfaces, interfaces in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstResolver;

impl PropertyResolver for DepthFirstResolver {
    fn find_property<'g>(
        &self,
        graph: &'g TypeGraph,
        start: &str,
        kind: MetadataKind,
    ) -> Option<&'g Metadata> {
        let mut visited = HashSet::new();
        find_in(graph, start, kind, &mut visited)
    }

    fn collect_property<'g>(
        &self,
        graph: &'g TypeGraph,
        start: &str,
        kind: MetadataKind,
    ) -> Vec<&'g Metadata> {
        let mut visited = HashSet::new();
        let mut found = Vec::new();
        collect_in(graph, start, kind, &mut visited, &mut found);
        found
    }
}

fn find_in<'g>(
    graph: &'g TypeGraph,
    name: &str,
    kind: MetadataKind,
    visited: &mut HashSet<&'g str>,
) -> Option<&'g Metadata> {
    let class = graph.descriptor_for(name)?;
    if !visited.insert(class.name.as_str()) {
        tracing::trace!(class = %class.name, "Cycle in class hierarchy, skipping branch");
        return None;
    }

    if let Some(own) = class.find_own(kind) {
        return Some(own);
    }

    if let Some(parent) = graph.parent_of(class) {
        if let Some(found) = find_in(graph, parent, kind, visited) {
            return Some(found);
        }
    }

    for interface in graph.interfaces_of(class) {
        if let Some(found) = find_in(graph, interface, kind, visited) {
            return Some(found);
        }
    }

    None
}

fn collect_in<'g>(
    graph: &'g TypeGraph,
    name: &str,
    kind: MetadataKind,
    visited: &mut HashSet<&'g str>,
    found: &mut Vec<&'g Metadata>,
) {
    let Some(class) = graph.descriptor_for(name) else {
        return;
    };
    if !visited.insert(class.name.as_str()) {
        return;
    }

    found.extend(class.own_of_kind(kind));

    if let Some(parent) = graph.parent_of(class) {
        collect_in(graph, parent, kind, visited, found);
    }
    for interface in graph.interfaces_of(class) {
        collect_in(graph, interface, kind, visited, found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use declgen_core::schema::{ClassDescriptor, CommentFragment, TypeRef};

    fn extra(name: &str) -> TypeRef {
        TypeRef::class(name)
    }

    fn found_extra<'g>(graph: &'g TypeGraph, start: &str) -> Option<&'g TypeRef> {
        DepthFirstResolver
            .find_property(graph, start, MetadataKind::Extra)
            .and_then(Metadata::as_extra)
    }

    #[test]
    fn test_absent_without_ancestors() {
        let graph = TypeGraph::from_classes([
            ClassDescriptor::new("a.Event").with_parent("a.Base"),
            ClassDescriptor::new("a.Base").with_comment(CommentFragment::line("doc")),
        ]);

        assert!(found_extra(&graph, "a.Event").is_none());
    }

    #[test]
    fn test_unknown_start_is_absent() {
        let graph = TypeGraph::new();
        assert!(found_extra(&graph, "a.Missing").is_none());
        assert!(DepthFirstResolver
            .collect_property(&graph, "a.Missing", MetadataKind::Comment)
            .is_empty());
    }

    #[test]
    fn test_self_takes_priority() {
        let graph = TypeGraph::from_classes([
            ClassDescriptor::new("a.Event")
                .with_parent("a.Base")
                .with_extra(extra("a.Own")),
            ClassDescriptor::new("a.Base").with_extra(extra("a.Inherited")),
        ]);

        assert_eq!(found_extra(&graph, "a.Event"), Some(&extra("a.Own")));
    }

    #[test]
    fn test_parent_beats_interface() {
        let graph = TypeGraph::from_classes([
            ClassDescriptor::new("a.Event")
                .with_parent("a.Parent")
                .with_interface("a.Iface"),
            ClassDescriptor::new("a.Parent").with_extra(extra("a.FromParent")),
            ClassDescriptor::new("a.Iface").with_extra(extra("a.FromIface")),
        ]);

        assert_eq!(found_extra(&graph, "a.Event"), Some(&extra("a.FromParent")));
    }

    #[test]
    fn test_later_interface_found_after_first_subtree() {
        let graph = TypeGraph::from_classes([
            ClassDescriptor::new("a.Event")
                .with_parent("a.Parent")
                .with_interface("a.First")
                .with_interface("a.Second"),
            ClassDescriptor::new("a.Parent"),
            ClassDescriptor::new("a.First").with_interface("a.FirstSuper"),
            ClassDescriptor::new("a.FirstSuper"),
            ClassDescriptor::new("a.Second").with_extra(extra("a.FromSecond")),
        ]);

        assert_eq!(found_extra(&graph, "a.Event"), Some(&extra("a.FromSecond")));
    }

    #[test]
    fn test_grandparent_found_through_parent() {
        let graph = TypeGraph::from_classes([
            ClassDescriptor::new("a.Event").with_parent("a.Parent"),
            ClassDescriptor::new("a.Parent").with_parent("a.Grand"),
            ClassDescriptor::new("a.Grand").with_extra(extra("a.FromGrand")),
        ]);

        assert_eq!(found_extra(&graph, "a.Event"), Some(&extra("a.FromGrand")));
    }

    #[test]
    fn test_unresolvable_parent_ends_branch() {
        let graph = TypeGraph::from_classes([
            ClassDescriptor::new("a.Event")
                .with_parent("a.NotExported")
                .with_interface("a.Iface"),
            ClassDescriptor::new("a.Iface").with_extra(extra("a.FromIface")),
        ]);

        assert_eq!(found_extra(&graph, "a.Event"), Some(&extra("a.FromIface")));
    }

    #[test]
    fn test_three_class_cycle_terminates() {
        let graph = TypeGraph::from_classes([
            ClassDescriptor::new("a.A").with_parent("a.B"),
            ClassDescriptor::new("a.B").with_parent("a.C"),
            ClassDescriptor::new("a.C").with_parent("a.A"),
        ]);

        assert!(found_extra(&graph, "a.A").is_none());
        assert!(DepthFirstResolver
            .collect_property(&graph, "a.A", MetadataKind::Comment)
            .is_empty());
    }

    #[test]
    fn test_cycle_does_not_hide_interface_match() {
        let graph = TypeGraph::from_classes([
            ClassDescriptor::new("a.A")
                .with_parent("a.B")
                .with_interface("a.Iface"),
            ClassDescriptor::new("a.B").with_parent("a.A"),
            ClassDescriptor::new("a.Iface").with_extra(extra("a.FromIface")),
        ]);

        assert_eq!(found_extra(&graph, "a.A"), Some(&extra("a.FromIface")));
    }

    #[test]
    fn test_collect_orders_self_parent_interfaces() {
        let graph = TypeGraph::from_classes([
            ClassDescriptor::new("a.Event")
                .with_parent("a.Parent")
                .with_interface("a.Iface")
                .with_comment(CommentFragment::line("own")),
            ClassDescriptor::new("a.Parent")
                .with_interface("a.Iface")
                .with_comment(CommentFragment::line("parent")),
            ClassDescriptor::new("a.Iface").with_comment(CommentFragment::line("iface")),
        ]);

        let lines: Vec<_> = DepthFirstResolver
            .collect_property(&graph, "a.Event", MetadataKind::Comment)
            .into_iter()
            .filter_map(Metadata::as_comment)
            .flat_map(|c| c.lines().iter().cloned())
            .collect();

        // a.Iface is reached through a.Parent first and contributes once.
        assert_eq!(lines, vec!["own", "parent", "iface"]);
    }
}
