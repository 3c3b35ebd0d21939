//! Event declaration emission.
//!
//! Each group becomes one `declare const` whose object type lists a call
//! signature per member overload. A registered override replaces a member's
//! output wholesale; every other member goes through the default path:
//! merged class documentation, `@at` / `@cancellable` annotations, then one
//! or two call signatures depending on the member's extra parameter.

use declgen_core::config::DeclgenConfig;
use declgen_core::schema::{
    ClassDescriptor, CommentFragment, EventGroup, MemberEntry, Metadata, MetadataKind, TypeGraph,
};

use crate::comment::{BlockCommentMerger, CommentMerger};
use crate::overrides::OverrideRegistry;
use crate::resolver::{DepthFirstResolver, PropertyResolver};
use crate::typescript::TypeFormatter;
use crate::Error;

/// Layout options for emitted documents.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Indent width for members inside a group.
    pub indent: usize,
    /// Paths emitted as `/// <reference path="..." />` directives.
    pub references: Vec<String>,
    /// Extra parameter type used when no ancestor declares one.
    pub fallback_extra_type: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            references: vec!["./globals.d.ts".to_string(), "./registries.d.ts".to_string()],
            fallback_extra_type: "string".to_string(),
        }
    }
}

impl From<&DeclgenConfig> for EmitOptions {
    fn from(config: &DeclgenConfig) -> Self {
        Self {
            indent: config.output.indent,
            references: config.output.references.clone(),
            fallback_extra_type: config.resolution.fallback_extra_type.clone(),
        }
    }
}

/// Turns event groups into declaration text.
pub struct DeclarationEmitter<'a> {
    graph: &'a TypeGraph,
    overrides: &'a OverrideRegistry,
    formatter: &'a dyn TypeFormatter,
    resolver: &'a dyn PropertyResolver,
    merger: &'a dyn CommentMerger,
    options: EmitOptions,
}

impl<'a> DeclarationEmitter<'a> {
    /// Create an emitter with the default resolver and comment merger.
    pub fn new(
        graph: &'a TypeGraph,
        overrides: &'a OverrideRegistry,
        formatter: &'a dyn TypeFormatter,
        options: EmitOptions,
    ) -> Self {
        Self {
            graph,
            overrides,
            formatter,
            resolver: &DepthFirstResolver,
            merger: &BlockCommentMerger,
            options,
        }
    }

    /// Use a different property resolver.
    pub fn with_resolver(mut self, resolver: &'a dyn PropertyResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Use a different comment merger.
    pub fn with_merger(mut self, merger: &'a dyn CommentMerger) -> Self {
        self.merger = merger;
        self
    }

    /// Emit the complete document: reference preamble, then every group.
    ///
    /// Fails without output if any member's event class is missing.
    pub fn emit_document(&self, groups: &[EventGroup]) -> Result<String, Error> {
        let mut out = String::new();
        for reference in &self.options.references {
            out.push_str(&format!("/// <reference path=\"{}\" />\n", reference));
        }
        if !self.options.references.is_empty() {
            out.push('\n');
        }

        for group in groups {
            for line in self.emit_group(group)? {
                out.push_str(&line);
                out.push('\n');
            }
        }

        Ok(out)
    }

    /// Emit one `declare const` block.
    pub fn emit_group(&self, group: &EventGroup) -> Result<Vec<String>, Error> {
        let _span = tracing::debug_span!("emit_group", group = %group.name).entered();

        let mut lines = vec![format!("declare const {}: {{", group.name)];
        for member in group.members() {
            lines.extend(self.emit_member(&group.name, member)?);
        }
        lines.push("};".to_string());
        lines.push(String::new());

        tracing::debug!(members = group.len(), "Emitted group");
        Ok(lines)
    }

    /// Emit the lines for one member of `group`.
    pub fn emit_member(&self, group: &str, member: &MemberEntry) -> Result<Vec<String>, Error> {
        if let Some(generator) = self.overrides.lookup(group, &member.name) {
            tracing::debug!(member = %member.name, "Applying member override");
            return Ok(generator(member));
        }

        let class = self
            .graph
            .descriptor_for(&member.event_class)
            .ok_or_else(|| Error::UnresolvedClass {
                group: group.to_string(),
                member: member.name.clone(),
                class: member.event_class.clone(),
            })?;

        let mut lines = self.member_comment(class, member);
        lines.extend(self.member_signatures(class, member));
        Ok(lines)
    }

    fn member_comment(&self, class: &ClassDescriptor, member: &MemberEntry) -> Vec<String> {
        let inherited: Vec<&CommentFragment> = self
            .resolver
            .collect_property(self.graph, &class.name, MetadataKind::Comment)
            .into_iter()
            .filter_map(Metadata::as_comment)
            .collect();
        let base = self.merger.merge(&inherited);

        let at = CommentFragment::line(format!("@at *{}*", member.valid_contexts.join(", ")));
        let cancellable = CommentFragment::line("@cancellable");

        let mut parts = vec![&base, &at];
        if member.cancellable {
            parts.push(&cancellable);
        }

        let merged = self.merger.merge(&parts);
        self.merger.format_lines(&merged, self.options.indent)
    }

    fn member_signatures(&self, class: &ClassDescriptor, member: &MemberEntry) -> Vec<String> {
        let pad = " ".repeat(self.options.indent);
        let key = property_key(&member.name);
        let event = self
            .formatter
            .format_class(&class.name, class.type_parameters.len());

        let mut lines = Vec::with_capacity(2);
        if member.extra.has_extra() {
            let extra = self
                .resolver
                .find_property(self.graph, &class.name, MetadataKind::Extra)
                .and_then(Metadata::as_extra)
                .map(|ty| self.formatter.format(ty))
                .unwrap_or_else(|| self.options.fallback_extra_type.clone());
            lines.push(format!(
                "{}{}(extra: {}, handler: (event: {}) => void):void,",
                pad, key, extra, event
            ));
        }
        if member.extra.allows_handler_only() {
            lines.push(format!(
                "{}{}(handler: (event: {}) => void):void,",
                pad, key, event
            ));
        }
        lines
    }
}

/// Member name as an object type key, quoted when it is not an identifier.
pub fn property_key(name: &str) -> String {
    let mut chars = name.chars();
    let is_identifier = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_' || first == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };

    if is_identifier {
        name.to_string()
    } else {
        serde_json::Value::String(name.to_string()).to_string()
    }
}
