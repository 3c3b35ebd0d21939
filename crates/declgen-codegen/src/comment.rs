use declgen_core::schema::CommentFragment;

/// Combines documentation fragments and renders them as a comment block.
pub trait CommentMerger {
    /// Concatenate fragments, keeping the order they were supplied in.
    fn merge(&self, fragments: &[&CommentFragment]) -> CommentFragment;

    /// Render a fragment as a block comment indented by `indent` spaces.
    fn format_lines(&self, fragment: &CommentFragment, indent: usize) -> Vec<String>;
}

/// Renders JSDoc-style `/** ... */` blocks.
///
/// An empty fragment renders no lines at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockCommentMerger;

impl CommentMerger for BlockCommentMerger {
    fn merge(&self, fragments: &[&CommentFragment]) -> CommentFragment {
        CommentFragment::new(
            fragments
                .iter()
                .flat_map(|fragment| fragment.lines().iter().cloned()),
        )
    }

    fn format_lines(&self, fragment: &CommentFragment, indent: usize) -> Vec<String> {
        if fragment.is_empty() {
            return Vec::new();
        }

        let pad = " ".repeat(indent);
        let mut lines = Vec::with_capacity(fragment.lines().len() + 2);
        lines.push(format!("{}/**", pad));
        for line in fragment.lines() {
            if line.is_empty() {
                lines.push(format!("{} *", pad));
            } else {
                // Keep a stray terminator from closing the block early.
                lines.push(format!("{} * {}", pad, line.replace("*/", "*\\/")));
            }
        }
        lines.push(format!("{} */", pad));
        lines
    }
}
