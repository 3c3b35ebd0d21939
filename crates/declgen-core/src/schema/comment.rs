use serde::{Deserialize, Serialize};

/// One unit of documentation: an ordered list of text lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentFragment {
    #[serde(default)]
    pub lines: Vec<String>,
}

impl CommentFragment {
    /// Create a fragment from lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a single-line fragment.
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
        }
    }

    /// Split a text block into a fragment, one line per source line.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(|l| l.trim_end().to_string()))
    }

    /// Whether the fragment has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The fragment's lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
