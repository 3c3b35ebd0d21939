use serde::{Deserialize, Serialize};

/// Generated document layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the documents are written to.
    #[serde(default = "default_dir")]
    pub dir: String,

    /// File name of the event declaration document.
    #[serde(default = "default_events_file")]
    pub events_file: String,

    /// File name of the language key document.
    #[serde(default = "default_lang_file")]
    pub lang_file: String,

    /// Reference directives emitted at the top of the event document.
    #[serde(default = "default_references")]
    pub references: Vec<String>,

    /// Indent width for members inside a group.
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Namespace prefix for rendered class names.
    #[serde(default = "default_type_namespace")]
    pub type_namespace: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            events_file: default_events_file(),
            lang_file: default_lang_file(),
            references: default_references(),
            indent: default_indent(),
            type_namespace: default_type_namespace(),
        }
    }
}

fn default_dir() -> String {
    "probe/generated".to_string()
}

fn default_events_file() -> String {
    "events.d.ts".to_string()
}

fn default_lang_file() -> String {
    "lang.d.ts".to_string()
}

fn default_references() -> Vec<String> {
    vec!["./globals.d.ts".to_string(), "./registries.d.ts".to_string()]
}

fn default_indent() -> usize {
    4
}

fn default_type_namespace() -> String {
    "Internal".to_string()
}
