use std::collections::{BTreeMap, BTreeSet};

const DEFAULT_LANGUAGE: &str = "en_us";

/// Translation keys for `language`, merged over the default language.
///
/// Returns an empty set when the snapshot carries no language data.
pub fn lang_keys<'a>(
    lang: &'a BTreeMap<String, BTreeMap<String, String>>,
    language: &str,
) -> BTreeSet<&'a str> {
    let mut languages = vec![DEFAULT_LANGUAGE];
    if language != DEFAULT_LANGUAGE {
        languages.push(language);
    }

    languages
        .into_iter()
        .filter_map(|code| lang.get(code))
        .flat_map(|entries| entries.keys().map(|k| k.as_str()))
        .collect()
}

/// `type LangKey = "a" | "b"` indented by `indent`, or nothing without keys.
pub fn format_lang_keys(keys: &BTreeSet<&str>, indent: usize) -> Vec<String> {
    if keys.is_empty() {
        return Vec::new();
    }

    let union = keys
        .iter()
        .map(|k| serde_json::Value::String(k.to_string()).to_string())
        .collect::<Vec<_>>()
        .join(" | ");
    vec![format!("{}type LangKey = {}", " ".repeat(indent), union)]
}

/// Wrap special type lines in the `Special` namespace document.
pub fn lang_document(lines: &[String]) -> String {
    let mut out = String::from("declare namespace Special {\n");
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("}\n");
    out
}
