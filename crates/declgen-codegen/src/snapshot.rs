//! Loading the host's exported snapshot.
//!
//! A snapshot is either one JSON file or a directory of them; directory
//! contents are merged in file-name order so split exports (one file per mod,
//! say) combine deterministically. Any file that cannot be walked, read or
//! parsed fails the load: a partial snapshot would emit a partial API.

use std::path::Path;

use declgen_core::schema::Snapshot;
use declgen_core::DeclError;
use walkdir::WalkDir;

use crate::Error;

/// Load a snapshot from a JSON file or a directory of JSON files.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, Error> {
    if path.is_file() {
        return load_file(path);
    }

    if !path.is_dir() {
        return Err(DeclError::NotFound(format!("snapshot path {}", path.display())).into());
    }

    let mut snapshot = Snapshot::default();
    let mut files = 0usize;

    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let at = e
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| path.display().to_string());
            DeclError::Snapshot(format!("failed to walk {}: {}", at, e))
        })?;

        let is_json = entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .map(|ext| ext == "json")
                .unwrap_or(false);
        if !is_json {
            continue;
        }

        snapshot.extend(load_file(entry.path())?);
        files += 1;
    }

    tracing::debug!(
        files,
        classes = snapshot.classes.len(),
        groups = snapshot.groups.len(),
        "Loaded snapshot directory"
    );
    Ok(snapshot)
}

fn load_file(path: &Path) -> Result<Snapshot, Error> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        DeclError::Snapshot(format!("failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        Error::from(DeclError::Snapshot(format!(
            "failed to parse {}: {}",
            path.display(),
            e
        )))
    })
}

/// Parse a snapshot from JSON text.
pub fn parse_snapshot(content: &str) -> Result<Snapshot, Error> {
    serde_json::from_str(content).map_err(|e| Error::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CLASSES: &str = r#"{
        "classes": [
            {"name": "a.TickEvent", "metadata": [{"kind": "comment", "lines": ["Every tick."]}]}
        ]
    }"#;

    const GROUPS: &str = r#"{
        "groups": [
            {"name": "ServerEvents", "members": [
                {"name": "tick", "event_class": "a.TickEvent", "valid_contexts": ["server"]}
            ]}
        ],
        "registries": ["minecraft:block"]
    }"#;

    #[test]
    fn test_parse_snapshot_source() {
        let snapshot = parse_snapshot(CLASSES).unwrap();
        assert_eq!(snapshot.classes.len(), 1);
        assert!(snapshot.type_graph().descriptor_for("a.TickEvent").is_some());
    }

    #[test]
    fn test_parse_invalid_snapshot() {
        let err = parse_snapshot("{ not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_load_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(&path, GROUPS).unwrap();

        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.groups.len(), 1);
        assert_eq!(snapshot.registries, vec!["minecraft:block"]);
    }

    #[test]
    fn test_load_directory_merges_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("01-classes.json"), CLASSES).unwrap();
        fs::create_dir(dir.path().join("events")).unwrap();
        fs::write(dir.path().join("events/groups.json"), GROUPS).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let snapshot = load_snapshot(dir.path()).unwrap();
        assert_eq!(snapshot.classes.len(), 1);
        assert_eq!(snapshot.groups.len(), 1);
        assert_eq!(snapshot.registries, vec!["minecraft:block"]);
    }

    #[test]
    fn test_broken_file_in_directory_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), GROUPS).unwrap();
        fs::write(
            dir.path().join("b.json"),
            r#"{"groups": [{"name": "H", "members": [{"name": "x""#,
        )
        .unwrap();

        let err = load_snapshot(dir.path()).unwrap_err();

        match err {
            Error::Core(DeclError::Snapshot(message)) => {
                assert!(message.contains("b.json"), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_broken_single_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(&path, "{").unwrap();

        let err = load_snapshot(&path).unwrap_err();
        assert!(err.to_string().contains("snapshot.json"));
    }

    #[test]
    fn test_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_snapshot(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, Error::Core(DeclError::NotFound(_))));
    }
}
