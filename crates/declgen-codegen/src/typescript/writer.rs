use std::fs;
use std::path::{Path, PathBuf};

use crate::Error;

/// Write `contents` to `path` so readers never observe a half-written file.
///
/// The document goes to a sibling `.tmp` file first and is renamed over the
/// destination once complete. On failure the temporary file is removed.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = temp_path(path);
    let result = fs::write(&tmp_path, contents).and_then(|_| fs::rename(&tmp_path, path));

    if let Err(e) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(Error::Io(e));
    }

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote document");
    Ok(())
}

/// Delete a document left by an earlier run. Returns whether one existed.
pub fn remove_stale(path: &Path) -> Result<bool, Error> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Io(e)),
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
