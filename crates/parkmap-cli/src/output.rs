//! All-or-nothing JSON file output.
//!
//! The document is serialized in memory, written to a hidden sibling file,
//! synced, then renamed over the destination. A failure at any step leaves
//! the destination exactly as it was.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum WriteError {
    #[error("failed to serialize JSON for {path}: {source}")]
    Serialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JsonStyle {
    Compact,
    /// Two-space indentation.
    Pretty,
}

pub(crate) fn write_json_atomic<T>(path: &Path, value: &T, style: JsonStyle) -> Result<(), WriteError>
where
    T: Serialize + ?Sized,
{
    let bytes = match style {
        JsonStyle::Compact => serde_json::to_vec(value),
        JsonStyle::Pretty => serde_json::to_vec_pretty(value),
    }
    .map_err(|e| WriteError::Serialize {
        path: path.display().to_string(),
        source: e,
    })?;

    write_atomic_file(path, &bytes)
}

fn write_atomic_file(path: &Path, bytes: &[u8]) -> Result<(), WriteError> {
    let io_err = |source: std::io::Error| WriteError::Io {
        path: path.display().to_string(),
        source,
    };

    let tmp = temp_path_for(path);
    if let Err(e) = write_then_rename(&tmp, path, bytes) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(e));
    }
    Ok(())
}

fn write_then_rename(tmp: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    {
        let mut f = std::fs::File::create(tmp)?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(tmp, path)
}

/// `dir/.name.tmp.<pid>` next to `path`.
fn temp_path_for(path: &Path) -> PathBuf {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    parent.join(format!(
        ".{}.tmp.{}",
        path.file_name().and_then(|s| s.to_str()).unwrap_or("output"),
        std::process::id()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "parkmap-output-{name}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn writes_compact_json() {
        let dir = scratch_dir("compact");
        let path = dir.join("parks.json");
        write_json_atomic(&path, &serde_json::json!([{"a": 1}]), JsonStyle::Compact).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"[{"a":1}]"#);
    }

    #[test]
    fn writes_pretty_json_with_two_space_indent() {
        let dir = scratch_dir("pretty");
        let path = dir.join("visits.json");
        write_json_atomic(&path, &serde_json::json!([{"a": 1}]), JsonStyle::Pretty).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[\n  {\n    \"a\": 1\n  }\n]"
        );
    }

    #[test]
    fn replaces_existing_file_and_leaves_no_temp_file() {
        let dir = scratch_dir("replace");
        let path = dir.join("parks.json");
        std::fs::write(&path, "old").unwrap();
        write_json_atomic(&path, &serde_json::json!([]), JsonStyle::Compact).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        let leftovers: Vec<_> = std::fs::read_dir(&dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().contains(".tmp."))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn missing_parent_directory_is_io_error_naming_path() {
        let dir = scratch_dir("missing-parent");
        let path = dir.join("no-such-dir").join("parks.json");
        let err = write_json_atomic(&path, &serde_json::json!([]), JsonStyle::Compact).unwrap_err();
        assert!(matches!(err, WriteError::Io { .. }), "got: {err:?}");
        assert!(err.to_string().contains("parks.json"));
        assert!(!path.exists());
    }

    #[test]
    fn temp_path_for_bare_file_name_uses_current_dir() {
        let tmp = temp_path_for(Path::new("parks.json"));
        assert_eq!(tmp.parent(), Some(Path::new(".")));
        assert!(tmp
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(".parks.json.tmp."));
    }
}
