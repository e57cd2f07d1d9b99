//! JSON and YAML serialization and file output.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, SegmenterError};

/// Serialize a value as pretty-printed JSON with a trailing newline.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Serialize a value as a YAML document.
///
/// The output starts with a `---` document marker and has no trailing
/// whitespace on key lines.
pub fn to_yaml<T: Serialize>(value: &T) -> Result<String> {
    let yaml = serde_yaml_ng::to_string(value)?;
    let body = yaml.strip_prefix("---\n").unwrap_or(&yaml);
    Ok(format!("---\n{}\n", body.trim_end()))
}

/// Write rendered output to a file.
///
/// Uses atomic write pattern: writes to a temp file next to the target,
/// syncs to disk, then renames. The parent directory must already exist.
/// On failure the temp file is removed and any existing target is left as
/// it was.
///
/// # Returns
/// Path to the saved file
pub fn save_output(content: &str, path: &Path) -> Result<PathBuf> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    if !parent.is_dir() {
        return Err(SegmenterError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Output directory does not exist: {}", parent.display()),
        )));
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| {
            SegmenterError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Output path is not a file: {}", path.display()),
            ))
        })?
        .to_string_lossy();
    let temp_file = parent.join(format!(".{file_name}.tmp"));

    let written =
        write_synced(&temp_file, content).and_then(|()| replace_file(&temp_file, path));
    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(&temp_file) {
            tracing::warn!(
                path = %temp_file.display(),
                error = %cleanup,
                "Failed to remove temp file"
            );
        }
        return Err(e.into());
    }
    tracing::debug!(path = %path.display(), bytes = content.len(), "Saved output");

    Ok(path.to_path_buf())
}

/// Write content to a new file and flush it to disk.
fn write_synced(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}

/// Move a finished temp file over the target.
fn replace_file(from: &Path, to: &Path) -> std::io::Result<()> {
    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if to.is_file() {
        fs::remove_file(to)?;
    }

    fs::rename(from, to)
}
