use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Writes `contents` to `path`, replacing any existing file and creating
/// missing parent directories first.
pub fn overwrite_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy();

    if let Some(parent) = path_ref.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path_ref, contents).with_context(|| format!("Failed to write file: {}", path_str))
}

/// Turns an arbitrary label into something safe to use as a file stem.
pub fn sanitize_filename(input: &str) -> String {
    let mut sanitized = input
        .replace(
            &['/', '\\', ':', '*', '?', '"', '<', '>', '|', '\0', ' '][..],
            "_",
        )
        .replace("__", "_");

    sanitized = sanitized.trim().trim_matches('.').to_string();

    if sanitized.is_empty() {
        sanitized = "untitled".to_string();
    }

    sanitized
}
