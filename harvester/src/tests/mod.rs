use anyhow::Result;
use std::fs;
use std::path::Path;

pub mod fixtures;

/// Helper function to save a page that failed extraction for future regression testing
pub fn save_failed_html(html: &str, test_name: &str) -> Result<()> {
    let failures_dir = fixtures::fixtures_dir().join("failures");
    fs::create_dir_all(&failures_dir)?;

    let file_path = failures_dir.join(format!("{}.html", test_name));
    fs::write(&file_path, html)?;

    println!("Saved failed HTML to {}", file_path.display());
    Ok(())
}

/// Writes `contents` to `name` inside `dir` and returns the full path.
pub fn write_archive(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
