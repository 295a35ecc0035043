//! Utility functions for error handling

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;

use crate::error::Result;

/// Open a survey file, reporting why the file was needed on failure
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        anyhow::bail!(
            "File not found: {} (needed for: {purpose})",
            path.display()
        );
    }

    if !path.is_file() {
        anyhow::bail!(
            "Path is not a file: {} (expected a file for: {purpose})",
            path.display()
        );
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions".to_string(),
            _ => format!("Failed to open file for: {purpose}"),
        };
        anyhow::Error::from(crate::error::Error::Io(e)).context(format!(
            "{context}: {}",
            path.display()
        ))
    })
}

/// Lower-cased extension of a path, if any
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Read a whole text file with the path attached to any error
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    let mut file = safe_open_file(path, purpose)?;
    let mut content = String::new();
    io::Read::read_to_string(&mut file, &mut content)
        .with_context(|| format!("Failed to read {} for: {purpose}", path.display()))?;
    Ok(content)
}
