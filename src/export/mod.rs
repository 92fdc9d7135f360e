pub(crate) mod png;
pub(crate) mod svg;

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::foundation::error::GlyphwarpResult;

/// `made-in-<letter>-<unix-millis>.<ext>`
pub fn export_file_name(letter: &str, unix_millis: u128, ext: &str) -> String {
    format!("made-in-{letter}-{unix_millis}.{ext}")
}

/// [`export_file_name`] stamped with the current wall-clock time.
pub fn timestamped_file_name(letter: &str, ext: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    export_file_name(letter, millis, ext)
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> GlyphwarpResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/export/mod.rs"]
mod tests;
