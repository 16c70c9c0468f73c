//! JSON card document writer.
//!
//! The document is a single top-level array, pretty-printed with two-space
//! indentation. Non-ASCII text is written as UTF-8, never escaped.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use cards_model::Card;

use crate::error::{OutputError, Result};

/// Outcome of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub path: PathBuf,
    pub cards: usize,
    pub bytes: usize,
}

/// Render cards as the output document without touching the file system.
pub fn render_cards(cards: &[Card]) -> Result<String> {
    serde_json::to_string_pretty(cards).map_err(OutputError::Serialize)
}

/// Write cards to `path`, replacing any existing file.
///
/// The document is rendered first and then written to a temporary file in
/// the destination directory, which is renamed over `path`. A failure leaves
/// an existing file at `path` untouched and never leaves a partial document.
pub fn write_cards(path: &Path, cards: &[Card]) -> Result<WriteSummary> {
    let rendered = render_cards(cards)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(|e| OutputError::io(dir, e))?;
    debug!(temp = %file.path().display(), "writing card document");
    file.write_all(rendered.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| OutputError::io(file.path(), e))?;
    match fs::metadata(path) {
        Ok(existing) => file
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| OutputError::io(path, e))?,
        Err(_) => set_default_permissions(&file).map_err(|e| OutputError::io(path, e))?,
    }
    file.persist(path).map_err(|e| OutputError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    info!(path = %path.display(), cards = cards.len(), bytes = rendered.len(), "wrote cards");
    Ok(WriteSummary {
        path: path.to_path_buf(),
        cards: cards.len(),
        bytes: rendered.len(),
    })
}

// Temporary files are created owner-only; a fresh document should be
// readable like any file written with default permissions.
#[cfg(unix)]
fn set_default_permissions(file: &NamedTempFile) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.as_file()
        .set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_file: &NamedTempFile) -> std::io::Result<()> {
    Ok(())
}
