//! JSON persistence for extracted documents.
//!
//! Saving is strict: write failures surface as errors. Loading is
//! best-effort by contract: a missing or malformed file logs a warning and
//! yields `None`, so callers can fall back to re-parsing the source.

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::error::Result;
use crate::model::Document;

/// Save a document as pretty-printed UTF-8 JSON, creating missing parent
/// directories.
pub fn save(document: &Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json)?;
    info!("document saved to {}", path.display());
    Ok(())
}

/// Load a document previously written by [`save`]. Returns `None` (after
/// logging) when the file is missing or its content does not parse.
pub fn load(path: impl AsRef<Path>) -> Option<Document> {
    let path = path.as_ref();
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            warn!("could not read {}: {e}", path.display());
            return None;
        }
    };
    match serde_json::from_str(&json) {
        Ok(document) => Some(document),
        Err(e) => {
            warn!("could not parse {}: {e}", path.display());
            None
        }
    }
}
