//! Extracted document representation.
//!
//! Everything here is built fresh by one parse call and returned by value;
//! nothing points back into the markup tree. The serde shapes match the JSON
//! layout the storage collaborator reads and writes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A fully extracted scholarly document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub sections: Vec<Section>,
    /// Bibliography entries keyed by citation id, in document order.
    /// Duplicate or empty ids silently overwrite.
    pub references: IndexMap<String, Citation>,
}

/// A node in the document outline.
///
/// `subsections` hold the headings nested at a numerically deeper level, in
/// document order. `text` is attached only to entries that survive stop-word
/// filtering and whose container yields non-empty content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub id: Option<String>,
    pub subsections: Vec<Section>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
}

impl Section {
    pub fn new(title: impl Into<String>, id: Option<String>) -> Self {
        Self {
            title: title.into(),
            id,
            subsections: Vec::new(),
            text: None,
        }
    }
}

/// One bibliography entry, best-effort structured.
///
/// `meta_list` is the raw fragments as found in the markup; `meta_string`
/// joins them with single spaces (newlines removed). The structured fields
/// reconstruct `meta_string` only approximately when the heuristic split had
/// to run; all three may be empty when it found no boundary at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub meta_list: Vec<String>,
    pub meta_string: String,
    pub authors: String,
    pub title: String,
    pub journal: String,
}
