//! Bibliography entry parsing.
//!
//! Well-tagged entries arrive as exactly three fragments (authors, title,
//! venue) and pass straight through. Anything else goes through a
//! best-effort punctuation split: good on the common "Authors. Title.
//! Venue." shape, explicitly not a guarantee for titles with internal
//! periods.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::dom::{Dom, NodeId};
use crate::model::Citation;

/// Year markers like ". 2020." or ". 2020a." that would otherwise read as a
/// sentence boundary between authors and title.
static YEAR_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\s\d{4}[a-z]?\.").expect("valid year marker regex"));

/// Greedy three-way split: authors up to the first ". ", title up to the
/// next sentence boundary or end, venue as the remainder.
static META_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(.*?\.\s)(.*?)(\.\s.*|$)").expect("valid split regex"));

/// Parse the text fragments of one bibliography entry into a [`Citation`].
///
/// Callers must tolerate empty structured fields: when the heuristic finds
/// no boundary, `meta_list` and `meta_string` still carry the raw input.
pub fn parse_metadata(fragments: &[String]) -> Citation {
    let meta_list: Vec<String> = fragments.iter().map(|f| f.replace('\n', " ")).collect();
    let mut meta_string = meta_list.join(" ");

    let (mut authors, mut title, mut journal) = (String::new(), String::new(), String::new());
    if let [a, t, j] = meta_list.as_slice() {
        authors = a.clone();
        title = t.clone();
        journal = j.clone();
    } else {
        meta_string = YEAR_MARKER.replace_all(&meta_string, ".").into_owned();
        if let Some(caps) = META_SPLIT.captures(&meta_string) {
            authors = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
            title = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
            journal = caps.get(3).map_or("", |m| m.as_str()).trim().to_string();
            if let Some(stripped) = journal.strip_prefix(". ") {
                journal = stripped.to_string();
            }
        }
    }

    Citation {
        meta_list,
        meta_string,
        authors,
        title,
        journal,
    }
}

/// Build the citation table from a bibliography list container.
///
/// Iterates the direct `<li>` children in document order; each entry's
/// fragments are the trimmed texts of its `ltx_bibblock` spans. Missing ids
/// key the entry under the empty string; duplicates overwrite.
pub fn build_citation_table(dom: &Dom, biblist: NodeId) -> IndexMap<String, Citation> {
    let mut table = IndexMap::new();

    for li in dom.children(biblist) {
        if !dom.tag_name(li).is_some_and(|n| n.as_ref() == "li") {
            continue;
        }
        let id = dom.element_id(li).unwrap_or("").to_string();
        let fragments: Vec<String> = dom
            .descendants(li)
            .filter(|&n| {
                dom.tag_name(n).is_some_and(|t| t.as_ref() == "span")
                    && dom.classes(n).iter().any(|c| c == "ltx_bibblock")
            })
            .map(|n| dom.subtree_text(n).trim().to_string())
            .collect();
        table.insert(id, parse_metadata(&fragments));
    }

    table
}
