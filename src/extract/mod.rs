//! Document assembly: title, abstract, bibliography, and filtered outline.

pub mod bib;
pub mod clean;
pub mod text;
pub mod toc;

use log::debug;

use crate::dom::{parse_html, Dom};
use crate::error::Result;
use crate::model::Document;

/// Class LaTeXML puts on the abstract container.
const ABSTRACT_CLASS: &str = "ltx_abstract";
/// Class on the bibliography list element.
const BIBLIST_CLASS: &str = "ltx_biblist";

/// Parse an HTML rendering of a scholarly document into a [`Document`].
pub fn parse_document(html: &str) -> Result<Document> {
    let dom = parse_html(html);
    extract_document(&dom)
}

/// Extract a [`Document`] from an already-parsed markup tree.
///
/// Optional structure degrades to empty values: a missing `<title>`,
/// abstract, or bibliography never fails the parse. Only a malformed tree
/// inside section extraction does.
pub fn extract_document(dom: &Dom) -> Result<Document> {
    let title = dom
        .find_by_tag("title")
        .map(|t| dom.subtree_text(t).replace('\n', " "))
        .unwrap_or_default();

    // Plain subtree text on purpose: math and citations inside the abstract
    // are not specially rendered.
    let abstract_text = match dom.find_by_class(ABSTRACT_CLASS) {
        Some(node) => dom.subtree_text(node),
        None => {
            debug!("no abstract container found");
            String::new()
        }
    };

    let references = match dom.find_by_class(BIBLIST_CLASS) {
        Some(biblist) => bib::build_citation_table(dom, biblist),
        None => {
            debug!("no bibliography list found");
            Default::default()
        }
    };

    let sections = toc::SectionFilter::default().filter(toc::build_toc(dom), dom)?;

    Ok(Document {
        title,
        abstract_text,
        sections,
        references,
    })
}
