//! Recursive text extraction from a section container.
//!
//! Walks children in document order and emits a flat sequence of fragments:
//! plain text, rendered mathematics (from image alt text or math elements),
//! and `~\cite{...}` citation markers. Nested `<section>` elements end the
//! walk for that branch — their text belongs to their own outline entry, so
//! an ancestor must never capture it.

use crate::dom::{Dom, NodeData, NodeId};
use crate::error::{Error, Result};

/// Tags whose subtrees carry no body text worth keeping: link anchors,
/// floats and their captions, table cells, headings (owned by the outline),
/// superscript footnote markers.
const IGNORED_TAGS: &[&str] = &[
    "a", "figure", "center", "caption", "td", "h1", "h2", "h3", "h4", "sup",
];

/// Class names LaTeXML puts on inline and display mathematics.
const MATH_CLASSES: &[&str] = &["ltx_Math", "ltx_equation"];

/// Safety bound against pathological single math elements.
const MAX_MATH_LEN: usize = 300_000;

/// How the extractor treats one child node. Matched exhaustively so a new
/// node kind cannot be silently mishandled.
#[derive(Debug)]
enum Piece<'a> {
    /// Raw text leaf, emitted verbatim.
    Text(&'a str),
    /// Inert leaf or ignored subtree: nothing emitted, no recursion.
    Skip,
    /// Citation marker element; rendered as `~\cite{...}`.
    Citation,
    /// Rendered math carried in an image alt attribute.
    MathImage(&'a str),
    /// Math element whose subtree text is the rendering.
    MathElement,
    /// Nested section: stop extracting this branch entirely.
    SubsectionBoundary,
    /// Anything else: recurse into children.
    Container,
}

/// Extract text fragments from the children of `container`, appending to
/// `out`. Returns an error if the tree contains a node kind the extractor
/// does not model.
pub fn extract_fragments(dom: &Dom, container: NodeId, out: &mut Vec<String>) -> Result<()> {
    for child in dom.children(container) {
        match classify(dom, child)? {
            Piece::Text(text) => out.push(text.to_string()),
            Piece::Skip => {}
            Piece::Citation => out.push(render_citation(dom, child)),
            Piece::MathImage(alt) => out.push(alt.to_string()),
            Piece::MathElement => {
                let math = dom.subtree_text(child);
                if math.chars().count() < MAX_MATH_LEN {
                    out.push(math);
                }
            }
            Piece::SubsectionBoundary => return Ok(()),
            Piece::Container => extract_fragments(dom, child, out)?,
        }
    }
    Ok(())
}

fn classify<'a>(dom: &'a Dom, id: NodeId) -> Result<Piece<'a>> {
    let node = dom
        .get(id)
        .ok_or_else(|| Error::UnrecognizedNode(format!("dangling node id {}", id.0)))?;

    match &node.data {
        NodeData::Text(text) => Ok(Piece::Text(text)),
        NodeData::Comment(_) => Ok(Piece::Skip),
        NodeData::Element { name, classes, .. } => {
            let tag = name.local.as_ref();
            if IGNORED_TAGS.contains(&tag)
                || classes.first().is_some_and(|c| c == "navigation")
            {
                return Ok(Piece::Skip);
            }
            if tag == "cite" {
                return Ok(Piece::Citation);
            }
            if tag == "img" {
                return Ok(match dom.attr(id, "alt") {
                    Some(alt) if alt.chars().count() < MAX_MATH_LEN => Piece::MathImage(alt),
                    _ => Piece::Skip,
                });
            }
            if classes.first().is_some_and(|c| MATH_CLASSES.contains(&c.as_str())) {
                return Ok(Piece::MathElement);
            }
            if tag == "section" {
                return Ok(Piece::SubsectionBoundary);
            }
            Ok(Piece::Container)
        }
        // Document roots cannot occur below a container; treating one as
        // anything else would silently corrupt the extracted text.
        NodeData::Document => Err(Error::UnrecognizedNode(
            "document node nested inside a container".to_string(),
        )),
    }
}

/// Render a `<cite>` element as a LaTeX-style citation marker: the fragment
/// ids of every contained reference link, joined with ", ".
fn render_citation(dom: &Dom, cite: NodeId) -> String {
    let mut keys = Vec::new();
    for desc in dom.descendants(cite) {
        if dom.tag_name(desc).is_some_and(|n| n.as_ref() == "a")
            && dom.classes(desc).iter().any(|c| c == "ltx_ref")
            && let Some(href) = dom.attr(desc, "href")
        {
            keys.push(href.trim_matches('#').to_string());
        }
    }
    format!("~\\cite{{{}}}", keys.join(", "))
}

#[cfg(test)]
mod tests {
    use crate::dom::parse_html;

    use super::*;

    fn fragments_of(html: &str, container_tag: &str) -> Vec<String> {
        let dom = parse_html(html);
        let container = dom.find_by_tag(container_tag).expect("container");
        let mut out = Vec::new();
        extract_fragments(&dom, container, &mut out).expect("extraction");
        out
    }

    #[test]
    fn plain_text_and_nested_elements() {
        let frags = fragments_of("<div>one <em>two</em> three</div>", "div");
        assert_eq!(frags, vec!["one ", "two", " three"]);
    }

    #[test]
    fn comments_are_skipped() {
        let frags = fragments_of("<div>a<!-- noise -->b</div>", "div");
        assert_eq!(frags, vec!["a", "b"]);
    }

    #[test]
    fn ignored_tags_drop_whole_subtrees() {
        let frags = fragments_of(
            "<div>keep<figure><p>lost caption</p></figure><sup>1</sup></div>",
            "div",
        );
        assert_eq!(frags, vec!["keep"]);
    }

    #[test]
    fn navigation_class_is_skipped() {
        let frags = fragments_of(
            r#"<div><span class="navigation extra">nav</span>body</div>"#,
            "div",
        );
        assert_eq!(frags, vec!["body"]);
    }

    #[test]
    fn citation_marker_rendering() {
        let frags = fragments_of(
            r##"<div>see <cite><a class="ltx_ref" href="#ref1">[1]</a><a class="ltx_ref" href="#ref2">[2]</a></cite></div>"##,
            "div",
        );
        assert_eq!(frags, vec!["see ", "~\\cite{ref1, ref2}"]);
    }

    #[test]
    fn math_image_alt_is_emitted() {
        let frags = fragments_of(
            r#"<div>where <img alt="x^2 + y^2 = z^2" src="m1.png"> holds</div>"#,
            "div",
        );
        assert_eq!(frags, vec!["where ", "x^2 + y^2 = z^2", " holds"]);
    }

    #[test]
    fn image_without_alt_is_skipped() {
        let frags = fragments_of(r#"<div>a<img src="m1.png">b</div>"#, "div");
        assert_eq!(frags, vec!["a", "b"]);
    }

    #[test]
    fn math_element_text_is_emitted_without_recursion() {
        let frags = fragments_of(
            r#"<div><span class="ltx_Math"><span>E</span> = mc^2</span></div>"#,
            "div",
        );
        assert_eq!(frags, vec!["E = mc^2"]);
    }

    #[test]
    fn subsection_stops_the_walk() {
        // Text after the nested section belongs to that section's entry;
        // the walk must return, not skip and continue.
        let frags = fragments_of(
            r#"<div>before<section id="S1.1"><p>child text</p></section>after</div>"#,
            "div",
        );
        assert_eq!(frags, vec!["before"]);
    }

    #[test]
    fn unrecognized_node_is_a_hard_error() {
        // A document root can never legitimately appear as a child; feeding
        // one through the walk must fail loudly.
        let dom = parse_html("<div>x</div>");
        let piece = classify(&dom, dom.document());
        assert!(matches!(piece, Err(Error::UnrecognizedNode(_))));
    }
}
