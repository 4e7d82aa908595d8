//! Outline construction and filtering.
//!
//! Headings h1..h5 are scanned in document order and folded into a forest
//! with an explicit level stack, so skipped or irregular heading levels
//! (an h1 followed directly by an h3) still produce a well-formed tree.
//! Filtering then drops stop-word sections and attaches extracted text to
//! the survivors.

use log::debug;

use crate::dom::{Dom, NodeData, NodeId};
use crate::error::Result;
use crate::extract::clean::TextCleaner;
use crate::extract::text::extract_fragments;
use crate::model::Section;

/// Sections dropped from the outline by default: back matter that carries
/// no body content worth extracting.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "references",
    "acknowledgments",
    "about this document",
    "appendix",
];

/// Build the full outline from every heading in the document.
///
/// Each entry is anchored to the nearest enclosing `<section>` that carries
/// an id, or `None` when the heading sits outside any identified container.
pub fn build_toc(dom: &Dom) -> Vec<Section> {
    let mut toc: Vec<Section> = Vec::new();
    // In-progress entries; an entry moves into its parent (or the result)
    // once a heading at the same or a shallower level closes it.
    let mut stack: Vec<(u8, Section)> = Vec::new();

    for node in dom.descendants(dom.document()) {
        let Some(level) = heading_level(dom, node) else {
            continue;
        };

        while stack.last().is_some_and(|(l, _)| *l >= level) {
            close_top(&mut stack, &mut toc);
        }

        let title = dom.subtree_text(node);
        let section_id = dom
            .ancestor_with_id(node, "section")
            .and_then(|s| dom.element_id(s))
            .map(String::from);
        stack.push((level, Section::new(title, section_id)));
    }

    while !stack.is_empty() {
        close_top(&mut stack, &mut toc);
    }
    toc
}

fn close_top(stack: &mut Vec<(u8, Section)>, toc: &mut Vec<Section>) {
    let Some((_, section)) = stack.pop() else {
        return;
    };
    match stack.last_mut() {
        Some((_, parent)) => parent.subsections.push(section),
        None => toc.push(section),
    }
}

fn heading_level(dom: &Dom, id: NodeId) -> Option<u8> {
    let node = dom.get(id)?;
    let NodeData::Element { name, .. } = &node.data else {
        return None;
    };
    match name.local.as_ref() {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        _ => None,
    }
}

/// Stop-word filtering and text attachment over a built outline.
#[derive(Debug, Clone)]
pub struct SectionFilter {
    stop_words: Vec<String>,
    cleaner: TextCleaner,
}

impl Default for SectionFilter {
    fn default() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect(),
            cleaner: TextCleaner::default(),
        }
    }
}

impl SectionFilter {
    pub fn new(stop_words: Vec<String>, cleaner: TextCleaner) -> Self {
        Self { stop_words, cleaner }
    }

    /// Drop entries whose title contains a stop word (the whole subtree
    /// goes with them) and attach extracted, cleaned text to the rest.
    /// Sibling order is preserved.
    pub fn filter(&self, sections: Vec<Section>, dom: &Dom) -> Result<Vec<Section>> {
        let mut kept = Vec::new();
        for mut section in sections {
            if self.has_stop_word(&section.title) {
                debug!("dropping section {:?} (stop word)", section.title);
                continue;
            }
            self.attach_text(&mut section, dom)?;
            section.subsections = self.filter(std::mem::take(&mut section.subsections), dom)?;
            kept.push(section);
        }
        Ok(kept)
    }

    fn has_stop_word(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.stop_words
            .iter()
            .any(|stop| title.contains(&stop.to_lowercase()))
    }

    fn attach_text(&self, section: &mut Section, dom: &Dom) -> Result<()> {
        let Some(id) = section.id.as_deref() else {
            return Ok(());
        };
        let Some(container) = dom.get_by_id(id) else {
            debug!("no container found for section id {id:?}");
            return Ok(());
        };

        let mut fragments = Vec::new();
        extract_fragments(dom, container, &mut fragments)?;
        if !fragments.is_empty() {
            section.text = Some(self.cleaner.clean(&fragments.concat()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::parse_html;

    use super::*;

    fn shape(sections: &[Section]) -> Vec<(String, usize)> {
        sections
            .iter()
            .map(|s| (s.title.clone(), s.subsections.len()))
            .collect()
    }

    #[test]
    fn toc_shape_matches_heading_order() {
        // Levels [1, 2, 3, 2, 1]: two top entries; the first has one child
        // which has one child; the second child of the first is a sibling.
        let dom = parse_html(
            "<body><h1>A</h1><h2>A.1</h2><h3>A.1.1</h3><h2>A.2</h2><h1>B</h1></body>",
        );
        let toc = build_toc(&dom);

        assert_eq!(toc.len(), 2);
        assert_eq!(toc[0].title, "A");
        assert_eq!(shape(&toc[0].subsections), vec![("A.1".into(), 1), ("A.2".into(), 0)]);
        assert_eq!(toc[0].subsections[0].subsections[0].title, "A.1.1");
        assert_eq!(toc[1].title, "B");
        assert!(toc[1].subsections.is_empty());
    }

    #[test]
    fn skipped_levels_still_nest() {
        let dom = parse_html("<body><h1>Top</h1><h3>Deep</h3></body>");
        let toc = build_toc(&dom);

        assert_eq!(toc.len(), 1);
        assert_eq!(toc[0].subsections.len(), 1);
        assert_eq!(toc[0].subsections[0].title, "Deep");
    }

    #[test]
    fn entries_anchor_to_enclosing_identified_section() {
        let dom = parse_html(
            r#"<body>
                <section id="S1"><h2>Named</h2></section>
                <section><h2>Anonymous</h2></section>
            </body>"#,
        );
        let toc = build_toc(&dom);

        assert_eq!(toc[0].id.as_deref(), Some("S1"));
        assert_eq!(toc[1].id, None);
    }

    #[test]
    fn stop_word_drops_whole_subtree() {
        let dom = parse_html(
            r#"<body>
                <section id="S1"><h2>Introduction</h2><p>Intro text.</p></section>
                <section id="S2"><h2>References</h2>
                    <section id="S2.1"><h3>Primary Sources</h3></section>
                    <section id="S2.2"><h3>Further Reading</h3></section>
                </section>
            </body>"#,
        );
        let toc = build_toc(&dom);
        assert_eq!(toc.len(), 2);
        assert_eq!(toc[1].subsections.len(), 2);

        let filtered = SectionFilter::default().filter(toc, &dom).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Introduction");
    }

    #[test]
    fn stop_words_match_case_insensitively_as_substrings() {
        let filter = SectionFilter::default();
        assert!(filter.has_stop_word("REFERENCES"));
        assert!(filter.has_stop_word("A. Appendix: Proofs"));
        assert!(!filter.has_stop_word("Introduction"));
    }

    #[test]
    fn text_attached_to_surviving_entries() {
        let dom = parse_html(
            r#"<body><section id="S1"><h2>Results</h2><p>We measured things.</p></section></body>"#,
        );
        let filtered = SectionFilter::default()
            .filter(build_toc(&dom), &dom)
            .unwrap();

        let text = filtered[0].text.as_deref().expect("text attached");
        assert!(text.contains("We measured things."));
        // The heading itself is not part of the body text.
        assert!(!text.contains("Results"));
    }

    #[test]
    fn missing_container_skips_attachment() {
        let toc = vec![Section::new("Ghost", Some("nope".to_string()))];
        let dom = parse_html("<body></body>");
        let filtered = SectionFilter::default().filter(toc, &dom).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].text, None);
    }

    #[test]
    fn no_duplicate_text_across_nesting() {
        let dom = parse_html(
            r#"<body>
                <section id="SA"><h2>Parent</h2><p>parent-only words.</p>
                    <section id="SB"><h3>Child</h3><p>child-only words.</p></section>
                </section>
            </body>"#,
        );
        let filtered = SectionFilter::default()
            .filter(build_toc(&dom), &dom)
            .unwrap();

        let parent = &filtered[0];
        let child = &parent.subsections[0];
        let parent_text = parent.text.as_deref().unwrap();
        let child_text = child.text.as_deref().unwrap();
        assert!(child_text.contains("child-only words."));
        assert!(!parent_text.contains("child-only"));
    }

    #[test]
    fn custom_stop_words() {
        let filter = SectionFilter::new(vec!["dedication".to_string()], TextCleaner::default());
        let dom = parse_html(
            r#"<body>
                <section id="S1"><h2>Dedication</h2></section>
                <section id="S2"><h2>References</h2></section>
            </body>"#,
        );
        let filtered = filter.filter(build_toc(&dom), &dom).unwrap();
        // Only the custom list applies: References survives here.
        assert_eq!(shape(&filtered), vec![("References".to_string(), 0)]);
    }
}
