//! End-to-end extraction tests over an inline LaTeXML-style fixture.

use arxtract::{parse_document, Document};

const PAPER_HTML: &str = r##"<html>
<head><title>Attention Is Not Enough</title></head>
<body>
<div class="ltx_page_main">
  <div class="ltx_abstract">
    <h6 class="ltx_title_abstract">Abstract</h6>
    <p>We study things carefully.</p>
  </div>
  <section id="S1" class="ltx_section">
    <h2 class="ltx_title_section">1 Introduction</h2>
    <p>Prior work <cite><a class="ltx_ref" href="#bib.bib1">[1]</a>, <a class="ltx_ref" href="#bib.bib2">[2]</a></cite> studied <img alt="f(x)" src="x.png"> deeply.</p>
    <section id="S1.SS1" class="ltx_subsection">
      <h3 class="ltx_title_subsection">1.1 Motivation</h3>
      <p>Child motivation text.</p>
    </section>
  </section>
  <section id="S2" class="ltx_section">
    <h2 class="ltx_title_section">2 Results</h2>
    <p>Main results body with <span class="ltx_Math">E = mc^2</span> inline.</p>
  </section>
  <section id="bib" class="ltx_bibliography">
    <h2 class="ltx_title_bibliography">References</h2>
    <ul class="ltx_biblist">
      <li id="bib.bib1" class="ltx_bibitem">
        <span class="ltx_bibblock">Smith, J.</span>
        <span class="ltx_bibblock">A Great Paper</span>
        <span class="ltx_bibblock">Nature, 2020</span>
      </li>
      <li id="bib.bib2" class="ltx_bibitem">
        <span class="ltx_bibblock">Doe, A. 2021. Another Paper. JMLR.</span>
      </li>
    </ul>
  </section>
</div>
</body>
</html>"##;

fn parse_fixture() -> Document {
    parse_document(PAPER_HTML).expect("fixture should parse")
}

#[test]
fn title_comes_from_head() {
    let document = parse_fixture();
    assert_eq!(document.title, "Attention Is Not Enough");
}

#[test]
fn abstract_is_plain_text() {
    let document = parse_fixture();
    assert!(document.abstract_text.contains("We study things carefully."));
}

#[test]
fn outline_shape_and_filtering() {
    let document = parse_fixture();

    // References is filtered out; Introduction and Results remain.
    let titles: Vec<_> = document.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["1 Introduction", "2 Results"]);

    let intro = &document.sections[0];
    assert_eq!(intro.id.as_deref(), Some("S1"));
    assert_eq!(intro.subsections.len(), 1);
    assert_eq!(intro.subsections[0].title, "1.1 Motivation");
    assert_eq!(intro.subsections[0].id.as_deref(), Some("S1.SS1"));
}

#[test]
fn section_text_renders_citations_and_math() {
    let document = parse_fixture();
    let intro_text = document.sections[0].text.as_deref().expect("intro text");

    assert!(intro_text.contains("~\\cite{bib.bib1, bib.bib2}"));
    assert!(intro_text.contains("f(x)"));
    assert!(intro_text.contains("studied"));

    let results_text = document.sections[1].text.as_deref().expect("results text");
    assert!(results_text.contains("E = mc^2"));
}

#[test]
fn parent_text_excludes_subsection_text() {
    let document = parse_fixture();

    let intro_text = document.sections[0].text.as_deref().unwrap();
    let child_text = document.sections[0].subsections[0]
        .text
        .as_deref()
        .unwrap();

    assert!(child_text.contains("Child motivation text."));
    assert!(!intro_text.contains("Child motivation"));
}

#[test]
fn references_table_in_document_order() {
    let document = parse_fixture();

    let keys: Vec<_> = document.references.keys().cloned().collect();
    assert_eq!(keys, vec!["bib.bib1", "bib.bib2"]);

    let first = &document.references["bib.bib1"];
    assert_eq!(first.authors, "Smith, J.");
    assert_eq!(first.title, "A Great Paper");
    assert_eq!(first.journal, "Nature, 2020");

    let second = &document.references["bib.bib2"];
    assert!(!second.title.is_empty());
    assert_ne!(second.title, second.authors);
}

#[test]
fn sparse_documents_degrade_to_empty_values() {
    let document = parse_document("<html><body><p>Just a paragraph.</p></body></html>").unwrap();

    assert_eq!(document.title, "");
    assert_eq!(document.abstract_text, "");
    assert!(document.sections.is_empty());
    assert!(document.references.is_empty());
}

#[test]
fn document_serializes_with_expected_field_names() {
    let document = parse_fixture();
    let json = serde_json::to_string(&document).unwrap();

    assert!(json.contains("\"abstract\""));
    assert!(json.contains("\"subsections\""));
    assert!(json.contains("\"references\""));
}
