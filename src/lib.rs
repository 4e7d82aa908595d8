//! # arxtract
//!
//! Structure extraction for scholarly HTML documents (LaTeXML renderings of
//! academic papers).
//!
//! ## Features
//!
//! - Hierarchical outline built from headings, anchored to section containers
//! - Recursive body-text extraction with math and citation-marker rendering
//! - Best-effort bibliography parsing into authors/title/venue
//! - Stop-word filtering of back-matter sections
//! - JSON persistence of the extracted document
//!
//! ## Quick Start
//!
//! ```no_run
//! use arxtract::{parse_document, storage};
//!
//! let html = std::fs::read_to_string("paper.html").unwrap();
//! let document = parse_document(&html).unwrap();
//!
//! println!("{} ({} sections)", document.title, document.sections.len());
//! storage::save(&document, "paper.json").unwrap();
//! ```
//!
//! ## Working with Documents
//!
//! The [`Document`] struct is the central data type: title, abstract, the
//! filtered section tree, and the citation table keyed by bibliography id.
//! Extraction is a pure tree walk over an in-memory [`dom::Dom`]; missing
//! optional structure (abstract, bibliography) degrades to empty values
//! instead of failing.

pub mod dom;
pub mod error;
pub mod extract;
pub mod freetext;
pub mod model;
pub mod storage;

pub use dom::{parse_html, Dom};
pub use error::{Error, Result};
pub use extract::bib::parse_metadata;
pub use extract::clean::TextCleaner;
pub use extract::toc::{build_toc, SectionFilter};
pub use extract::{extract_document, parse_document};
pub use model::{Citation, Document, Section};
