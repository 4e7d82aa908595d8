//! Cleanup pass for extracted text.
//!
//! LaTeXML renderings leak formatting macros (`mathbf`, `textsc`, ...) and
//! spacing artifacts into the visible text. The cleaner deletes a fixed set
//! of noise tokens, collapses whitespace and empty citation brackets, and
//! restores a space after sentence-ending periods.

use std::sync::LazyLock;

use regex::Regex;

/// Noise tokens deleted wherever they occur, including as substrings.
const DEFAULT_DENYLIST: &[&str] = &[
    "=-1", "\t", "\u{a0}", "[]", "()", "mathbb", "mathcal", "bm", "mathrm", "mathit", "mathbf",
    "mathbfcal", "textbf", "textsc", "langle", "rangle", "mathbin",
];

static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("valid space regex"));

/// Empty-looking citation leftovers: runs of `[` / `,` closed by `]`.
static EMPTY_CITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[,]+\]").expect("valid citation artifact regex"));

/// Configurable text cleanup.
///
/// The denylist is passed in at construction so tests can override it
/// without touching shared state.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    denylist: Vec<String>,
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self {
            denylist: DEFAULT_DENYLIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TextCleaner {
    pub fn with_denylist(denylist: Vec<String>) -> Self {
        Self { denylist }
    }

    /// Clean one piece of extracted text. Infallible; may return an empty
    /// string.
    ///
    /// Runs the rewrite pass to a fixpoint: a removal can expose a new
    /// artifact ("(())" leaves "()" behind), and cleaning must be idempotent
    /// so downstream consumers can re-clean stored text safely. Every
    /// rewrite either deletes non-space characters or settles spacing, so
    /// the loop terminates.
    pub fn clean(&self, text: &str) -> String {
        let mut text = text.to_string();
        loop {
            let next = self.clean_pass(&text);
            if next == text {
                return next;
            }
            text = next;
        }
    }

    fn clean_pass(&self, text: &str) -> String {
        let mut text = text.to_string();
        for token in &self.denylist {
            if text.contains(token.as_str()) {
                text = text.replace(token.as_str(), "");
            }
        }
        text = MULTI_SPACE.replace_all(&text, " ").into_owned();
        text = EMPTY_CITE.replace_all(&text, "").into_owned();
        text = space_after_periods(&text);
        // The period rule splits citation keys like "bib.bib12".
        text.replace("bib. bib", "bib.bib")
    }
}

/// Ensure a space follows every period, except before digits so decimal
/// numbers like "3.14" stay intact.
fn space_after_periods(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '.' {
            match chars.peek() {
                Some(next) if next.is_ascii_digit() || *next == ' ' => {}
                _ => out.push(' '),
            }
        }
    }
    out
}
