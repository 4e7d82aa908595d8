//! Best-effort extractors for model-generated free text.
//!
//! These operate on arbitrary text, not on the markup tree: a reply that
//! should contain a list literal, a mapping literal, pad-delimited content,
//! or a fenced code block. Each extractor first normalizes full-width
//! punctuation to ASCII and escapes raw newlines inside quoted strings,
//! then fails with the offending input attached when the delimited content
//! cannot be found or parsed.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{Error, Result};

const PUNCTUATION_MAP: &[(&str, &str)] = &[
    ("\u{ff0c}", ","),
    ("\u{2018}", "'"),
    ("\u{2019}", "'"),
    // Curly double quotes must become ASCII double quotes: the delimited
    // content is parsed as JSON, which has no single-quoted strings.
    ("\u{201c}", "\""),
    ("\u{201d}", "\""),
    ("\u{3002}", "."),
    ("\u{ff1a}", ":"),
    ("\u{ff1b}", ";"),
    ("\u{ff1f}", "?"),
    ("\u{3010}", "["),
    ("\u{3011}", "]"),
    ("\u{ff08}", "("),
    ("\u{ff09}", ")"),
    ("\u{ff01}", "!"),
    ("\u{2014}", "-"),
    ("\u{2026}", "..."),
];

static QUOTED_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)".*?""#).expect("valid quoted span regex"));

static START_PAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)=start_pad=").expect("valid start pad regex"));
static END_PAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)=end_pad=").expect("valid end pad regex"));

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```([\w \t]*)\n(.*?)```").expect("valid code fence regex"));

/// Replace full-width punctuation with ASCII equivalents and escape literal
/// newlines inside double-quoted spans.
pub fn normalize_punctuation(text: &str) -> String {
    let mut text = text.to_string();
    for (wide, ascii) in PUNCTUATION_MAP {
        text = text.replace(wide, ascii);
    }
    QUOTED_SPAN
        .replace_all(&text, |caps: &regex::Captures| {
            caps[0].replace('\n', "\\n")
        })
        .into_owned()
}

/// Extract the first well-formed list literal between the first `[` and the
/// last `]`.
pub fn extract_list(text: &str) -> Result<Vec<Value>> {
    let normalized = normalize_punctuation(text);
    let slice = delimited(&normalized, '[', ']').ok_or_else(|| malformed("list", text))?;
    match serde_json::from_str::<Value>(slice) {
        Ok(Value::Array(items)) => Ok(items),
        _ => Err(malformed("list", text)),
    }
}

/// Extract the first well-formed mapping literal between the first `{` and
/// the last `}`.
pub fn extract_map(text: &str) -> Result<serde_json::Map<String, Value>> {
    let normalized = normalize_punctuation(text);
    let slice = delimited(&normalized, '{', '}').ok_or_else(|| malformed("mapping", text))?;
    match serde_json::from_str::<Value>(slice) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(malformed("mapping", text)),
    }
}

/// Extract the content between `=start_pad=` and the last `=end_pad=`,
/// case-insensitively, trimmed.
pub fn extract_padded(text: &str) -> Result<String> {
    let normalized = normalize_punctuation(text);
    let start = START_PAD
        .find(&normalized)
        .ok_or_else(|| malformed("pad-delimited content", text))?;
    let end = END_PAD
        .find_iter(&normalized)
        .last()
        .ok_or_else(|| malformed("pad-delimited content", text))?;
    if end.start() < start.end() {
        return Err(malformed("pad-delimited content", text));
    }
    Ok(normalized[start.end()..end.start()].trim().to_string())
}

/// Extract the body of the first fenced code block, trimmed. The info
/// string after the opening fence is ignored.
pub fn extract_code_block(text: &str) -> Result<String> {
    let normalized = normalize_punctuation(text);
    let caps = CODE_FENCE
        .captures(&normalized)
        .ok_or_else(|| malformed("code block", text))?;
    Ok(caps[2].trim().to_string())
}

fn delimited(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

fn malformed(what: &'static str, input: &str) -> Error {
    Error::MalformedLiteral {
        what,
        input: input.to_string(),
    }
}
