//! Best-effort recovery of a JSON object from free-form model output.
//!
//! Models are told to answer with bare JSON but routinely wrap it in prose or
//! markdown fences. Nothing in here fails: when no object can be recovered the
//! result is an empty [`ParsedResult`] and callers fall back to defaults.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Structured fields recovered from a model response.
///
/// An open mapping: keys depend on the prompt that produced the response.
/// Accessors take explicit defaults so a missing key never becomes an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedResult(Map<String, Value>);

impl ParsedResult {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value for `key`, or `default` when the key is missing or null.
    ///
    /// Non-string values are rendered as compact JSON.
    pub fn get_str(&self, key: &str, default: &str) -> String {
        match self.0.get(key) {
            None | Some(Value::Null) => default.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// List of strings for `key`.
    ///
    /// A single string becomes a one-element list, null items are dropped and
    /// other non-string items are rendered as compact JSON. Anything else
    /// yields an empty list.
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        match self.0.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::Null => None,
                    Value::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                })
                .collect(),
            Some(Value::String(s)) => vec![s.clone()],
            _ => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Extract the first JSON object embedded in `raw`.
///
/// Fenced code blocks are tried first, in order. Otherwise the text is
/// scanned for balanced `{...}` spans and the first span, by start position,
/// that decodes to an object wins. Arrays and scalars are never returned: a
/// top-level array only contributes through the objects nested inside it.
pub fn extract_json(raw: &str) -> ParsedResult {
    let trimmed = raw.trim();

    for block in extract_fenced_blocks(trimmed) {
        if let Some(map) = decode_object(block.trim()) {
            debug!(keys = map.len(), "extracted JSON from fenced block");
            return ParsedResult(map);
        }
    }

    if let Some((offset, map)) = find_embedded_object(trimmed) {
        debug!(keys = map.len(), offset, "extracted embedded JSON");
        return ParsedResult(map);
    }

    debug!(raw_len = raw.len(), "no JSON object found in response");
    ParsedResult::default()
}

fn decode_object(candidate: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// First balanced `{...}` span in `text` that decodes to an object.
///
/// Each byte is scanned once: a span that fails to decode is skipped as a
/// whole after its nested spans have been tried, and a span left open at the
/// end of the text ends the search.
fn find_embedded_object(text: &str) -> Option<(usize, Map<String, Value>)> {
    let mut from = 0;

    while let Some(relative) = text[from..].find('{') {
        let start = from + relative;
        let scan = scan_spans(text, start);

        for (span_start, span_end) in scan.spans {
            if let Some(map) = decode_object(&text[span_start..=span_end]) {
                return Some((span_start, map));
            }
        }

        from = scan.end? + 1;
    }

    None
}

struct SpanScan {
    /// Byte index closing the bracket at the scan start, if any.
    end: Option<usize>,
    /// Closed `{...}` spans seen during the scan, ordered by start.
    spans: Vec<(usize, usize)>,
}

/// Scan forward from the bracket at `start`, recording every `{...}` span
/// that closes before the outer one does.
///
/// Brackets inside string literals are ignored. Mismatched closers (`{]`)
/// still pop; such spans simply fail to decode.
fn scan_spans(text: &str, start: usize) -> SpanScan {
    let mut open: Vec<(usize, u8)> = Vec::new();
    let mut spans = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (offset, byte) in text.as_bytes()[start..].iter().enumerate() {
        let index = start + offset;

        if in_string {
            if escaped {
                escaped = false;
            } else if *byte == b'\\' {
                escaped = true;
            } else if *byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => open.push((index, *byte)),
            b'}' | b']' => {
                if let Some((opened_at, opener)) = open.pop() {
                    if opener == b'{' {
                        spans.push((opened_at, index));
                    }
                }
                if open.is_empty() {
                    spans.sort_unstable_by_key(|&(span_start, _)| span_start);
                    return SpanScan {
                        end: Some(index),
                        spans,
                    };
                }
            }
            _ => {}
        }
    }

    spans.sort_unstable_by_key(|&(span_start, _)| span_start);
    SpanScan { end: None, spans }
}

/// Extract all fenced code blocks from text.
fn extract_fenced_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("```") {
        let after_fence = &remaining[start + 3..];
        // Skip optional language identifier on the same line
        let content_start = after_fence.find('\n').map(|i| i + 1).unwrap_or(0);
        let content = &after_fence[content_start..];
        if let Some(end) = content.find("```") {
            blocks.push(&content[..end]);
            remaining = &content[end + 3..];
        } else {
            break;
        }
    }

    blocks
}
