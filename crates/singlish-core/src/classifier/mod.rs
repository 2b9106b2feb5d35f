//! Token classifier: splits raw input into typed, contiguous spans.
//!
//! Evaluated left to right with greedy maximal runs:
//! letters (foreign or romanized), digits with inner separators,
//! whitespace, non-ASCII letters (already-native text), then anything else.

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::lexicon::Lexicon;
use crate::settings::ClassifierSettings;
use crate::span::{Span, SpanKind};
use crate::unicode;

/// Split `input` into spans that partition it exactly.
pub fn classify(input: &str, lexicon: &Lexicon, settings: &ClassifierSettings) -> Vec<Span> {
    let _span = debug_span!("classify", len = input.len()).entered();

    let mut spans = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];
        let Some(first) = rest.chars().next() else {
            break;
        };

        let (kind, len) = if first.is_ascii_alphabetic() {
            let len = letter_run_len(rest);
            let kind = if lexicon.is_foreign(&rest[..len], settings) {
                SpanKind::ForeignLiteral
            } else {
                SpanKind::Romanized
            };
            (kind, len)
        } else if first.is_ascii_digit() {
            (SpanKind::Numeral, numeral_run_len(rest))
        } else if first.is_whitespace() {
            (SpanKind::Whitespace, run_len(rest, char::is_whitespace))
        } else if is_native_char(first) {
            (SpanKind::ForeignLiteral, run_len(rest, is_native_char))
        } else {
            (SpanKind::Punctuation, run_len(rest, is_punctuation_char))
        };

        spans.push(Span::new(input, kind, pos, pos + len));
        pos += len;
    }

    debug!(span_count = spans.len());
    spans
}

/// Byte length of the leading run of chars satisfying `pred`.
fn run_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(s.len(), |(i, _)| i)
}

/// ASCII letters, with an apostrophe kept only between two letters (`don't`).
pub(crate) fn letter_run_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_alphabetic() {
            i += 1;
        } else if bytes[i] == b'\''
            && i > 0
            && bytes.get(i + 1).is_some_and(u8::is_ascii_alphabetic)
        {
            i += 1;
        } else {
            break;
        }
    }
    i
}

/// ASCII digits, with `.`, `:` or `-` kept only when a digit follows (`2.30`, `10:15`).
fn numeral_run_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            i += 1;
        } else if matches!(bytes[i], b'.' | b':' | b'-')
            && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
        {
            i += 1;
        } else {
            break;
        }
    }
    i
}

/// Letters of other scripts, plus Sinhala signs and joiners that are not
/// Unicode-alphabetic (al-lakuna, ZWJ) so native words stay in one span.
fn is_native_char(c: char) -> bool {
    !c.is_ascii() && (c.is_alphabetic() || unicode::is_sinhala(c) || unicode::is_joiner(c))
}

fn is_punctuation_char(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || c.is_whitespace() || is_native_char(c))
}
