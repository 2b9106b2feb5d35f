//! Translation orchestrator.
//!
//! Classify the input, run the pass-through guard, then render each
//! remaining Romanized span through the override table or the phoneme
//! mapper. Every other span is copied verbatim. Rendered pieces are
//! normalized, concatenated, and the whole output is normalized once more.

pub mod explain;

#[cfg(test)]
mod tests;

use std::ops::Range;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::classifier::classify;
use crate::guard;
use crate::normalize::normalize;
use crate::phoneme::PhonemeMapper;
use crate::span::{Span, SpanKind};
use crate::tables::Tables;

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    MalformedInput { valid_up_to: usize },
}

/// One input span and the part of the output it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanMapping {
    pub input: Span,
    /// Byte range into [`TranslationResult::output`].
    pub output: Range<usize>,
    pub passed_through: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    pub output: String,
    /// In input order. Spans consumed by one multi-word override share
    /// the same output range.
    pub span_map: Vec<SpanMapping>,
}

/// How a run of spans was rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    Verbatim,
    Override { pattern: String },
    Mapped,
}

/// A rendered output piece covering `spans` (indices into the span list).
#[derive(Debug, Clone)]
pub(crate) struct Piece {
    pub spans: Range<usize>,
    pub text: String,
    pub route: Route,
}

/// Cheap handle over a shared table snapshot.
#[derive(Debug, Clone)]
pub struct Translator {
    tables: Arc<Tables>,
}

impl Translator {
    pub fn new(tables: Arc<Tables>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &Arc<Tables> {
        &self.tables
    }

    pub fn translate(&self, input: &str) -> TranslationResult {
        translate(&self.tables, input)
    }

    /// Reject invalid UTF-8 up front; nothing is classified on failure.
    pub fn translate_bytes(&self, input: &[u8]) -> Result<TranslationResult, TranslateError> {
        let text = std::str::from_utf8(input).map_err(|e| TranslateError::MalformedInput {
            valid_up_to: e.valid_up_to(),
        })?;
        Ok(self.translate(text))
    }
}

/// Translate `input` against `tables`.
pub fn translate(tables: &Tables, input: &str) -> TranslationResult {
    let _span = debug_span!("translate", len = input.len()).entered();

    let spans = classify(input, &tables.lexicon, &tables.settings.classifier);
    let pieces = render_pieces(tables, input, &spans);
    let result = assemble(spans, &pieces);

    debug!(output_len = result.output.len(), pieces = pieces.len());
    result
}

/// Route every span and render it. Pieces tile the span list in order.
pub(crate) fn render_pieces(tables: &Tables, input: &str, spans: &[Span]) -> Vec<Piece> {
    let decisions = guard::decide(spans, &tables.lexicon, &tables.settings.guard);
    let mapper = PhonemeMapper::new(&tables.rules, tables.settings.mapper.fold_initial_capital);

    let mut pieces = Vec::with_capacity(spans.len());
    let mut i = 0;
    while i < spans.len() {
        let span = &spans[i];
        if decisions[i] || span.kind != SpanKind::Romanized {
            pieces.push(Piece {
                spans: i..i + 1,
                text: span.text.clone(),
                route: Route::Verbatim,
            });
            i += 1;
            continue;
        }

        if let Some(m) = tables.overrides.lookup(&input[span.start..]) {
            let end = span.start + m.consumed;
            if let Some(last) = spans[i..].iter().position(|s| s.end == end) {
                pieces.push(Piece {
                    spans: i..i + last + 1,
                    text: normalize(&m.rendering),
                    route: Route::Override { pattern: m.pattern },
                });
                i += last + 1;
                continue;
            }
        }

        pieces.push(Piece {
            spans: i..i + 1,
            text: normalize(&mapper.map(&span.text)),
            route: Route::Mapped,
        });
        i += 1;
    }
    pieces
}

fn assemble(spans: Vec<Span>, pieces: &[Piece]) -> TranslationResult {
    let joined: String = pieces.iter().map(|p| p.text.as_str()).collect();
    let output = normalize(&joined);
    let ranges = if output == joined {
        exact_ranges(pieces)
    } else {
        debug!("normalization crossed a piece boundary, realigning span map");
        realigned_ranges(pieces, &output)
    };

    let mut span_map = Vec::with_capacity(spans.len());
    let mut spans = spans.into_iter();
    for (piece, range) in pieces.iter().zip(ranges) {
        let passed_through = piece.route == Route::Verbatim;
        for span in spans.by_ref().take(piece.spans.len()) {
            span_map.push(SpanMapping {
                input: span,
                output: range.clone(),
                passed_through,
            });
        }
    }
    TranslationResult { output, span_map }
}

fn exact_ranges(pieces: &[Piece]) -> Vec<Range<usize>> {
    let mut pos = 0;
    pieces
        .iter()
        .map(|p| {
            let start = pos;
            pos += p.text.len();
            start..pos
        })
        .collect()
}

/// Piece ends taken from normalizing each cumulative prefix, clamped to be
/// monotonic, on char boundaries, and to end at `output.len()`.
fn realigned_ranges(pieces: &[Piece], output: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::with_capacity(pieces.len());
    let mut prefix = String::new();
    let mut start = 0;
    for (k, piece) in pieces.iter().enumerate() {
        prefix.push_str(&piece.text);
        let mut end = if k + 1 == pieces.len() {
            output.len()
        } else {
            normalize(&prefix).len().clamp(start, output.len())
        };
        while !output.is_char_boundary(end) {
            end += 1;
        }
        ranges.push(start..end);
        start = end;
    }
    ranges
}
