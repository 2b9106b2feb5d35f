//! Pass-through guard: decides which spans are emitted verbatim.
//!
//! Everything except a Romanized word passes through unconditionally. A
//! Romanized word also passes through when its sentence reads as English, so
//! a stray unknown English word inside an English sentence is not mangled.
//! Any known Singlish word in a sentence rules that out: mixed sentences
//! always transliterate their Singlish words.

use crate::lexicon::Lexicon;
use crate::settings::GuardSettings;
use crate::span::{Span, SpanKind};
use crate::unicode;

/// Per-span facts the guard needs beyond the span itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuardContext {
    pub sentence_is_english: bool,
}

/// Pure decision over the closed span tag set.
pub fn should_pass_through(span: &Span, ctx: GuardContext) -> bool {
    match span.kind {
        SpanKind::ForeignLiteral
        | SpanKind::Numeral
        | SpanKind::Punctuation
        | SpanKind::Whitespace => true,
        SpanKind::Romanized => ctx.sentence_is_english,
    }
}

/// Guard decision for every span, in order.
pub fn decide(spans: &[Span], lexicon: &Lexicon, settings: &GuardSettings) -> Vec<bool> {
    let mut decisions = Vec::with_capacity(spans.len());
    for sentence in sentences(spans) {
        let ctx = GuardContext {
            sentence_is_english: settings.enabled && is_english(sentence, lexicon, settings),
        };
        decisions.extend(sentence.iter().map(|s| should_pass_through(s, ctx)));
    }
    decisions
}

/// Split at punctuation spans that end a sentence; the terminator stays with
/// the sentence it closes.
fn sentences(spans: &[Span]) -> impl Iterator<Item = &[Span]> {
    spans.split_inclusive(is_terminator)
}

fn is_terminator(span: &Span) -> bool {
    span.kind == SpanKind::Punctuation && span.text.contains(['.', '?', '!'])
}

/// Latin-letter words only; text already in another script does not vote.
fn is_english(sentence: &[Span], lexicon: &Lexicon, settings: &GuardSettings) -> bool {
    let mut words = 0usize;
    let mut foreign = 0usize;
    for span in sentence {
        if !span.kind.is_word() || !span.text.starts_with(unicode::is_latin) {
            continue;
        }
        words += 1;
        match span.kind {
            SpanKind::ForeignLiteral => foreign += 1,
            _ if lexicon.is_singlish(&span.text) => return false,
            _ => {}
        }
    }
    words >= settings.min_words && foreign as f64 >= settings.english_ratio * words as f64
}
