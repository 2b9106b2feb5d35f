use serde::Serialize;

/// Closed set of tags the classifier assigns to input regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    Romanized,
    ForeignLiteral,
    Numeral,
    Punctuation,
    Whitespace,
}

impl SpanKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SpanKind::Romanized => "romanized",
            SpanKind::ForeignLiteral => "foreign",
            SpanKind::Numeral => "numeral",
            SpanKind::Punctuation => "punctuation",
            SpanKind::Whitespace => "whitespace",
        }
    }

    /// Romanized and foreign spans are the "words" of a sentence.
    pub fn is_word(self) -> bool {
        matches!(self, SpanKind::Romanized | SpanKind::ForeignLiteral)
    }
}

/// A typed region of the input. `start..end` are byte offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(input: &str, kind: SpanKind, start: usize, end: usize) -> Self {
        Self {
            text: input[start..end].to_string(),
            kind,
            start,
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
