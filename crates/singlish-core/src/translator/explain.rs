use serde::Serialize;

use crate::classifier::classify;
use crate::phoneme::{PhonemeMapper, Unit};
use crate::span::SpanKind;
use crate::tables::Tables;

use super::{render_pieces, translate, Route};

/// Full diagnostic result for one input.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub output: String,
    pub pieces: Vec<ExplainPiece>,
}

/// One rendered piece: a single span, or the spans of a multi-word override.
#[derive(Debug, Serialize)]
pub struct ExplainPiece {
    pub source: String,
    pub kinds: Vec<SpanKind>,
    pub start: usize,
    pub end: usize,
    /// `verbatim`, `override` or `mapped`.
    pub route: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub rendered: String,
    /// Phoneme units, for mapped pieces only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub units: Vec<Unit>,
}

pub fn explain(tables: &Tables, input: &str) -> ExplainResult {
    let spans = classify(input, &tables.lexicon, &tables.settings.classifier);
    let mapper = PhonemeMapper::new(&tables.rules, tables.settings.mapper.fold_initial_capital);

    let pieces = render_pieces(tables, input, &spans)
        .into_iter()
        .map(|piece| {
            let covered = &spans[piece.spans.clone()];
            let start = covered.first().map_or(0, |s| s.start);
            let end = covered.last().map_or(start, |s| s.end);
            let source = input[start..end].to_string();
            let (route, pattern, units) = match piece.route {
                Route::Verbatim => ("verbatim", None, Vec::new()),
                Route::Override { pattern } => ("override", Some(pattern), Vec::new()),
                Route::Mapped => ("mapped", None, mapper.render(mapper.segment(&source))),
            };
            ExplainPiece {
                source,
                kinds: covered.iter().map(|s| s.kind).collect(),
                start,
                end,
                route,
                pattern,
                rendered: piece.text,
                units,
            }
        })
        .collect();

    ExplainResult {
        input: input.to_string(),
        output: translate(tables, input).output,
        pieces,
    }
}

/// Format an ExplainResult as human-readable text.
pub fn format_text(result: &ExplainResult) -> String {
    use unicode_width::UnicodeWidthStr;
    let mut out = String::new();

    out.push_str(&format!(
        "=== \"{}\" ({} pieces) ===\n",
        result.input,
        result.pieces.len()
    ));

    for piece in &result.pieces {
        if piece.kinds == [SpanKind::Whitespace] {
            continue;
        }
        let pad_width = 16;
        let display_width = UnicodeWidthStr::width(piece.source.as_str());
        let padded = if display_width < pad_width {
            format!("{}{}", piece.source, " ".repeat(pad_width - display_width))
        } else {
            piece.source.clone()
        };
        let kinds: Vec<&str> = piece.kinds.iter().map(|k| k.as_str()).collect();
        out.push_str(&format!(
            "  [{},{}] {} {:<9} {:<12} -> {}\n",
            piece.start,
            piece.end,
            padded,
            piece.route,
            kinds.join("+"),
            piece.rendered,
        ));
        if let Some(pattern) = &piece.pattern {
            out.push_str(&format!("      pattern: {}\n", pattern));
        }
        if !piece.units.is_empty() {
            let units: Vec<String> = piece
                .units
                .iter()
                .map(|u| match u.class {
                    Some(_) => format!("{}={}", u.source, u.target),
                    None => format!("{}=?", u.source),
                })
                .collect();
            out.push_str(&format!("      units: {}\n", units.join(" ")));
        }
    }

    out.push_str(&format!("\n=> {}\n", result.output));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_routes() {
        let tables = Tables::load_default().unwrap();
        let result = explain(&tables, "sri lankava zoom ekak");

        let routes: Vec<&str> = result
            .pieces
            .iter()
            .filter(|p| p.kinds != [SpanKind::Whitespace])
            .map(|p| p.route)
            .collect();
        assert_eq!(routes, vec!["override", "verbatim", "mapped"]);

        let sri = &result.pieces[0];
        assert_eq!(sri.source, "sri lankava");
        assert_eq!(sri.pattern.as_deref(), Some("sri lankava"));
        assert_eq!(sri.kinds.len(), 3);

        let ekak = result.pieces.last().unwrap();
        assert_eq!(ekak.units.len(), 4);
        assert_eq!(
            result.output,
            translate(&tables, "sri lankava zoom ekak").output
        );
    }

    #[test]
    fn test_format_text() {
        let tables = Tables::load_default().unwrap();
        let text = format_text(&explain(&tables, "mama"));
        assert!(text.contains("mapped"));
        assert!(text.contains("units: m="));
        assert!(text.contains("=> \u{0DB8}\u{0DB8}"));
    }

    #[test]
    fn test_explain_empty() {
        let tables = Tables::load_default().unwrap();
        let result = explain(&tables, "");
        assert!(result.pieces.is_empty());
        assert_eq!(result.output, "");
    }
}
