//! Property-based tests for the translation pipeline.
//!
//! Generates mixed Singlish / English / numeral / punctuation text and
//! checks the invariants that must hold for any input.

use proptest::prelude::*;

use super::*;
use crate::classifier::classify;

fn arb_word() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(vec![
            "mama", "api", "yanawaa", "ekak", "rathriyak", "sri", "lankava",
            "bn", "oone", "yuShmathaa", "kaema",
        ])
        .prop_map(str::to_string),
        2 => prop::sample::select(vec![
            "zoom", "meeting", "the", "best", "WhatsApp", "RS", "CV", "don't",
        ])
        .prop_map(str::to_string),
        2 => "[a-zA-Z]{1,8}",
        1 => "[0-9]{1,3}([.:][0-9]{1,2})?",
        1 => prop::sample::select(vec!["මම", "ශ්\u{200D}රී", "ලංකාව"]).prop_map(str::to_string),
    ]
}

fn arb_gap() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => Just(" ".to_string()),
        1 => "[ \t\n]{1,5}",
        1 => prop::sample::select(vec![". ", "? ", "!!! ", ", ", "-"]).prop_map(str::to_string),
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec((arb_word(), arb_gap()), 0..12).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(w, g)| format!("{w}{g}"))
            .collect::<String>()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn spans_partition_any_string(input in any::<String>()) {
        let tables = Tables::load_default().unwrap();
        let spans = classify(&input, &tables.lexicon, &tables.settings.classifier);
        let mut pos = 0;
        for span in &spans {
            prop_assert_eq!(span.start, pos);
            prop_assert!(!span.is_empty());
            prop_assert_eq!(&input[span.start..span.end], span.text.as_str());
            pos = span.end;
        }
        prop_assert_eq!(pos, input.len());
    }

    #[test]
    fn translation_is_deterministic(input in arb_text()) {
        let translator = default_translator();
        let a = translator.translate(&input);
        let b = translator.translate(&input);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn span_map_tiles_input_and_output(input in arb_text()) {
        let result = default_translator().translate(&input);

        let rebuilt: String = result.span_map.iter().map(|m| m.input.text.as_str()).collect();
        prop_assert_eq!(rebuilt, input.clone());

        let mut end = 0;
        for m in &result.span_map {
            prop_assert!(m.output.start <= m.output.end);
            prop_assert!(m.output.start == end || m.output.end == end);
            prop_assert!(result.output.is_char_boundary(m.output.start));
            end = m.output.end;
        }
        prop_assert_eq!(end, result.output.len());
    }

    #[test]
    fn non_romanized_spans_pass_verbatim(input in arb_text()) {
        let result = default_translator().translate(&input);
        for m in &result.span_map {
            if m.input.kind != SpanKind::Romanized && m.passed_through {
                let expected = normalize(&m.input.text);
                prop_assert_eq!(&result.output[m.output.clone()], expected.as_str());
            }
        }
    }

    #[test]
    fn whitespace_preserved(input in arb_text()) {
        let result = default_translator().translate(&input);
        let ws_in: String = input.chars().filter(|c| c.is_whitespace()).collect();
        let ws_out: String = result.output.chars().filter(|c| c.is_whitespace()).collect();
        prop_assert_eq!(ws_in, ws_out);
    }

    #[test]
    fn output_empty_only_for_empty_input(input in arb_text()) {
        let result = default_translator().translate(&input);
        prop_assert_eq!(result.output.is_empty(), input.is_empty());
    }
}
