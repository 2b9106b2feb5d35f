use super::*;

fn classify_default(input: &str) -> Vec<Span> {
    let lexicon = Lexicon::load_default().unwrap();
    let settings = ClassifierSettings {
        abbreviation_min_len: 2,
        camel_case_is_foreign: true,
    };
    classify(input, &lexicon, &settings)
}

fn kinds(spans: &[Span]) -> Vec<(&str, SpanKind)> {
    spans.iter().map(|s| (s.text.as_str(), s.kind)).collect()
}

#[test]
fn test_empty() {
    assert!(classify_default("").is_empty());
}

#[test]
fn test_mixed_sentence() {
    let spans = classify_default("zoom meeting ekak gamu");
    assert_eq!(
        kinds(&spans),
        vec![
            ("zoom", SpanKind::ForeignLiteral),
            (" ", SpanKind::Whitespace),
            ("meeting", SpanKind::ForeignLiteral),
            (" ", SpanKind::Whitespace),
            ("ekak", SpanKind::Romanized),
            (" ", SpanKind::Whitespace),
            ("gamu", SpanKind::Romanized),
        ]
    );
}

#[test]
fn test_numeral_glued_to_word() {
    let spans = classify_default("Mama 2.30ta pahala");
    assert_eq!(
        kinds(&spans),
        vec![
            ("Mama", SpanKind::Romanized),
            (" ", SpanKind::Whitespace),
            ("2.30", SpanKind::Numeral),
            ("ta", SpanKind::Romanized),
            (" ", SpanKind::Whitespace),
            ("pahala", SpanKind::Romanized),
        ]
    );
}

#[test]
fn test_trailing_separator_not_numeral() {
    let spans = classify_default("7. 10:15 2-3-");
    assert_eq!(
        kinds(&spans),
        vec![
            ("7", SpanKind::Numeral),
            (".", SpanKind::Punctuation),
            (" ", SpanKind::Whitespace),
            ("10:15", SpanKind::Numeral),
            (" ", SpanKind::Whitespace),
            ("2-3", SpanKind::Numeral),
            ("-", SpanKind::Punctuation),
        ]
    );
}

#[test]
fn test_whitespace_run_preserved() {
    let spans = classify_default("kaema             kanne");
    assert_eq!(spans.len(), 3);
    assert_eq!(spans[1].kind, SpanKind::Whitespace);
    assert_eq!(spans[1].len(), 13);
}

#[test]
fn test_punctuation_run() {
    let spans = classify_default("Epaa!!! ohoma");
    assert_eq!(
        kinds(&spans),
        vec![
            ("Epaa", SpanKind::Romanized),
            ("!!!", SpanKind::Punctuation),
            (" ", SpanKind::Whitespace),
            ("ohoma", SpanKind::Romanized),
        ]
    );
}

#[test]
fn test_abbreviation_and_camel_case() {
    let spans = classify_default("RS. 1000 WhatsApp karala");
    assert_eq!(
        kinds(&spans),
        vec![
            ("RS", SpanKind::ForeignLiteral),
            (".", SpanKind::Punctuation),
            (" ", SpanKind::Whitespace),
            ("1000", SpanKind::Numeral),
            (" ", SpanKind::Whitespace),
            ("WhatsApp", SpanKind::ForeignLiteral),
            (" ", SpanKind::Whitespace),
            ("karala", SpanKind::Romanized),
        ]
    );
}

#[test]
fn test_apostrophe_inside_word() {
    let spans = classify_default("don't 'eka'");
    assert_eq!(
        kinds(&spans),
        vec![
            ("don't", SpanKind::ForeignLiteral),
            (" ", SpanKind::Whitespace),
            ("'", SpanKind::Punctuation),
            ("eka", SpanKind::Romanized),
            ("'", SpanKind::Punctuation),
        ]
    );
}

#[test]
fn test_native_script_is_foreign() {
    let spans = classify_default("මම yanawa ශ්\u{200D}රී");
    assert_eq!(
        kinds(&spans),
        vec![
            ("මම", SpanKind::ForeignLiteral),
            (" ", SpanKind::Whitespace),
            ("yanawa", SpanKind::Romanized),
            (" ", SpanKind::Whitespace),
            ("ශ්\u{200D}රී", SpanKind::ForeignLiteral),
        ]
    );
}

#[test]
fn test_glued_tokens_not_split() {
    // No separator between a Singlish and an English token: one letter run.
    let spans = classify_default("meetingekak");
    assert_eq!(kinds(&spans), vec![("meetingekak", SpanKind::Romanized)]);
}

#[test]
fn test_offsets_partition_input() {
    let input = "Thank you. oyaa dhiipu thaegga, 24 - ok!";
    let spans = classify_default(input);
    let mut pos = 0;
    for s in &spans {
        assert_eq!(s.start, pos);
        assert_eq!(&input[s.start..s.end], s.text);
        pos = s.end;
    }
    assert_eq!(pos, input.len());
}
