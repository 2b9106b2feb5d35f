use super::*;

#[test]
fn test_override_precedence() {
    assert_eq!(tr("sri lankava"), "ශ්\u{200D}රී ලංකාව");
    assert_eq!(
        tr("hamudhuruvo dhaanee valadhanavaa"),
        "හාමුදුරුවො දානේ වලදනවා"
    );
    assert_eq!(tr("kohedha bn yanne?"), "කොහෙද බන් යන්නෙ?");
}

#[test]
fn test_override_case_insensitive() {
    assert_eq!(tr("Sri Lankava"), tr("sri lankava"));
    assert_eq!(tr("SINHALA"), "SINHALA");
    assert_eq!(tr("Sinhala"), "සිංහල");
}

#[test]
fn test_multi_word_override_keeps_whitespace() {
    assert_eq!(
        tr("Sri   Lanka lassanai"),
        "ශ්\u{200D}රී   ලංකා ලස්සනෛ"
    );
    assert_eq!(tr("mata   sinhala  epaa"), "මට   සිංහල  එපා");
}

#[test]
fn test_override_span_map() {
    let result = default_translator().translate("sri lankava yamu");
    let sri: Vec<&SpanMapping> = result
        .span_map
        .iter()
        .filter(|m| m.input.start < "sri lankava".len())
        .collect();
    assert_eq!(sri.len(), 3);
    assert!(sri.iter().all(|m| m.output == sri[0].output));
    assert!(sri.iter().all(|m| !m.passed_through));
    assert_eq!(&result.output[sri[0].output.clone()], "ශ්\u{200D}රී ලංකාව");
}

#[test]
fn test_override_not_applied_to_prefix() {
    // "lankavata" is not "lankava"; it goes through the mapper.
    let out = tr("lankavata");
    assert_ne!(out, "ලංකාව");
    assert!(!out.starts_with("ලංකාව"));
}

#[test]
fn test_custom_override_table() {
    let tables = Tables::builder()
        .overrides_toml("[overrides]\n\"mama\" = \"අපි\"\n")
        .build()
        .unwrap();
    assert_eq!(translate(&tables, "mama yanawaa").output, "අපි යනවා");
    // Default overrides are gone with the swap.
    assert_ne!(translate(&tables, "bn").output, "බන්");
}
