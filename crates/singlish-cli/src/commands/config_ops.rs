use std::fs;

use singlish_core::{lexicon, overrides, phoneme, settings};

pub fn mapping_export() {
    print!("{}", phoneme::default_toml());
}

pub fn mapping_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let rules = die!(phoneme::parse_mapping_toml(&content), "Error: {}");
    println!(
        "OK: {} graphemes, {} rules, longest source {} bytes",
        rules.len(),
        rules.rules().count(),
        rules.max_source_len()
    );
}

pub fn overrides_export() {
    print!("{}", overrides::default_toml());
}

pub fn overrides_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let entries = die!(overrides::parse_overrides_toml(&content), "Error: {}");
    let multi = entries.iter().filter(|(k, _)| k.contains(' ')).count();
    println!("OK: {} overrides ({multi} multi-word)", entries.len());
}

pub fn lexicon_export() {
    print!("{}", lexicon::default_toml());
}

pub fn lexicon_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let lex = die!(lexicon::parse_lexicon_toml(&content), "Error: {}");
    println!(
        "OK: {} foreign words, {} Singlish words",
        lex.len(),
        lex.singlish_len()
    );
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: guard.enabled={}, guard.english_ratio={}, guard.min_words={}",
        s.guard.enabled, s.guard.english_ratio, s.guard.min_words
    );
    println!(
        "    classifier.abbreviation_min_len={}, mapper.fold_initial_capital={}",
        s.classifier.abbreviation_min_len, s.mapper.fold_initial_capital
    );
}
