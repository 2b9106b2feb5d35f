fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_toml(
        "src/phoneme/default_mapping.toml",
        include_str!("src/phoneme/default_mapping.toml"),
    );
    validate_toml(
        "src/overrides/default_overrides.toml",
        include_str!("src/overrides/default_overrides.toml"),
    );
    validate_toml(
        "src/lexicon/default_lexicon.toml",
        include_str!("src/lexicon/default_lexicon.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    println!("cargo:rerun-if-changed={path}");
    if content.parse::<toml::Table>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
