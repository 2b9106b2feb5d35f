//! Engine settings loaded from TOML.
//!
//! Default values are embedded via `include_str!("default_settings.toml")`.
//! A parsed [`Settings`] is an immutable value carried inside
//! [`Tables`](crate::tables::Tables); there is no process-wide instance.

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub classifier: ClassifierSettings,
    pub mapper: MapperSettings,
    pub guard: GuardSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierSettings {
    pub abbreviation_min_len: usize,
    pub camel_case_is_foreign: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapperSettings {
    pub fold_initial_capital: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuardSettings {
    pub enabled: bool,
    pub english_ratio: f64,
    pub min_words: usize,
}

impl Settings {
    pub fn load_default() -> Result<Self, SettingsError> {
        parse_settings_toml(DEFAULT_SETTINGS_TOML)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(classifier.abbreviation_min_len);
    check_positive_usize!(guard.min_words);

    let ratio = s.guard.english_ratio;
    if !(ratio > 0.0 && ratio <= 1.0) {
        return Err(SettingsError::InvalidValue {
            field: "guard.english_ratio".to_string(),
            reason: "must be in (0.0, 1.0]".to_string(),
        });
    }

    Ok(())
}
