//! The immutable table bundle consulted by the translator.

use tracing::info;

use crate::lexicon::{self, Lexicon, LexiconConfigError};
use crate::overrides::{self, OverrideConfigError, OverrideTable};
use crate::phoneme::{self, MappingConfigError, RuleSet};
use crate::settings::{self, Settings, SettingsError};

#[derive(Debug, thiserror::Error)]
pub enum TablesError {
    #[error("mapping: {0}")]
    Mapping(#[from] MappingConfigError),
    #[error("overrides: {0}")]
    Overrides(#[from] OverrideConfigError),
    #[error("lexicon: {0}")]
    Lexicon(#[from] LexiconConfigError),
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),
}

/// Rule set, override table, lexicon and settings. Built once and shared
/// behind `Arc`; a new version is a new value.
#[derive(Debug, Clone)]
pub struct Tables {
    pub rules: RuleSet,
    pub overrides: OverrideTable,
    pub lexicon: Lexicon,
    pub settings: Settings,
}

impl Tables {
    /// Build from the embedded defaults.
    pub fn load_default() -> Result<Self, TablesError> {
        TablesBuilder::new().build()
    }

    pub fn builder() -> TablesBuilder {
        TablesBuilder::new()
    }
}

/// Replace any table by TOML text; unset tables use the embedded defaults.
#[derive(Debug, Clone, Default)]
pub struct TablesBuilder {
    mapping: Option<String>,
    overrides: Option<String>,
    lexicon: Option<String>,
    settings: Option<String>,
}

impl TablesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mapping_toml(mut self, toml: impl Into<String>) -> Self {
        self.mapping = Some(toml.into());
        self
    }

    pub fn overrides_toml(mut self, toml: impl Into<String>) -> Self {
        self.overrides = Some(toml.into());
        self
    }

    pub fn lexicon_toml(mut self, toml: impl Into<String>) -> Self {
        self.lexicon = Some(toml.into());
        self
    }

    pub fn settings_toml(mut self, toml: impl Into<String>) -> Self {
        self.settings = Some(toml.into());
        self
    }

    pub fn build(self) -> Result<Tables, TablesError> {
        let rules = phoneme::parse_mapping_toml(
            self.mapping.as_deref().unwrap_or(phoneme::default_toml()),
        )?;
        let overrides = OverrideTable::from_toml(
            self.overrides.as_deref().unwrap_or(overrides::default_toml()),
        )?;
        let lexicon = lexicon::parse_lexicon_toml(
            self.lexicon.as_deref().unwrap_or(lexicon::default_toml()),
        )?;
        let settings = settings::parse_settings_toml(
            self.settings.as_deref().unwrap_or(settings::default_toml()),
        )?;

        info!(
            graphemes = rules.len(),
            overrides = overrides.len(),
            lexicon = lexicon.len(),
            "tables built"
        );
        Ok(Tables {
            rules,
            overrides,
            lexicon,
            settings,
        })
    }
}
