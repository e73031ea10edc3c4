use std::collections::HashMap;
use std::io;

use serde::Deserialize;

use super::{SymbolTable, MAX_TOKEN_LEN};
use crate::unicode::Script;

#[derive(Deserialize)]
struct TableConfig {
    name: String,
    #[serde(default)]
    script: Option<Script>,
    #[serde(default)]
    halant: String,
    #[serde(default)]
    vowels: HashMap<String, String>,
    #[serde(default)]
    matras: HashMap<String, String>,
    #[serde(default)]
    consonants: HashMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid {section} key {key:?}: {reason}")]
    InvalidKey {
        section: &'static str,
        key: String,
        reason: &'static str,
    },
    #[error("empty value for {section} key: {key}")]
    EmptyValue { section: &'static str, key: String },
    #[error("matra {0:?} has no matching vowel")]
    OrphanMatra(String),
    #[error("{0:?} is both a consonant and a vowel")]
    AmbiguousKey(String),
    #[error("matras defined without a halant")]
    MatrasWithoutHalant,
    #[error("no built-in table for language: {0}")]
    UnknownLanguage(String),
}

/// Parse TOML text into a validated `SymbolTable`.
pub fn parse_table_toml(toml_str: &str) -> Result<SymbolTable, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    let table = SymbolTable {
        name: config.name,
        script: config.script,
        halant: config.halant,
        vowels: config.vowels,
        matras: config.matras,
        consonants: config.consonants,
    };
    validate(&table)?;
    Ok(table)
}

fn check_key(section: &'static str, key: &str, lowercase: bool) -> Result<(), TableError> {
    let invalid = |reason| TableError::InvalidKey {
        section,
        key: key.to_string(),
        reason,
    };
    if key.is_empty() {
        return Err(invalid("must not be empty"));
    }
    if !key.is_ascii() {
        return Err(invalid("must be ASCII"));
    }
    if key.len() > MAX_TOKEN_LEN {
        return Err(invalid("longer than 3 characters"));
    }
    if lowercase && key.bytes().any(|b| b.is_ascii_uppercase()) {
        return Err(invalid("must be lowercase"));
    }
    Ok(())
}

/// Check the structural invariants the tokenizer relies on.
pub(crate) fn validate(table: &SymbolTable) -> Result<(), TableError> {
    for (key, value) in &table.vowels {
        check_key("vowels", key, true)?;
        if value.is_empty() {
            return Err(TableError::EmptyValue {
                section: "vowels",
                key: key.clone(),
            });
        }
    }

    if !table.matras.is_empty() && table.halant.is_empty() {
        return Err(TableError::MatrasWithoutHalant);
    }
    // Matra values may be empty: the inherent vowel has no visible sign.
    for key in table.matras.keys() {
        check_key("matras", key, true)?;
        if !table.vowels.contains_key(key) {
            return Err(TableError::OrphanMatra(key.clone()));
        }
    }

    for (key, value) in &table.consonants {
        check_key("consonants", key, false)?;
        if value.is_empty() {
            return Err(TableError::EmptyValue {
                section: "consonants",
                key: key.clone(),
            });
        }
        if table.vowels.contains_key(key) {
            return Err(TableError::AmbiguousKey(key.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
name = "Test"
script = "Devanagari"
halant = "्"

[vowels]
a = "अ"
i = "इ"

[matras]
a = ""
i = "ि"

[consonants]
k = "क"
"#;
        let table = parse_table_toml(toml).unwrap();
        assert_eq!(table.name, "Test");
        assert_eq!(table.script, Some(Script::Devanagari));
        assert_eq!(table.vowels.len(), 2);
        assert_eq!(table.matras["a"], "");
        assert_eq!(table.consonants["k"], "क");
    }

    #[test]
    fn parse_empty_placeholder() {
        let table = parse_table_toml("name = \"Korean\"\n").unwrap();
        assert!(!table.is_supported());
        assert_eq!(table.script, None);
    }

    #[test]
    fn error_orphan_matra() {
        let toml = r#"
name = "Test"
halant = "्"
[vowels]
a = "अ"
[matras]
i = "ि"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::OrphanMatra(ref k) if k == "i"));
    }

    #[test]
    fn error_uppercase_vowel() {
        let toml = r#"
name = "Test"
[vowels]
A = "आ"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::InvalidKey { section: "vowels", .. }));
    }

    #[test]
    fn uppercase_consonant_allowed() {
        let toml = r#"
name = "Test"
[consonants]
T = "ट"
t = "त"
"#;
        let table = parse_table_toml(toml).unwrap();
        assert_eq!(table.consonants.len(), 2);
    }

    #[test]
    fn error_key_too_long() {
        let toml = r#"
name = "Test"
[consonants]
shch = "щ"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(err.to_string().contains("longer than 3"));
    }

    #[test]
    fn error_non_ascii_key() {
        let toml = "
name = \"Test\"
[vowels]
\"ā\" = \"आ\"
";
        let err = parse_table_toml(toml).unwrap_err();
        assert!(err.to_string().contains("must be ASCII"));
    }

    #[test]
    fn error_empty_consonant_value() {
        let toml = r#"
name = "Test"
[consonants]
k = ""
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::EmptyValue { section: "consonants", .. }));
    }

    #[test]
    fn error_ambiguous_key() {
        let toml = r#"
name = "Test"
[vowels]
a = "а"
[consonants]
a = "б"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::AmbiguousKey(_)));
    }

    #[test]
    fn error_matras_without_halant() {
        let toml = r#"
name = "Test"
[vowels]
i = "и"
[matras]
i = "и"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::MatrasWithoutHalant));
    }

    #[test]
    fn error_unknown_script() {
        let toml = r#"
name = "Test"
script = "Klingon"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_table_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }
}
