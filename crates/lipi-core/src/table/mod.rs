//! Per-language symbol tables.
//!
//! A `SymbolTable` maps romanized phonetic tokens to native-script glyphs:
//! independent vowels, dependent vowel signs (matras), and consonants, plus
//! the halant that suppresses a consonant's inherent vowel. Built-in tables
//! are embedded TOML files under `data/`.

mod builtin;
mod config;

pub use builtin::{builtin_toml, BUILTIN_TABLES};
pub use config::{parse_table_toml, TableError};

use std::collections::HashMap;

use crate::unicode::Script;

/// Longest token the tokenizer ever looks up.
pub const MAX_TOKEN_LEN: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    pub name: String,
    pub script: Option<Script>,
    /// Empty for scripts without a virama.
    pub halant: String,
    pub vowels: HashMap<String, String>,
    pub matras: HashMap<String, String>,
    /// Case-sensitive: `t` and `T` are different consonants.
    pub consonants: HashMap<String, String>,
}

impl SymbolTable {
    /// A table with no consonants means transliteration is unsupported and
    /// input passes through unchanged.
    pub fn is_supported(&self) -> bool {
        !self.consonants.is_empty()
    }

    pub fn has_halant(&self) -> bool {
        !self.halant.is_empty()
    }

    pub fn vowel(&self, token: &str) -> Option<&str> {
        self.vowels.get(token).map(String::as_str)
    }

    pub fn matra(&self, token: &str) -> Option<&str> {
        self.matras.get(token).map(String::as_str)
    }

    pub fn consonant(&self, token: &str) -> Option<&str> {
        self.consonants.get(token).map(String::as_str)
    }
}
