//! Phonetic transliteration: romanized spelling → native script.
//!
//! `Transliterator` resolves a language code through the shared `Registry`
//! and runs a greedy longest-match scan over the word. The only state is
//! whether the last emitted consonant still carries a pending halant that a
//! following matra may replace.

mod rules;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::{debug, debug_span};

use crate::normalize::normalize;
use crate::registry::Registry;
use crate::settings::Settings;
use crate::table::{SymbolTable, TableError, MAX_TOKEN_LEN};
use rules::{is_break, Chunk, Emit, RULES};

/// Language whose input is already Latin when no settings are given.
pub const DEFAULT_IDENTITY_LANGUAGE: &str = "en";

const ALTERNATE_SEPARATOR: char = '/';
const ALTERNATE_JOINER: &str = " / ";

#[derive(Debug, Clone)]
pub struct Transliterator {
    registry: Arc<Registry>,
    identity_languages: Vec<String>,
}

impl Transliterator {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            identity_languages: vec![DEFAULT_IDENTITY_LANGUAGE.to_string()],
        }
    }

    pub fn with_settings(registry: Arc<Registry>, settings: &Settings) -> Self {
        Self {
            registry,
            identity_languages: settings.engine.identity_languages.clone(),
        }
    }

    /// Transliterator over the embedded tables.
    pub fn builtin() -> Result<Self, TableError> {
        Ok(Self::new(Arc::new(Registry::builtin()?)))
    }

    /// Built-in tables overlaid with `tables.override_dir`, if configured.
    pub fn from_settings(settings: &Settings) -> Result<Self, TableError> {
        let mut registry = Registry::builtin()?;
        if let Some(dir) = &settings.tables.override_dir {
            registry.load_dir(dir)?;
        }
        Ok(Self::with_settings(Arc::new(registry), settings))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn is_identity(&self, lang: &str) -> bool {
        self.identity_languages.iter().any(|c| c == lang)
    }

    /// Transliterate `word` into the script of `lang`.
    ///
    /// Never fails: unsupported languages and unmatched characters pass
    /// through unchanged. Words like `"ba/banni"` are split on `/` and each
    /// alternative is converted separately, joined with `" / "`.
    pub fn transliterate(&self, word: &str, lang: &str) -> String {
        if word.is_empty() {
            return String::new();
        }
        if self.is_identity(lang) {
            return word.to_string();
        }
        // Checked before the slash split: unsupported input keeps its `/`
        // verbatim ("ba/banni" under "zz" stays "ba/banni").
        let Some(table) = self.registry.lookup(lang).filter(|t| t.is_supported()) else {
            return word.to_string();
        };

        let _span = debug_span!("transliterate", lang).entered();
        if word.contains(ALTERNATE_SEPARATOR) {
            debug!("splitting alternate forms");
            return word
                .split(ALTERNATE_SEPARATOR)
                .map(|segment| transliterate_with(table, &normalize(segment.trim())))
                .collect::<Vec<_>>()
                .join(ALTERNATE_JOINER);
        }
        transliterate_with(table, &normalize(word))
    }

    pub fn transliterate_batch<S: AsRef<str>>(&self, words: &[S], lang: &str) -> Vec<String> {
        words
            .iter()
            .map(|w| self.transliterate(w.as_ref(), lang))
            .collect()
    }
}

/// Run the tokenizer over an already-normalized word.
pub fn transliterate_with(table: &SymbolTable, word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len() * 3);
    let mut active_consonant = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if is_break(c) {
            out.push(c);
            active_consonant = false;
            i += 1;
            continue;
        }

        match longest_match(table, active_consonant, &chars[i..]) {
            Some((len, emit)) => {
                active_consonant = apply(table, &mut out, emit);
                i += len;
            }
            None => {
                out.push(c);
                active_consonant = false;
                i += 1;
            }
        }
    }

    out
}

fn longest_match<'t>(
    table: &'t SymbolTable,
    active_consonant: bool,
    rest: &[char],
) -> Option<(usize, Emit<'t>)> {
    for len in (1..=MAX_TOKEN_LEN.min(rest.len())).rev() {
        let raw: String = rest[..len].iter().collect();
        let chunk = Chunk::new(&raw);
        for rule in &RULES {
            if let Some(emit) = (rule.matcher)(table, active_consonant, &chunk) {
                debug!(rule = rule.name, chunk = chunk.raw, len);
                return Some((len, emit));
            }
        }
    }
    None
}

/// Append the emitted glyphs; returns the new `active_consonant` state.
fn apply(table: &SymbolTable, out: &mut String, emit: Emit<'_>) -> bool {
    match emit {
        Emit::Matra(sign) => {
            if let Some(len) = out.strip_suffix(table.halant.as_str()).map(str::len) {
                out.truncate(len);
            }
            out.push_str(sign);
            false
        }
        Emit::Consonant(glyph) => {
            out.push_str(glyph);
            out.push_str(&table.halant);
            table.has_halant()
        }
        Emit::Vowel(vowel) => {
            out.push_str(vowel);
            false
        }
    }
}
