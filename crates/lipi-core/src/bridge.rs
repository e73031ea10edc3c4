//! Bridging stored text that may already be native script.
//!
//! Dictionary "bridge" fields hold either native text or raw Latin phonetics
//! depending on who wrote them. `ensure_native` converts only the latter.

use std::borrow::Cow;

use crate::engine::Transliterator;
use crate::unicode::{contains_script, is_romanized};

impl Transliterator {
    /// Return `text` in the script of `lang`, transliterating only when it
    /// looks like romanized phonetics.
    ///
    /// Text that already contains the target script, or any non-Latin
    /// letters, is returned borrowed and unchanged.
    pub fn ensure_native<'a>(&self, text: &'a str, lang: &str) -> Cow<'a, str> {
        if text.is_empty() || self.is_identity(lang) {
            return Cow::Borrowed(text);
        }
        let Some(table) = self.registry().lookup(lang).filter(|t| t.is_supported()) else {
            return Cow::Borrowed(text);
        };
        if let Some(script) = table.script {
            if contains_script(text, script) {
                return Cow::Borrowed(text);
            }
        }
        if !is_romanized(text) {
            return Cow::Borrowed(text);
        }
        Cow::Owned(self.transliterate(text, lang))
    }
}
