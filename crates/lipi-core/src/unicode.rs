//! Character-level Unicode script classification for transliteration output.

use serde::Deserialize;

/// Output script of a symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Script {
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Cyrillic,
    Latin,
}

impl Script {
    /// Inclusive code point range of the script's Unicode block. Latin has
    /// no single block; see [`is_latin`].
    fn block(self) -> Option<(char, char)> {
        let range = match self {
            Script::Devanagari => ('\u{0900}', '\u{097F}'),
            Script::Bengali => ('\u{0980}', '\u{09FF}'),
            Script::Gurmukhi => ('\u{0A00}', '\u{0A7F}'),
            Script::Gujarati => ('\u{0A80}', '\u{0AFF}'),
            Script::Tamil => ('\u{0B80}', '\u{0BFF}'),
            Script::Telugu => ('\u{0C00}', '\u{0C7F}'),
            Script::Kannada => ('\u{0C80}', '\u{0CFF}'),
            Script::Malayalam => ('\u{0D00}', '\u{0D7F}'),
            Script::Cyrillic => ('\u{0400}', '\u{04FF}'),
            Script::Latin => return None,
        };
        Some(range)
    }

    pub fn contains(self, c: char) -> bool {
        match self.block() {
            Some((lo, hi)) => (lo..=hi).contains(&c),
            None => is_latin(c),
        }
    }
}

/// Latin letters: ASCII plus the Latin-1 Supplement and Extended-A letters
/// used by macron romanizations such as "ā".
pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic() || (c.is_alphabetic() && ('\u{00C0}'..='\u{017F}').contains(&c))
}

/// True when the text contains at least one letter and every letter is Latin.
pub fn is_romanized(text: &str) -> bool {
    let mut letters = text.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(is_latin)
}

/// True if any character of `text` belongs to `script`.
pub fn contains_script(text: &str, script: Script) -> bool {
    text.chars().any(|c| script.contains(c))
}
