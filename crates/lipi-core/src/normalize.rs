//! Diacritic stripping applied to a word before tokenizing.
//!
//! The word is canonically decomposed and Latin combining marks are dropped,
//! so "ā" (precomposed or `a` + U+0304) reads as plain "a". A literal pass
//! then rewrites any macron vowels that survived as doubled ASCII. Case is
//! preserved.

use unicode_normalization::UnicodeNormalization;

const MACRON_FOLDS: [(char, &str); 5] = [
    ('ā', "aa"),
    ('ī', "ii"),
    ('ū', "uu"),
    ('ē', "ee"),
    ('ō', "oo"),
];

/// Combining Diacritical Marks block. Native-script signs (virama, matras)
/// live in their own blocks and are left alone.
fn is_latin_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Strip Latin diacritics, then fold any remaining macron vowels.
pub fn normalize(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.nfd().filter(|c| !is_latin_diacritic(*c)) {
        match MACRON_FOLDS.iter().find(|(m, _)| *m == c) {
            Some((_, ascii)) => out.push_str(ascii),
            None => out.push(c),
        }
    }
    out
}
