//! Ordered matcher rules for the tokenizer.
//!
//! At each scan position the tokenizer tries chunk lengths 3, 2, 1 and, for
//! each length, these rules in order. The first rule that returns an `Emit`
//! wins. Exact-case consonants must be tried before vowels and before the
//! lowercase fallback so that `T` and `t` stay distinct.

use crate::table::SymbolTable;

/// Candidate chunk at the scan position, in raw and lowercased form.
#[derive(Debug)]
pub(crate) struct Chunk<'a> {
    pub raw: &'a str,
    pub lower: String,
}

impl<'a> Chunk<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Emit<'t> {
    /// Dependent vowel sign that replaces the pending halant.
    Matra(&'t str),
    /// Consonant glyph, followed by the table's halant.
    Consonant(&'t str),
    /// Independent vowel.
    Vowel(&'t str),
}

pub(crate) type Matcher = for<'t> fn(&'t SymbolTable, bool, &Chunk<'_>) -> Option<Emit<'t>>;

pub(crate) struct Rule {
    pub name: &'static str,
    pub matcher: Matcher,
}

pub(crate) const RULES: [Rule; 4] = [
    Rule {
        name: "matra",
        matcher: match_matra,
    },
    Rule {
        name: "exact_consonant",
        matcher: match_exact_consonant,
    },
    Rule {
        name: "vowel",
        matcher: match_vowel,
    },
    Rule {
        name: "lowercase_consonant",
        matcher: match_lowercase_consonant,
    },
];

/// Only applies right after a consonant whose inherent vowel is pending.
pub(crate) fn match_matra<'t>(
    table: &'t SymbolTable,
    active_consonant: bool,
    chunk: &Chunk<'_>,
) -> Option<Emit<'t>> {
    if !active_consonant || !table.has_halant() {
        return None;
    }
    table.matra(&chunk.lower).map(Emit::Matra)
}

pub(crate) fn match_exact_consonant<'t>(
    table: &'t SymbolTable,
    _active_consonant: bool,
    chunk: &Chunk<'_>,
) -> Option<Emit<'t>> {
    table.consonant(chunk.raw).map(Emit::Consonant)
}

pub(crate) fn match_vowel<'t>(
    table: &'t SymbolTable,
    _active_consonant: bool,
    chunk: &Chunk<'_>,
) -> Option<Emit<'t>> {
    table.vowel(&chunk.lower).map(Emit::Vowel)
}

pub(crate) fn match_lowercase_consonant<'t>(
    table: &'t SymbolTable,
    _active_consonant: bool,
    chunk: &Chunk<'_>,
) -> Option<Emit<'t>> {
    table.consonant(&chunk.lower).map(Emit::Consonant)
}

/// Whitespace and the punctuation that always passes through verbatim.
pub(crate) fn is_break(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '_' | '.' | ',' | '!' | '?' | '(' | ')' | '।')
}
