mod properties;

use std::sync::OnceLock;

use super::Transliterator;

/// Built-in transliterator shared across tests.
pub(super) fn shared() -> &'static Transliterator {
    static INSTANCE: OnceLock<Transliterator> = OnceLock::new();
    INSTANCE.get_or_init(|| Transliterator::builtin().unwrap())
}

pub(super) fn tr(word: &str, lang: &str) -> String {
    shared().transliterate(word, lang)
}
