//! Property-based tests for totality and passthrough guarantees.

use proptest::prelude::*;

use super::{shared, tr};

fn arb_lang() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "hi", "mr", "bn", "pa", "gu", "ta", "te", "kn", "ml", "ru", "ja", "ko", "zh", "ar", "en",
        "zz", "", "HI",
    ])
    .prop_map(str::to_string)
}

fn arb_phonetic_word() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,8}"
}

/// Native characters without canonical decompositions.
fn arb_devanagari() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['क', 'म', 'स', 'न', 'ट', 'त', '्', 'े', 'ि', 'ा', 'अ', ' ']),
        0..12,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn total_for_any_input(word in any::<String>(), lang in arb_lang()) {
        let out = tr(&word, &lang);
        if word.is_empty() {
            prop_assert!(out.is_empty());
        }
    }

    #[test]
    fn unregistered_language_is_identity(word in any::<String>()) {
        prop_assert_eq!(tr(&word, "zz"), word.clone());
        prop_assert_eq!(tr(&word, "xx-unknown"), word);
    }

    #[test]
    fn latin_identity(word in any::<String>()) {
        prop_assert_eq!(tr(&word, "en"), word);
    }

    #[test]
    fn slash_joins_segments(a in arb_phonetic_word(), b in arb_phonetic_word(), lang in arb_lang()) {
        prop_assume!(shared().registry().supports(&lang));
        let joined = format!("{} / {}", tr(&a, &lang), tr(&b, &lang));
        prop_assert_eq!(tr(&format!("{a}/{b}"), &lang), joined);
    }

    #[test]
    fn hyphen_splits_syllables(a in arb_phonetic_word(), b in arb_phonetic_word(), lang in arb_lang()) {
        let expected = format!("{}-{}", tr(&a, &lang), tr(&b, &lang));
        prop_assert_eq!(tr(&format!("{a}-{b}"), &lang), expected);
    }

    #[test]
    fn native_text_unchanged(word in arb_devanagari()) {
        prop_assert_eq!(tr(&word, "hi"), word);
    }

    #[test]
    fn deterministic(word in any::<String>(), lang in arb_lang()) {
        prop_assert_eq!(tr(&word, &lang), tr(&word, &lang));
    }
}
