/// Embedded `(language code, TOML)` pairs for every built-in table.
pub const BUILTIN_TABLES: &[(&str, &str)] = &[
    ("ar", include_str!("data/ar.toml")),
    ("bn", include_str!("data/bn.toml")),
    ("gu", include_str!("data/gu.toml")),
    ("hi", include_str!("data/hi.toml")),
    ("ja", include_str!("data/ja.toml")),
    ("kn", include_str!("data/kn.toml")),
    ("ko", include_str!("data/ko.toml")),
    ("ml", include_str!("data/ml.toml")),
    ("mr", include_str!("data/mr.toml")),
    ("pa", include_str!("data/pa.toml")),
    ("ru", include_str!("data/ru.toml")),
    ("ta", include_str!("data/ta.toml")),
    ("te", include_str!("data/te.toml")),
    ("zh", include_str!("data/zh.toml")),
];

/// Returns the embedded TOML for a built-in language.
pub fn builtin_toml(code: &str) -> Option<&'static str> {
    BUILTIN_TABLES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, toml)| *toml)
}
