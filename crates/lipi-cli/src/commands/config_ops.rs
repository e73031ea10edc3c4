use std::fs;

use lipi_core::table::{builtin_toml, parse_table_toml, TableError};

use super::die;

pub fn table_export(lang: &str) {
    let toml = die!(
        builtin_toml(lang).ok_or_else(|| TableError::UnknownLanguage(lang.to_string())),
        "Error: {}"
    );
    print!("{toml}");
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(parse_table_toml(&content), "Error: {}");
    println!(
        "OK: {} vowels={} matras={} consonants={}{}",
        table.name,
        table.vowels.len(),
        table.matras.len(),
        table.consonants.len(),
        if table.is_supported() {
            ""
        } else {
            " (passthrough)"
        }
    );
}

pub fn settings_export() {
    print!("{}", lipi_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        lipi_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: engine.default_language={}, engine.identity_languages={:?}",
        s.engine.default_language, s.engine.identity_languages
    );
}
