pub mod accuracy_ops;
pub mod config_ops;
pub mod convert_ops;
pub mod lang_ops;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use lipi_core::settings::{parse_settings_toml, Settings};
use lipi_core::{Registry, TableError, Transliterator};

/// Unwrap a `Result` or print the formatted error and exit with status 1.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}
pub(crate) use die;

/// Settings from `path`, or the embedded defaults.
pub fn load_settings(path: Option<&str>) -> Settings {
    match path {
        Some(p) => {
            let content = die!(fs::read_to_string(p), "Error reading settings {p}: {}");
            die!(parse_settings_toml(&content), "Error in settings {p}: {}")
        }
        None => Settings::default(),
    }
}

/// Built-in tables, overlaid by the settings' override directory, then by
/// `extra_tables`. Later overlays win for the same language code.
pub fn build_transliterator(
    settings: &Settings,
    extra_tables: Option<&Path>,
) -> Result<Transliterator, TableError> {
    let mut registry = Registry::builtin()?;
    for dir in settings.tables.override_dir.as_deref().into_iter().chain(extra_tables) {
        registry.load_dir(dir)?;
    }
    Ok(Transliterator::with_settings(Arc::new(registry), settings))
}

pub fn open_transliterator(settings: &Settings, extra_tables: Option<&str>) -> Transliterator {
    die!(
        build_transliterator(settings, extra_tables.map(Path::new)),
        "Error loading tables: {}"
    )
}
