//! Language code → `SymbolTable` registry.
//!
//! Built once (embedded tables, optionally overlaid with user TOML files),
//! then shared read-only behind an `Arc`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, debug_span};

use crate::table::{parse_table_toml, SymbolTable, TableError, BUILTIN_TABLES};

#[derive(Debug, Clone, Default)]
pub struct Registry {
    tables: HashMap<String, SymbolTable>,
}

impl Registry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse every embedded table.
    pub fn builtin() -> Result<Self, TableError> {
        let _span = debug_span!("registry_builtin").entered();
        let mut registry = Self::empty();
        for (code, toml) in BUILTIN_TABLES {
            registry.load_toml(code, toml)?;
        }
        debug!(languages = registry.tables.len());
        Ok(registry)
    }

    /// Register a table, replacing any existing one for `code`.
    pub fn insert(&mut self, code: impl Into<String>, table: SymbolTable) {
        self.tables.insert(code.into(), table);
    }

    /// Parse, validate and register one table.
    pub fn load_toml(&mut self, code: &str, toml_str: &str) -> Result<(), TableError> {
        let table = parse_table_toml(toml_str)?;
        self.insert(code, table);
        Ok(())
    }

    /// Load every `<code>.toml` in `dir`. Files with other extensions are
    /// ignored. Returns the number of tables loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, TableError> {
        let _span = debug_span!("registry_load_dir", dir = %dir.display()).entered();
        let mut paths: Vec<_> = fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<_, _>>()?;
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            let Some(code) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let content = fs::read_to_string(&path)?;
            self.load_toml(code, &content)?;
            debug!(code, "loaded table override");
            loaded += 1;
        }
        Ok(loaded)
    }

    pub fn lookup(&self, code: &str) -> Option<&SymbolTable> {
        self.tables.get(code)
    }

    /// True if `code` has a table with at least one consonant.
    pub fn supports(&self, code: &str) -> bool {
        self.lookup(code).is_some_and(SymbolTable::is_supported)
    }

    /// Registered language codes, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
