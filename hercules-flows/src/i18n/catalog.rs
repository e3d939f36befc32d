//! Process-wide message catalog
//!
//! One consolidated table replaces the per-screen dictionaries the UI
//! used to duplicate, so every screen resolves the same key the same
//! way. The table is embedded at compile time, loaded on first use,
//! and read-only afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::LanguageCode;

/// Embedded catalog data: source string -> { "hi": ..., "mr": ... }
const CATALOG_JSON: &str = include_str!("catalog.json");

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Read-only translation table keyed by (source string, language code)
pub struct Catalog {
    entries: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// The process-wide catalog, loaded on first access
    pub fn global() -> &'static Catalog {
        CATALOG.get_or_init(Self::load_embedded)
    }

    fn load_embedded() -> Self {
        let entries = serde_json::from_str(CATALOG_JSON)
            .expect("embedded translation catalog is valid JSON");
        Self { entries }
    }

    /// Look up the translation of an exact source string
    ///
    /// English is the source language, so it always resolves to the
    /// key itself.
    pub fn lookup<'a>(&'a self, source: &'a str, lang: LanguageCode) -> Option<&'a str> {
        if lang == LanguageCode::En {
            return Some(source);
        }
        self.entries
            .get(source)
            .and_then(|by_lang| by_lang.get(lang.as_code()))
            .map(String::as_str)
    }

    /// Number of source strings in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
