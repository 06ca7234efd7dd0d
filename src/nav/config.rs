use std::{
    collections::HashSet,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use dioxus::logger::tracing::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::entry::{NavEntry, PathMatcher};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Navigation entry id is empty! (label: {0})")]
    EmptyId(String),
    #[error("Duplicate navigation entry id! {0}")]
    DuplicateId(String),
    #[error("Navigation entry href contains a double quote! (id: {0})")]
    InvalidHref(String),
    #[error("Could not open file! {0}")]
    CouldNotOpenFile(String),
    #[error("Could not read file! {0}")]
    CouldNotReadFile(String),
    #[error("Could not deserialize config! {0}")]
    CouldNotDeserialize(String),
}

pub const DEFAULT_BRAND: &str = "ESP32 Companion";

static GLOBAL_CONFIG: Lazy<NavConfig> = Lazy::new(|| {
    NavConfig::new(DEFAULT_BRAND, default_entries()).expect("built-in nav entries are valid")
});

/// Only built through `new`, so entry ids are unique and hrefs are attribute-safe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavConfig {
    brand: String,
    entries: Vec<NavEntry>,
}

#[derive(Deserialize)]
struct RawNavConfig {
    #[serde(default = "default_brand")]
    brand: String,
    entries: Vec<NavEntry>,
}

fn default_brand() -> String {
    DEFAULT_BRAND.to_string()
}

fn default_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::new(
            "assistant",
            "Voice Assistant",
            "/index.html",
            "🎙️",
            PathMatcher::home("index"),
        ),
        NavEntry::new(
            "lua",
            "Lua Console",
            "/lua-console.html",
            "🧪",
            PathMatcher::contains("lua-console"),
        ),
        NavEntry::new(
            "files",
            "File Manager",
            "/file-manager.html",
            "📁",
            PathMatcher::contains("file-manager"),
        ),
        NavEntry::new("settings", "Settings", "#", "⚙️", PathMatcher::Never)
            .disabled()
            .with_chip("soon"),
    ]
}

impl NavConfig {
    pub fn new(brand: impl Into<String>, entries: Vec<NavEntry>) -> Result<Self, ConfigError> {
        validate_entries(&entries)?;
        Ok(Self {
            brand: brand.into(),
            entries,
        })
    }

    pub fn global() -> &'static NavConfig {
        &GLOBAL_CONFIG
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn from_json(serialized: &str) -> Result<Self, ConfigError> {
        let raw = match serde_json::from_str::<RawNavConfig>(serialized) {
            Ok(raw) => raw,
            Err(err) => return Err(ConfigError::CouldNotDeserialize(err.to_string())),
        };
        NavConfig::new(raw.brand, raw.entries)
    }

    pub fn read_from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => return Err(ConfigError::CouldNotOpenFile(err.to_string())),
        };
        let mut reader = BufReader::new(file);
        let mut buf = String::new();
        let serialized = match reader.read_to_string(&mut buf) {
            Ok(bytes_read) => {
                debug!("Read {bytes_read} bytes of nav config file.");
                buf
            }
            Err(err) => return Err(ConfigError::CouldNotReadFile(err.to_string())),
        };

        NavConfig::from_json(&serialized)
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig::global().clone()
    }
}

fn validate_entries(entries: &[NavEntry]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.id.is_empty() {
            return Err(ConfigError::EmptyId(entry.label.clone()));
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(ConfigError::DuplicateId(entry.id.clone()));
        }
        // Rendered attribute values are not escaped.
        if entry.href.contains('"') {
            return Err(ConfigError::InvalidHref(entry.id.clone()));
        }
    }
    Ok(())
}
