use crate::constants::{CONFIG_DIR_NAME, TRANSLATIONS_FILE_NAME};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// localized phrases shown next to items with an in-flight operation
///
/// missing keys in a translation file fall back to english
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TranslationSet {
    pub pushing_status: String,
    pub pulling_status: String,
    pub fast_forwarding: String,
    pub deleting_status: String,
}

impl TranslationSet {
    pub fn english() -> Self {
        Self {
            pushing_status: String::from("Pushing"),
            pulling_status: String::from("Pulling"),
            fast_forwarding: String::from("Fast-forwarding"),
            deleting_status: String::from("Deleting"),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse translation set")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read translations from {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("invalid translations in {}", path.display()))
    }

    /// an explicit path must load, otherwise the user config file is used when present
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        Self::load_or_default_from(path, default_path().as_deref())
    }

    /// `load_or_default` with the user config location supplied by the caller
    pub fn load_or_default_from(path: Option<&Path>, default_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_path {
            Some(path) if path.is_file() => Self::load(path),
            _ => Ok(Self::english()),
        }
    }
}

impl Default for TranslationSet {
    fn default() -> Self {
        Self::english()
    }
}

/// `<config dir>/git-item-status/translations.json`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(TRANSLATIONS_FILE_NAME))
}
