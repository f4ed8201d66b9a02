// User settings
// Loaded from ~/.config/listwise/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What to do with same-name, different-unit items when nobody is asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Leave conflicts for an explicit decision (default)
    #[default]
    Ask,
    /// Insert conflicting items as separate lines
    Insert,
    /// Drop conflicting items
    Discard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Custom lexicon TOML. None = built-in pt-BR vocabulary
    #[serde(rename = "lexicon.path")]
    pub lexicon_path: Option<PathBuf>,

    #[serde(rename = "recon.onConflict")]
    pub on_conflict: ConflictPolicy,

    /// Label for items without a store section
    #[serde(rename = "session.fallbackSection")]
    pub fallback_section: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            on_conflict: ConflictPolicy::Ask,
            fallback_section: "Other".to_string(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("listwise");
        config_dir.join("settings.json")
    }

    /// Load settings from the default location, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from `path`. Missing or broken files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no settings at {}, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Error parsing {}: {}", path.display(), e);
                    log::warn!("Using default settings");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Error reading {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse settings JSON. Lines starting with `//` are comments.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        let cleaned: String = contents
            .lines()
            .filter(|line| !line.trim().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");
        serde_json::from_str(&cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.lexicon_path, None);
        assert_eq!(s.on_conflict, ConflictPolicy::Ask);
        assert_eq!(s.fallback_section, "Other");
    }

    #[test]
    fn parse_with_comments() {
        let json = r#"{
    // Vocabulary
    "lexicon.path": "/tmp/en.toml",

    // Duplicates with another unit
    "recon.onConflict": "insert"
}"#;
        let s = Settings::from_json(json).unwrap();
        assert_eq!(s.lexicon_path, Some(PathBuf::from("/tmp/en.toml")));
        assert_eq!(s.on_conflict, ConflictPolicy::Insert);
        assert_eq!(s.fallback_section, "Other");
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings::load_from(&dir.path().join("settings.json"));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn broken_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ \"recon.onConflict\": 42 ").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ \"session.fallbackSection\": \"Outros\" }").unwrap();
        let s = Settings::load_from(&path);
        assert_eq!(s.fallback_section, "Outros");
        assert_eq!(s.on_conflict, ConflictPolicy::Ask);
    }
}
