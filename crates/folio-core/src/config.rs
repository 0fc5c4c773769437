//! Hero panel configuration.
//!
//! Loaded from a JSON file:
//!
//! ```json
//! {
//!   "personal": {
//!     "name": "Ada Example",
//!     "location": "Springfield",
//!     "email": "ada@example.com",
//!     "phone": "+1-555-0100",
//!     "github": "https://github.com/ada",
//!     "linkedin": "https://linkedin.com/in/ada"
//!   },
//!   "phrases": ["Rust Developer", "Problem Solver"],
//!   "resume": { "source": "assets/resume.pdf", "file_name": "ada-resume.pdf" },
//!   "timing": { "type_ms": 100, "delete_ms": 50, "hold_ms": 2000 }
//! }
//! ```
//!
//! `resume` and `timing` are optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::HeroResult;
use crate::profile::PersonalInfo;
use crate::resume::ResumeAsset;
use crate::typewriter::{PhraseList, TypewriterTiming};

/// Name of the config file inside the per-user config directory.
pub const CONFIG_FILE_NAME: &str = "hero.json";

/// Everything the hero panel needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroConfig {
    pub personal: PersonalInfo,
    pub phrases: Vec<String>,
    #[serde(default)]
    pub resume: ResumeAsset,
    #[serde(default)]
    pub timing: TypewriterTiming,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            personal: PersonalInfo {
                name: "Ada Example".to_string(),
                location: "Springfield".to_string(),
                email: "ada@example.com".to_string(),
                phone: "+1-555-0100".to_string(),
                github: "https://github.com/ada-example".to_string(),
                linkedin: "https://linkedin.com/in/ada-example".to_string(),
            },
            phrases: vec![
                "Full Stack Developer".to_string(),
                "Rust Enthusiast".to_string(),
                "Problem Solver".to_string(),
            ],
            resume: ResumeAsset::default(),
            timing: TypewriterTiming::default(),
        }
    }
}

impl HeroConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> HeroResult<Self> {
        let config: HeroConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> HeroResult<Self> {
        debug!(path = %path.display(), "Loading hero config");
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load `path` if given, else the per-user config file if it exists,
    /// else the built-in default.
    pub fn load_or_default(path: Option<&Path>) -> HeroResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                info!("No hero config found, using built-in default");
                Ok(Self::default())
            }
        }
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> HeroResult<()> {
        self.phrase_list()?;
        self.timing.validate()?;
        self.resume.validate()
    }

    /// The phrases as a validated [`PhraseList`].
    pub fn phrase_list(&self) -> HeroResult<PhraseList> {
        PhraseList::new(self.phrases.iter().cloned())
    }

    pub fn to_json_pretty(&self) -> HeroResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `<config dir>/folio-hero/hero.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio-hero").join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::HeroError;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        let config = HeroConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.phrase_list().unwrap().len(), 3);
    }

    #[test]
    fn optional_sections_default() {
        let json = r#"{
            "personal": {
                "name": "Ada", "location": "Here", "email": "a@b.c", "phone": "1",
                "github": "https://github.com/a", "linkedin": "https://linkedin.com/in/a"
            },
            "phrases": ["One"]
        }"#;
        let config = HeroConfig::from_json(json).unwrap();
        assert_eq!(config.resume, ResumeAsset::default());
        assert_eq!(config.timing, TypewriterTiming::default());
    }

    #[test]
    fn empty_phrases_rejected() {
        let mut config = HeroConfig::default();
        config.phrases.clear();
        let json = config.to_json_pretty().unwrap();
        let err = HeroConfig::from_json(&json).unwrap_err();
        assert!(matches!(err, HeroError::InvalidConfiguration(_)));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = HeroConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, HeroError::Serialization(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut config = HeroConfig::default();
        config.timing.hold_delay = Duration::from_millis(300);
        fs::write(&path, config.to_json_pretty().unwrap()).unwrap();

        let loaded = HeroConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn explicit_missing_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = HeroConfig::load_or_default(Some(&dir.path().join("missing.json"))).unwrap_err();
        assert!(matches!(err, HeroError::Io(_)));
    }
}
