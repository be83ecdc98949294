use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::SubfitError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub matching: MatchConfig,
    pub download: DownloadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Search language code (ro, en, ita, fra, ger, ung, gre, por, spa, alt).
    pub language: String,
    /// Index into the decode trial list to try first.
    pub encoding_priority: usize,
}

/// Scoring toggles. Always passed explicitly into the scorer; scoring never
/// reads ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Compare detected video resolutions.
    pub resolution: bool,
    /// Prefix ranked labels with the signed score.
    pub show_scores: bool,
    /// Drop hearing-impaired releases from results.
    pub exclude_hearing_impaired: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            resolution: true,
            show_scores: false,
            exclude_hearing_impaired: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    pub multi_file_policy: MultiFilePolicy,
}

/// How to pick a file when an archive holds several subtitles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiFilePolicy {
    /// Ask the host UI to choose.
    Manual,
    /// Take the first entry in filename order.
    First,
    /// Re-score every entry against the playing file.
    #[default]
    BestMatch,
}

impl std::fmt::Display for MultiFilePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manual => write!(f, "manual"),
            Self::First => write!(f, "first"),
            Self::BestMatch => write!(f, "best match"),
        }
    }
}

impl AppConfig {
    /// Load config: user file (if exists), otherwise built-in defaults.
    pub fn load() -> Result<Self, SubfitError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            let user_str = std::fs::read_to_string(&user_path)
                .map_err(|e| SubfitError::Config(e.to_string()))?;
            toml::from_str(&user_str).map_err(|e| SubfitError::Config(e.to_string()))
        } else {
            toml::from_str(DEFAULT_CONFIG).map_err(|e| SubfitError::Config(e.to_string()))
        }
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), SubfitError> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| SubfitError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "subfit")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::default();
        assert_eq!(config.general.language, "ro");
        assert_eq!(config.general.encoding_priority, 0);
        assert!(config.matching.resolution);
        assert!(!config.matching.show_scores);
        assert_eq!(config.download.multi_file_policy, MultiFilePolicy::BestMatch);
    }

    #[test]
    fn test_roundtrip() {
        let mut config = AppConfig::default();
        config.download.multi_file_policy = MultiFilePolicy::Manual;
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(
            deserialized.download.multi_file_policy,
            MultiFilePolicy::Manual
        );
        assert_eq!(deserialized.general.language, config.general.language);
    }

    #[test]
    fn test_policy_serde_names() {
        assert_eq!(
            toml::to_string(&DownloadConfig {
                multi_file_policy: MultiFilePolicy::BestMatch
            })
            .unwrap()
            .trim(),
            r#"multi_file_policy = "best_match""#
        );
    }
}
