//! User configuration persistence
//!
//! Stores playlist-building preferences in ~/.config/tracklist/config.json.
//! The configuration is an explicitly constructed value passed into the
//! builder and the CLI handlers; there is no process-global state.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::playlist::Format;

/// Persistent user configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File extensions treated as audio when building playlists
    pub audio_extensions: Vec<String>,
    /// Format written by `build` when none is given on the command line
    pub default_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            audio_extensions: vec!["mp3".to_string(), "ogg".to_string(), "oga".to_string()],
            default_format: Format::M3u.extension().to_string(),
        }
    }
}

impl Config {
    /// Load the configuration from disk, falling back to defaults when no
    /// config file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            debug!("No config found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Self =
            serde_json::from_str(&contents).with_context(|| "Failed to parse config")?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save the configuration to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Path to the config file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("tracklist").join("config.json"))
    }

    /// The configured default playlist format, with a fallback when the
    /// configured name is not recognized.
    pub fn default_format(&self) -> Format {
        Format::from_name(&self.default_format).unwrap_or_else(|| {
            warn!(
                "Unrecognized default_format {:?} in config, using m3u",
                self.default_format
            );
            Format::M3u
        })
    }

    /// Whether the path's extension names a configured audio type,
    /// case-insensitively.
    pub fn is_audio(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.audio_extensions
                    .iter()
                    .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(&ext))
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.audio_extensions, vec!["mp3", "ogg", "oga"]);
        assert_eq!(config.default_format(), Format::M3u);
    }

    #[test]
    fn test_is_audio_matches_case_insensitively() {
        let config = Config::default();
        assert!(config.is_audio(Path::new("/m/a.mp3")));
        assert!(config.is_audio(Path::new("/m/B.OGG")));
        assert!(config.is_audio(Path::new("b.oga")));
        assert!(!config.is_audio(Path::new("/m/notes.txt")));
        assert!(!config.is_audio(Path::new("/m/noext")));
    }

    #[test]
    fn test_partial_config_fills_in_defaults() {
        let config: Config = serde_json::from_str(r#"{"default_format": "xspf"}"#).unwrap();
        assert_eq!(config.default_format(), Format::Xspf);
        assert_eq!(config.audio_extensions, vec!["mp3", "ogg", "oga"]);
    }

    #[test]
    fn test_unrecognized_default_format_falls_back_to_m3u() {
        let config = Config {
            default_format: "wpl".to_string(),
            ..Config::default()
        };
        assert_eq!(config.default_format(), Format::M3u);
    }
}
