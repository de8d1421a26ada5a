// Configuration management
//
// User-facing settings persisted as TOML next to the executable, with
// load-or-default semantics so a missing or broken file never blocks the
// emulator from starting.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default configuration file name
const CONFIG_FILE: &str = "famicore.toml";

/// Error type for configuration load/save
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read or written
    Io(std::io::Error),
    /// The file is not valid TOML for this configuration
    Parse(toml::de::Error),
    /// The configuration could not be serialized
    Serialize(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config I/O error: {}", err),
            ConfigError::Parse(err) => write!(f, "config parse error: {}", err),
            ConfigError::Serialize(err) => write!(f, "config serialize error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Emulator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmulatorConfig {
    /// Video settings
    pub video: VideoConfig,

    /// Screenshot settings
    pub screenshot: ScreenshotConfig,
}

/// Video configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    /// Window scale factor (1-8)
    pub scale: u32,

    /// Enable VSync
    pub vsync: bool,

    /// Target frame rate (60 for NTSC)
    pub fps: u32,
}

/// Screenshot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenshotConfig {
    /// Directory screenshots are written to
    pub directory: PathBuf,
}

impl Default for VideoConfig {
    fn default() -> Self {
        VideoConfig {
            scale: 3,
            vsync: true,
            fps: 60,
        }
    }
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        ScreenshotConfig {
            directory: PathBuf::from("screenshots"),
        }
    }
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        EmulatorConfig {
            video: VideoConfig::default(),
            screenshot: ScreenshotConfig::default(),
        }
    }
}

impl EmulatorConfig {
    /// Load the configuration file, falling back to defaults
    ///
    /// A malformed file is reported and ignored rather than failing the
    /// launch.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(ConfigError::Io(_)) => Self::default(),
            Err(err) => {
                warn!("ignoring configuration: {}", err);
                Self::default()
            }
        }
    }

    /// Load the configuration file
    ///
    /// # Errors
    /// Fails when the file is missing, unreadable, or not valid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        let text = fs::read_to_string(CONFIG_FILE).map_err(ConfigError::Io)?;
        toml::from_str(&text).map_err(ConfigError::Parse)
    }

    /// Write the configuration file
    ///
    /// # Errors
    /// Fails when serialization or the write fails.
    pub fn save(&self) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(CONFIG_FILE, text).map_err(ConfigError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EmulatorConfig::default();
        assert_eq!(config.video.scale, 3);
        assert!(config.video.vsync);
        assert_eq!(config.video.fps, 60);
        assert_eq!(config.screenshot.directory, PathBuf::from("screenshots"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: EmulatorConfig = toml::from_str("[video]\nscale = 2\n").unwrap();
        assert_eq!(config.video.scale, 2);
        assert_eq!(config.video.fps, 60, "unspecified fields take defaults");
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = EmulatorConfig::default();
        config.video.scale = 4;
        config.video.vsync = false;

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: EmulatorConfig = toml::from_str(&text).unwrap();

        assert_eq!(parsed.video.scale, 4);
        assert!(!parsed.video.vsync);
    }
}
