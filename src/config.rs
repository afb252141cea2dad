//! Configuration file handling for termglyph.
//!
//! Loads configuration from `<config dir>/termglyph/config.toml` or a custom path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ascii::{GlyphTable, Ramp};
use crate::camera::{DEFAULT_ASPECT, DEFAULT_TARGET_WIDTH};
use crate::render::RenderMode;

/// Configuration file structure for termglyph.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub stream: StreamConfig,
    #[serde(default)]
    pub camera: CameraConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct RenderConfig {
    /// Preset ramp name: detailed, standard, minimal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ramp: Option<String>,
    /// Custom ramp, sparse to dense; wins over `ramp`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_ramp: Option<String>,
    #[serde(default)]
    pub invert: bool,
    /// grayscale, color or rainbow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StreamConfig {
    #[serde(default = "default_frames")]
    pub frames: u64,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_aspect")]
    pub aspect: f32,
    #[serde(default = "default_true")]
    pub show_fps: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            frames: default_frames(),
            width: default_width(),
            aspect: default_aspect(),
            show_fps: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CameraConfig {
    #[serde(default)]
    pub device: u32,
    #[serde(default)]
    pub mirror: bool,
}

fn default_true() -> bool {
    true
}

fn default_frames() -> u64 {
    65535
}

fn default_width() -> u32 {
    DEFAULT_TARGET_WIDTH
}

fn default_aspect() -> f32 {
    DEFAULT_ASPECT
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::SerializeError)
    }
}

impl RenderConfig {
    /// Preset ramp named in the file, if any.
    pub fn ramp(&self) -> Result<Option<Ramp>, ConfigError> {
        self.ramp
            .as_deref()
            .map(|name| {
                Ramp::from_name(name).ok_or_else(|| ConfigError::InvalidValue {
                    key: "render.ramp",
                    value: name.to_string(),
                })
            })
            .transpose()
    }

    /// Render mode named in the file, if any. Rainbow starts at offset 0.
    pub fn mode(&self) -> Result<Option<RenderMode>, ConfigError> {
        self.mode
            .as_deref()
            .map(|name| match name.to_ascii_lowercase().as_str() {
                "grayscale" | "gray" => Ok(RenderMode::Grayscale),
                "color" => Ok(RenderMode::Color),
                "rainbow" => Ok(RenderMode::Rainbow { offset: 0 }),
                _ => Err(ConfigError::InvalidValue {
                    key: "render.mode",
                    value: name.to_string(),
                }),
            })
            .transpose()
    }

    /// Build the glyph table: `preset_override`, then `custom_ramp`, then `ramp`.
    pub fn glyph_table(
        &self,
        preset_override: Option<Ramp>,
        invert: bool,
    ) -> Result<GlyphTable, ConfigError> {
        let invert = invert || self.invert;
        if let Some(preset) = preset_override {
            return Ok(GlyphTable::from_preset(preset, invert));
        }
        if let Some(custom) = &self.custom_ramp {
            return GlyphTable::from_ramp(custom, invert).map_err(|e| {
                ConfigError::InvalidValue {
                    key: "render.custom_ramp",
                    value: e.to_string(),
                }
            });
        }
        let preset = self.ramp()?.unwrap_or_default();
        Ok(GlyphTable::from_preset(preset, invert))
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    SerializeError(toml::ser::Error),
    InvalidValue {
        key: &'static str,
        value: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::SerializeError(source) => {
                write!(f, "Failed to serialize config: {}", source)
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for '{}': {}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::SerializeError(source) => Some(source),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("termglyph").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/termglyph/config.toml")
        })
}

/// Commented default config written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# termglyph configuration

[render]
# Glyph ramp: detailed, standard, minimal
ramp = "detailed"
# Custom ramp, sparse to dense, printable ASCII only (overrides `ramp`)
# custom_ramp = " .:-=+*#%@"
# Invert brightness (for light themes)
invert = false
# Render mode: grayscale, color, rainbow
mode = "color"

[stream]
# Frames to process before exiting
frames = 65535
# Output width in characters for live and resized frames
width = 100
# Row squash factor for terminal cell shape
aspect = 0.55
# Print per-frame and average frame rate
show_fps = true

[camera]
# Camera device index
device = 0
# Mirror horizontally (selfie mode)
mirror = false
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("nope.toml").as_path())).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.stream.frames, 65535);
        assert_eq!(config.stream.width, 100);
        assert!(config.stream.show_fps);
    }

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.render.ramp().unwrap(), Some(Ramp::Detailed));
        assert_eq!(config.render.mode().unwrap(), Some(RenderMode::Color));
        assert_eq!(config.stream, StreamConfig::default());
        assert_eq!(config.camera, CameraConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[camera]\nmirror = true\n\n[stream]\nframes = 10").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert!(config.camera.mirror);
        assert_eq!(config.stream.frames, 10);
        assert_eq!(config.stream.width, 100);
    }

    #[test]
    fn test_parse_error_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[stream\nframes = ").unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_names() {
        let render = RenderConfig {
            ramp: Some("blocks".to_string()),
            mode: Some("sepia".to_string()),
            ..RenderConfig::default()
        };
        assert!(matches!(
            render.ramp(),
            Err(ConfigError::InvalidValue { key: "render.ramp", .. })
        ));
        assert!(matches!(
            render.mode(),
            Err(ConfigError::InvalidValue { key: "render.mode", .. })
        ));
    }

    #[test]
    fn test_glyph_table_precedence() {
        let render = RenderConfig {
            ramp: Some("minimal".to_string()),
            custom_ramp: Some(" x".to_string()),
            ..RenderConfig::default()
        };
        let table = render.glyph_table(None, false).unwrap();
        assert_eq!(table.glyph(255), b'x');

        let table = render.glyph_table(Some(Ramp::Standard), false).unwrap();
        assert_eq!(table.glyph(255), b'@');

        let render = RenderConfig {
            ramp: Some("minimal".to_string()),
            invert: true,
            ..RenderConfig::default()
        };
        let table = render.glyph_table(None, false).unwrap();
        assert_eq!(table.glyph(0), b'#');
    }

    #[test]
    fn test_bad_custom_ramp() {
        let render = RenderConfig {
            custom_ramp: Some(String::new()),
            ..RenderConfig::default()
        };
        assert!(render.glyph_table(None, false).is_err());
    }

    #[test]
    fn test_to_toml_round_trip() {
        let mut config = Config::default();
        config.render.mode = Some("rainbow".to_string());
        let text = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
