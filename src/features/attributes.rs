//! Declarative attribute set
//!
//! A flat JSON object of named options. Each read names the option and the
//! value to fall back to, so an absent or malformed option never fails.

use std::path::{Path, PathBuf};

use iced::Color;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Named option values read with typed getters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    values: Map<String, Value>,
}

impl Attributes {
    /// Get the attribute file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "example", "CustomizableSeekBar")
            .map(|dirs| dirs.config_dir().join("seek_bar.json"))
    }

    /// Load attributes from file, or return an empty set if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(attributes) => {
                tracing::info!("Loaded seek bar attributes from {}", path.display());
                attributes
            }
            Err(e) => {
                tracing::debug!("Using default seek bar attributes: {}", e);
                Self::default()
            }
        }
    }

    /// Load attributes from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, AttributesError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| AttributesError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parse attributes from a JSON object
    pub fn from_json(content: &str) -> Result<Self, AttributesError> {
        let values: Map<String, Value> =
            serde_json::from_str(content).map_err(|e| AttributesError::Parse(e.to_string()))?;
        Ok(Self { values })
    }

    /// Pixel dimension, fractional values truncated
    pub fn dimension(&self, name: &str, default: i32) -> i32 {
        self.read(name, default, "dimension", |value| {
            value.as_f64().map(|v| v as i32)
        })
    }

    pub fn integer(&self, name: &str, default: i32) -> i32 {
        self.read(name, default, "integer", |value| {
            value.as_i64().and_then(|v| i32::try_from(v).ok())
        })
    }

    pub fn boolean(&self, name: &str, default: bool) -> bool {
        self.read(name, default, "boolean", Value::as_bool)
    }

    /// Color written as `#rrggbb` or `#rrggbbaa`
    pub fn color(&self, name: &str, default: Color) -> Color {
        self.read(name, default, "color", |value| value.as_str().and_then(parse_color))
    }

    /// Any value that deserializes into `T`, `None` when absent or malformed
    pub fn get<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let value = self.values.get(name)?;
        match serde_json::from_value(value.clone()) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("Ignoring attribute `{}`: {}", name, e);
                None
            }
        }
    }

    fn read<T>(
        &self,
        name: &str,
        default: T,
        kind: &str,
        extract: impl FnOnce(&Value) -> Option<T>,
    ) -> T {
        let Some(value) = self.values.get(name) else {
            return default;
        };

        extract(value).unwrap_or_else(|| {
            tracing::warn!("Attribute `{}` is not a valid {}: {}", name, kind, value);
            default
        })
    }
}

fn parse_color(s: &str) -> Option<Color> {
    let bytes = hex::decode(s.strip_prefix('#')?).ok()?;
    match bytes[..] {
        [r, g, b] => Some(Color::from_rgb8(r, g, b)),
        [r, g, b, a] => Some(Color::from_rgba8(r, g, b, a as f32 / 255.0)),
        _ => None,
    }
}

/// Errors that can occur reading attributes
#[derive(Debug, Clone)]
pub enum AttributesError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for AttributesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributesError::Io(e) => write!(f, "IO error: {}", e),
            AttributesError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for AttributesError {}
