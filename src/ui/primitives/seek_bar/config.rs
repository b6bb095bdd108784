//! Seek bar options resolved from an attribute set

use std::path::PathBuf;

use anyhow::Context;
use iced::Color;
use iced::widget::{image, svg};
use serde::Deserialize;

use super::surface::Thumb;
use crate::features::Attributes;
use crate::ui::theme;

pub const DEFAULT_THUMB_SIZE: i32 = 35;
pub const DEFAULT_MAX_PROGRESS: i32 = 100;
pub const DEFAULT_PROGRESS_HEIGHT: i32 = 5;

/// Where the thumb visual comes from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThumbSource {
    /// Filled circle in the accent color
    #[default]
    Builtin,
    /// Raster image file
    Image(PathBuf),
    /// SVG file
    Svg(PathBuf),
}

impl ThumbSource {
    /// Turn the source into a drawable thumb, checking that the file exists
    pub fn resolve(&self) -> anyhow::Result<Thumb> {
        match self {
            ThumbSource::Builtin => Ok(default_thumb()),
            ThumbSource::Image(path) => {
                std::fs::metadata(path)
                    .with_context(|| format!("thumb image {}", path.display()))?;
                Ok(Thumb::Image(image::Handle::from_path(path)))
            }
            ThumbSource::Svg(path) => {
                std::fs::metadata(path)
                    .with_context(|| format!("thumb svg {}", path.display()))?;
                Ok(Thumb::Svg(svg::Handle::from_path(path)))
            }
        }
    }
}

fn default_thumb() -> Thumb {
    Thumb::Circle(theme::ACCENT_PINK)
}

/// Fully resolved seek bar options
#[derive(Debug, Clone, PartialEq)]
pub struct SeekBarConfig {
    pub thumb_size: f32,
    pub thumb: Thumb,
    pub progress_color: Color,
    pub progress_background_color: Color,
    pub enable_click_on_thumb_only: bool,
    pub progress_height: f32,
    pub max_progress: i32,
    pub padding_start: i32,
    pub padding_end: i32,
}

impl Default for SeekBarConfig {
    fn default() -> Self {
        Self {
            thumb_size: DEFAULT_THUMB_SIZE as f32,
            thumb: default_thumb(),
            progress_color: theme::ACCENT_PINK,
            progress_background_color: theme::LIGHT_GREY,
            enable_click_on_thumb_only: true,
            progress_height: DEFAULT_PROGRESS_HEIGHT as f32,
            max_progress: DEFAULT_MAX_PROGRESS,
            padding_start: 0,
            padding_end: 0,
        }
    }
}

impl SeekBarConfig {
    /// Read every option by name, falling back to the defaults
    pub fn from_attributes(attrs: &Attributes) -> Self {
        let defaults = Self::default();

        let thumb = attrs
            .get::<ThumbSource>("thumb")
            .and_then(|source| match source.resolve() {
                Ok(thumb) => Some(thumb),
                Err(e) => {
                    tracing::warn!("Falling back to the built-in thumb: {:#}", e);
                    None
                }
            })
            .unwrap_or(defaults.thumb);

        Self {
            thumb_size: attrs.dimension("thumbSize", DEFAULT_THUMB_SIZE) as f32,
            thumb,
            progress_color: attrs.color("progressColor", defaults.progress_color),
            progress_background_color: attrs
                .color("progressBackgroundColor", defaults.progress_background_color),
            enable_click_on_thumb_only: attrs
                .boolean("enableClickOnThumbOnly", defaults.enable_click_on_thumb_only),
            progress_height: attrs.dimension("progressHeight", DEFAULT_PROGRESS_HEIGHT) as f32,
            max_progress: attrs.integer("maxProgress", DEFAULT_MAX_PROGRESS),
            padding_start: attrs.dimension("paddingStart", defaults.padding_start),
            padding_end: attrs.dimension("paddingEnd", defaults.padding_end),
        }
    }
}
