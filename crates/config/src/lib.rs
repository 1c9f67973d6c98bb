//! Shared configuration for the airbrush painter
//!
//! This crate provides the single source of truth for canvas dimensions,
//! brush defaults and paint settings. Everything is plain serde data so a
//! host application can load it from JSON or build it in code.

use serde::{Deserialize, Serialize};

/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 1024;

/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1024;

/// Default tile size used for dirty-region tiling
pub const DEFAULT_TILE_SIZE: u32 = 128;

/// Largest brush diameter in pixels
pub const MAX_BRUSH_SIZE: f32 = 1024.0;

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("Invalid tile size: {0}")]
    InvalidTileSize(u32),

    #[error("Invalid brush size: min {min_size}, max {max_size} (expected 0 to {limit})", limit = MAX_BRUSH_SIZE)]
    InvalidBrushSize { min_size: f32, max_size: f32 },
}

/// Canvas dimensions and tiling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Tile edge length used when mapping dirty regions to tiles
    pub tile_size: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

/// Defaults for the procedural mask brush
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Diameter at pressure 0
    pub min_size: f32,
    /// Diameter at pressure 1
    pub max_size: f32,
    /// Hardness: 0.0 = soft, 1.0 = hard
    pub hardness: f32,
    /// Spacing as fraction of diameter
    pub spacing: f32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            min_size: 4.0,
            max_size: 40.0,
            hardness: 0.2,
            spacing: 0.25,
        }
    }
}

/// Paint color and device color model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    /// Paint color as straight RGBA
    pub color: [f32; 4],
    /// Paint onto a grayscale device instead of RGBA
    pub grayscale: bool,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            color: [0.0, 0.0, 0.0, 1.0],
            grayscale: false,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirbrushConfig {
    pub canvas: CanvasConfig,
    pub brush: BrushConfig,
    pub paint: PaintConfig,
}

impl AirbrushConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that canvas, tile and brush dimensions are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::InvalidCanvas {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }
        if self.canvas.tile_size == 0 {
            return Err(ConfigError::InvalidTileSize(self.canvas.tile_size));
        }
        let in_range = |size: f32| size.is_finite() && (0.0..=MAX_BRUSH_SIZE).contains(&size);
        if !in_range(self.brush.min_size) || !in_range(self.brush.max_size) {
            return Err(ConfigError::InvalidBrushSize {
                min_size: self.brush.min_size,
                max_size: self.brush.max_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AirbrushConfig::default();
        assert_eq!(config.canvas.width, DEFAULT_CANVAS_WIDTH);
        assert_eq!(config.canvas.height, DEFAULT_CANVAS_HEIGHT);
        assert_eq!(config.canvas.tile_size, DEFAULT_TILE_SIZE);
        assert!(!config.paint.grayscale);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AirbrushConfig::from_json_str(r#"{ "canvas": { "width": 200 } }"#).unwrap();
        assert_eq!(config.canvas.width, 200);
        assert_eq!(config.canvas.height, DEFAULT_CANVAS_HEIGHT);
        assert_eq!(config.brush, BrushConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = AirbrushConfig::default();
        config.paint.color = [1.0, 0.5, 0.0, 1.0];
        config.paint.grayscale = true;

        let json = config.to_json_string().unwrap();
        let parsed = AirbrushConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_rejects_zero_canvas() {
        let result = AirbrushConfig::from_json_str(r#"{ "canvas": { "width": 0 } }"#);
        assert!(matches!(result, Err(ConfigError::InvalidCanvas { .. })));
    }

    #[test]
    fn test_rejects_zero_tile_size() {
        let result = AirbrushConfig::from_json_str(r#"{ "canvas": { "tile_size": 0 } }"#);
        assert!(matches!(result, Err(ConfigError::InvalidTileSize(0))));
    }

    #[test]
    fn test_rejects_oversized_brush() {
        let result = AirbrushConfig::from_json_str(r#"{ "brush": { "max_size": 1e10 } }"#);
        assert!(matches!(result, Err(ConfigError::InvalidBrushSize { .. })));

        let result = AirbrushConfig::from_json_str(r#"{ "brush": { "min_size": -1.0 } }"#);
        assert!(matches!(result, Err(ConfigError::InvalidBrushSize { .. })));
    }

    #[test]
    fn test_rejects_non_finite_brush_size() {
        let mut config = AirbrushConfig::default();
        config.brush.max_size = f32::INFINITY;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBrushSize { .. })));

        config.brush.max_size = 40.0;
        config.brush.min_size = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBrushSize { .. })));
    }

    #[test]
    fn test_accepts_brush_size_limit() {
        let mut config = AirbrushConfig::default();
        config.brush.max_size = MAX_BRUSH_SIZE;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_json() {
        let result = AirbrushConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }
}
