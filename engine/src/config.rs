//! Engine configuration types.
//!
//! Hosts can deserialize an [`EngineConfig`] from JSON to tune the grid
//! pitch, the bounds settle time, and the size-class dimension table.
//! All fields default to the values in [`crate::constants`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::{defaults, grid, sizes, timing};
use crate::geometry::Point;
use crate::item::SizeClass;

/// Pixel dimensions for one size class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SizeDimensions {
    /// Rendered width (px).
    pub width: f64,
    /// Rendered height (px).
    pub height: f64,
}

impl SizeDimensions {
    /// Creates a new dimensions pair.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }
}

/// Rendered footprint per size class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SizeTable {
    /// Footprint for [`SizeClass::Small`].
    pub small: SizeDimensions,
    /// Footprint for [`SizeClass::Medium`].
    pub medium: SizeDimensions,
    /// Footprint for [`SizeClass::Large`].
    pub large: SizeDimensions,
    /// Footprint for [`SizeClass::XLarge`].
    pub x_large: SizeDimensions,
}

impl Default for SizeTable {
    fn default() -> Self {
        Self {
            small: SizeDimensions::new(sizes::SMALL.0, sizes::SMALL.1),
            medium: SizeDimensions::new(sizes::MEDIUM.0, sizes::MEDIUM.1),
            large: SizeDimensions::new(sizes::LARGE.0, sizes::LARGE.1),
            x_large: SizeDimensions::new(sizes::X_LARGE.0, sizes::X_LARGE.1),
        }
    }
}

impl SizeTable {
    /// Looks up the footprint for a size class.
    #[must_use]
    pub const fn dimensions(&self, size: SizeClass) -> SizeDimensions {
        match size {
            SizeClass::Small => self.small,
            SizeClass::Medium => self.medium,
            SizeClass::Large => self.large,
            SizeClass::XLarge => self.x_large,
        }
    }
}

/// Snap-to-grid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Grid pitch in pixels.
    /// Default: 20
    pub pitch: f64,

    /// Whether snapping starts enabled.
    /// Default: false
    pub snap_enabled: bool,

    /// Whether the grid overlay starts visible.
    /// Default: false
    pub show_overlay: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            pitch: grid::DEFAULT_PITCH,
            snap_enabled: false,
            show_overlay: false,
        }
    }
}

/// Bounds synchronizer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct BoundsConfig {
    /// Quiet period before a zone bounds recomputation runs (ms).
    /// Default: 100
    pub settle_ms: u64,
}

impl Default for BoundsConfig {
    fn default() -> Self { Self { settle_ms: timing::BOUNDS_SETTLE_MS } }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Snap-to-grid settings.
    pub grid: GridConfig,
    /// Bounds synchronizer settings.
    pub bounds: BoundsConfig,
    /// Size-class dimension table.
    pub sizes: SizeTable,
}

impl EngineConfig {
    /// Fallback floating position for items without a recorded one.
    #[must_use]
    pub const fn default_float_position() -> Point {
        Point::new(defaults::FLOAT_X, defaults::FLOAT_Y)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.grid.pitch, grid::DEFAULT_PITCH);
        assert!(!config.grid.snap_enabled);
        assert!(!config.grid.show_overlay);
        assert_eq!(config.bounds.settle_ms, timing::BOUNDS_SETTLE_MS);
    }

    #[test]
    fn test_size_table_lookup() {
        let table = SizeTable::default();
        assert_eq!(table.dimensions(SizeClass::Small), table.small);
        assert_eq!(table.dimensions(SizeClass::XLarge), table.x_large);
        assert!(table.small.width < table.x_large.width);
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let json = r#"{"grid": {"pitch": 10}}"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.grid.pitch, 10.0);
        assert!(!config.grid.snap_enabled);
        assert_eq!(config.bounds.settle_ms, timing::BOUNDS_SETTLE_MS);
        assert_eq!(config.sizes, SizeTable::default());
    }

    #[test]
    fn test_config_round_trips() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
