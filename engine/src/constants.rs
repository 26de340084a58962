//! Internal constants for docking engine tuning.
//!
//! Centralizes the magic numbers used throughout the engine. Configuration
//! defaults (`crate::config`) are derived from these values.

/// Timing constants for debouncing.
pub mod timing {
    /// Quiet period before a zone bounds recomputation runs (ms).
    ///
    /// Bursts of layout events (resize, scroll, content mutation) within
    /// this window are coalesced into a single measurement. This bounds
    /// recomputation cost; missed intermediate updates are corrected by
    /// the next trigger.
    pub const BOUNDS_SETTLE_MS: u64 = 100;
}

/// Snap-to-grid constants.
pub mod grid {
    /// Default grid pitch for snap-to-grid placement (px).
    pub const DEFAULT_PITCH: f64 = 20.0;
}

/// Default geometry for items and zones.
pub mod defaults {
    /// Fallback floating position for items without a recorded one (px).
    pub const FLOAT_X: f64 = 100.0;
    /// Fallback floating position for items without a recorded one (px).
    pub const FLOAT_Y: f64 = 100.0;

    /// Minimum width a resizable zone can shrink to (px).
    pub const ZONE_MIN_WIDTH: f64 = 200.0;
    /// Minimum height a resizable zone can shrink to (px).
    pub const ZONE_MIN_HEIGHT: f64 = 150.0;

    /// Initial width for a resizable zone before its first measurement (px).
    pub const ZONE_INITIAL_WIDTH: f64 = 400.0;
    /// Initial height for a resizable zone before its first measurement (px).
    pub const ZONE_INITIAL_HEIGHT: f64 = 300.0;
}

/// Rendered footprints per size class (px).
pub mod sizes {
    /// Small item footprint.
    pub const SMALL: (f64, f64) = (240.0, 160.0);
    /// Medium item footprint.
    pub const MEDIUM: (f64, f64) = (320.0, 220.0);
    /// Large item footprint.
    pub const LARGE: (f64, f64) = (400.0, 280.0);
    /// Extra-large item footprint.
    pub const X_LARGE: (f64, f64) = (520.0, 360.0);
}

// ============================================================================
// Tests
// ============================================================================
