//! Draggable item types.
//!
//! A [`DockItem`] is the canonical record for one draggable panel: its
//! identity, size class, floating position, dock membership, and stacking
//! order. Items are owned exclusively by the engine state; presentation
//! components read derived snapshots and never hold private copies of
//! docking truth.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::geometry::Point;

// ============================================================================
// Size Class
// ============================================================================

/// Ordinal size category governing an item's rendered footprint.
///
/// Ordering follows footprint size: `Small < Medium < Large < XLarge`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum SizeClass {
    /// Compact footprint.
    Small,
    /// Standard footprint.
    #[default]
    Medium,
    /// Expanded footprint.
    Large,
    /// Full-panel footprint.
    XLarge,
}

impl SizeClass {
    /// All size classes in ascending order.
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::XLarge];
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "x-large",
        };
        write!(f, "{name}")
    }
}

// ============================================================================
// Item
// ============================================================================

/// A draggable item tracked by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DockItem {
    /// Unique item identifier.
    pub id: String,

    /// Free-form tag describing what the item renders ("chart", "nexus", ...).
    pub kind: String,

    /// The item's own size class. The effective size may differ when a
    /// global size override is active.
    pub size_class: SizeClass,

    /// Last known floating position (top-left corner).
    ///
    /// Meaningful only while the item is not docked; retained while docked
    /// so undocking can restore the item where it last floated.
    pub position: Point,

    /// Whether the item is docked into a zone.
    ///
    /// Invariant: `is_docked == dock_zone_id.is_some()`.
    pub is_docked: bool,

    /// The zone holding this item, set iff docked.
    pub dock_zone_id: Option<String>,

    /// Stacking order; strictly increasing on interaction.
    pub z_index: i64,
}

impl DockItem {
    /// Returns `true` if the dock-state invariant holds for this item.
    #[must_use]
    pub const fn dock_state_consistent(&self) -> bool {
        self.is_docked == self.dock_zone_id.is_some()
    }
}

/// Registration input for a new item.
///
/// The `z_index` is assigned by the registry, never by the caller. When
/// `dock_zone_id` names a zone, registration attempts a best-effort dock
/// after insertion; a rejection leaves the item floating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemSpec {
    /// Unique item identifier.
    pub id: String,

    /// Free-form tag describing what the item renders.
    pub kind: String,

    /// Initial size class.
    #[serde(default)]
    pub size_class: SizeClass,

    /// Initial floating position. Defaults to the engine fallback.
    #[serde(default)]
    pub position: Option<Point>,

    /// Zone to dock into immediately after registration, if any.
    #[serde(default)]
    pub dock_zone_id: Option<String>,
}

impl ItemSpec {
    /// Creates a floating item spec with the default size class.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            size_class: SizeClass::default(),
            position: None,
            dock_zone_id: None,
        }
    }

    /// Sets the initial size class.
    #[must_use]
    pub const fn with_size(mut self, size_class: SizeClass) -> Self {
        self.size_class = size_class;
        self
    }

    /// Sets the initial floating position.
    #[must_use]
    pub const fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    /// Requests an immediate dock into the named zone.
    #[must_use]
    pub fn docked_into(mut self, zone_id: impl Into<String>) -> Self {
        self.dock_zone_id = Some(zone_id.into());
        self
    }

    /// Resolves the initial position, falling back to the engine default.
    #[must_use]
    pub fn initial_position(&self) -> Point {
        self.position
            .unwrap_or(EngineConfig::default_float_position())
    }
}

// ============================================================================
// Tests
// ============================================================================
