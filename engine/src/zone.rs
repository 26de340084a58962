//! Dock zone types.
//!
//! A [`DockZone`] is a named container with capacity and size-class
//! constraints. Member order is insertion order and doubles as display
//! order. Zone bounds are the last DOM-derived footprint reported by the
//! bounds synchronizer, not a layout the engine computes itself.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::defaults;
use crate::geometry::Rect;
use crate::item::SizeClass;

/// Inline capacity for zone member lists.
///
/// Most zones hold only a handful of items; `SmallVec` avoids heap
/// allocations for the common case.
pub const MEMBERS_INLINE_CAP: usize = 4;

/// Ordered member id storage for a zone.
pub type MemberIds = SmallVec<[String; MEMBERS_INLINE_CAP]>;

// ============================================================================
// Zone
// ============================================================================

/// A dock zone tracked by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DockZone {
    /// Unique zone identifier.
    pub id: String,

    /// Human-readable label.
    pub label: String,

    /// Maximum number of docked items, if capped.
    pub max_items: Option<usize>,

    /// Size classes this zone accepts. `None` accepts all sizes.
    pub allowed_size_classes: Option<Vec<SizeClass>>,

    /// Ids of docked items, in insertion (= display) order.
    #[schemars(with = "Vec<String>")]
    pub member_ids: MemberIds,

    /// Last known on-screen footprint of the zone.
    pub bounds: Rect,

    /// Whether the zone can be resized by the user.
    pub is_resizable: bool,

    /// Minimum width the zone can shrink to.
    pub min_width: f64,

    /// Minimum height the zone can shrink to.
    pub min_height: f64,
}

impl DockZone {
    /// Returns `true` if the zone has room for another item.
    #[must_use]
    pub fn has_capacity(&self) -> bool {
        self.max_items.is_none_or(|cap| self.member_ids.len() < cap)
    }

    /// Returns `true` if the zone accepts the given size class.
    #[must_use]
    pub fn accepts_size(&self, size: SizeClass) -> bool {
        self.allowed_size_classes
            .as_ref()
            .is_none_or(|allowed| allowed.contains(&size))
    }

    /// Returns `true` if the given item id is a member of this zone.
    #[must_use]
    pub fn contains_member(&self, item_id: &str) -> bool {
        self.member_ids.iter().any(|id| id == item_id)
    }

    /// Removes an item id from the member list, if present.
    ///
    /// Returns `true` if a member was removed.
    pub fn remove_member(&mut self, item_id: &str) -> bool {
        let before = self.member_ids.len();
        self.member_ids.retain(|id| id != item_id);
        self.member_ids.len() < before
    }

    /// Inserts an item id at the given index, clamped to the list length.
    ///
    /// `None` appends.
    pub fn insert_member(&mut self, item_id: String, index: Option<usize>) {
        let at = index
            .unwrap_or(self.member_ids.len())
            .min(self.member_ids.len());
        self.member_ids.insert(at, item_id);
    }
}

// ============================================================================
// Zone Spec
// ============================================================================

/// Registration input for a new zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSpec {
    /// Unique zone identifier.
    pub id: String,

    /// Human-readable label.
    pub label: String,

    /// Maximum number of docked items, if capped.
    #[serde(default)]
    pub max_items: Option<usize>,

    /// Size classes this zone accepts. `None` accepts all sizes.
    #[serde(default)]
    pub allowed_size_classes: Option<Vec<SizeClass>>,

    /// Whether the zone can be resized by the user. Defaults to `true`.
    #[serde(default = "default_resizable")]
    pub is_resizable: bool,

    /// Minimum width the zone can shrink to.
    #[serde(default = "default_min_width")]
    pub min_width: f64,

    /// Minimum height the zone can shrink to.
    #[serde(default = "default_min_height")]
    pub min_height: f64,
}

const fn default_resizable() -> bool { true }
const fn default_min_width() -> f64 { defaults::ZONE_MIN_WIDTH }
const fn default_min_height() -> f64 { defaults::ZONE_MIN_HEIGHT }

impl ZoneSpec {
    /// Creates a zone spec with default constraints (uncapped, all sizes).
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            max_items: None,
            allowed_size_classes: None,
            is_resizable: default_resizable(),
            min_width: default_min_width(),
            min_height: default_min_height(),
        }
    }

    /// Caps the number of items the zone can hold.
    #[must_use]
    pub const fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// Restricts the zone to the given size classes.
    #[must_use]
    pub fn with_allowed_sizes(mut self, sizes: impl Into<Vec<SizeClass>>) -> Self {
        self.allowed_size_classes = Some(sizes.into());
        self
    }

    /// Marks the zone as fixed-size.
    #[must_use]
    pub const fn fixed_size(mut self) -> Self {
        self.is_resizable = false;
        self
    }

    /// Overrides the minimum dimensions for a resizable zone.
    #[must_use]
    pub const fn with_min_size(mut self, min_width: f64, min_height: f64) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }

    /// Builds the zone record with its initial bounds.
    #[must_use]
    pub fn into_zone(self) -> DockZone {
        DockZone {
            id: self.id,
            label: self.label,
            max_items: self.max_items,
            allowed_size_classes: self.allowed_size_classes,
            member_ids: MemberIds::new(),
            bounds: Rect::new(
                0.0,
                0.0,
                defaults::ZONE_INITIAL_WIDTH,
                defaults::ZONE_INITIAL_HEIGHT,
            ),
            is_resizable: self.is_resizable,
            min_width: self.min_width,
            min_height: self.min_height,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
