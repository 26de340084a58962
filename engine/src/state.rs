//! Engine state container.
//!
//! [`EngineState`] owns the canonical item and zone registries plus the
//! global interaction toggles. It is a plain owned container (no ambient
//! globals) so tests can construct isolated instances; all mutation goes
//! through [`crate::manager::DockManager`] entry points.
//!
//! Zones are stored in registration order because zone-collision
//! evaluation is defined as a linear scan where the first intersecting
//! zone wins. Items are keyed by id; their display order is z-index.

use std::collections::HashMap;

use serde::Serialize;

use crate::item::{DockItem, SizeClass};
use crate::zone::DockZone;

/// The complete engine state.
#[derive(Debug, Default)]
pub struct EngineState {
    /// All registered items by id.
    pub items: HashMap<String, DockItem>,

    /// All registered zones, in registration order.
    pub zones: Vec<DockZone>,

    /// Running z-index counter; the highest value ever assigned.
    ///
    /// `bring_to_front` hands out `z_counter + 1` without rescanning.
    pub z_counter: i64,

    /// Uniform size override applied to all items when set.
    pub global_size_class: Option<SizeClass>,

    /// Whether floating positions snap to the grid.
    pub snap_to_grid: bool,

    /// Whether the grid overlay is visible.
    pub show_grid_overlay: bool,
}

impl EngineState {
    /// Creates a new empty state.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Gets an item by id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&DockItem> { self.items.get(id) }

    /// Gets a mutable item by id.
    pub fn item_mut(&mut self, id: &str) -> Option<&mut DockItem> { self.items.get_mut(id) }

    /// Gets a zone by id.
    #[must_use]
    pub fn zone(&self, id: &str) -> Option<&DockZone> { self.zones.iter().find(|z| z.id == id) }

    /// Gets a mutable zone by id.
    pub fn zone_mut(&mut self, id: &str) -> Option<&mut DockZone> {
        self.zones.iter_mut().find(|z| z.id == id)
    }

    /// Returns the index of a zone in registration order.
    #[must_use]
    pub fn zone_index(&self, id: &str) -> Option<usize> {
        self.zones.iter().position(|z| z.id == id)
    }

    /// Returns the next z-index and advances the counter.
    pub fn next_z_index(&mut self) -> i64 {
        self.z_counter += 1;
        self.z_counter
    }

    /// Resolves the effective size class for an item.
    ///
    /// The global override, when set, applies to all items uniformly.
    #[must_use]
    pub fn effective_size_class(&self, item: &DockItem) -> SizeClass {
        self.global_size_class.unwrap_or(item.size_class)
    }

    /// Checks the dock invariants across all items and zones.
    ///
    /// Returns `true` when every item's `is_docked` flag matches its zone
    /// field, every membership entry points at an item docked to that
    /// zone, and no capped zone exceeds its capacity. Used by tests and
    /// debug assertions.
    #[must_use]
    pub fn dock_invariants_hold(&self) -> bool {
        let items_consistent = self.items.values().all(|item| {
            item.dock_state_consistent()
                && item.dock_zone_id.as_ref().is_none_or(|zone_id| {
                    self.zone(zone_id).is_some_and(|z| z.contains_member(&item.id))
                })
        });

        let zones_consistent = self.zones.iter().all(|zone| {
            zone.max_items.is_none_or(|cap| zone.member_ids.len() <= cap)
                && zone.member_ids.iter().all(|member| {
                    self.items
                        .get(member)
                        .is_some_and(|item| item.dock_zone_id.as_deref() == Some(&zone.id))
                })
        });

        items_consistent && zones_consistent
    }
}

/// Read-only snapshot of the engine state for presentation layers.
///
/// Serializable view combining the registries and global toggles; hosts
/// render from this rather than reaching into the live state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSnapshot {
    /// All items by id.
    pub items: HashMap<String, DockItem>,
    /// All zones in registration order.
    pub zones: Vec<DockZone>,
    /// Uniform size override, if active.
    pub global_size_class: Option<SizeClass>,
    /// Whether floating positions snap to the grid.
    pub snap_to_grid: bool,
    /// Whether the grid overlay is visible.
    pub show_grid_overlay: bool,
    /// Whether a drag session is in progress.
    pub is_dragging: bool,
    /// The zone currently hovered by the drag, if any.
    pub hovered_zone_id: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================
