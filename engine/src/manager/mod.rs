//! The docking manager.
//!
//! [`DockManager`] is the single shared context for the engine: it owns
//! the item and zone registries, the global interaction toggles, and the
//! (at most one) live drag session. Presentation components call its
//! entry points from their mount/unmount and pointer handlers and render
//! from its query surface; they never write registry fields directly.
//!
//! The manager is single-threaded by construction: every mutation takes
//! `&mut self`, so one event-handling turn runs to completion before the
//! next can observe the state. Hosts that need a shared handle can wrap
//! it in [`SharedManager`].

mod drag_ops;
mod item_ops;
mod zone_ops;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::EngineConfig;
use crate::drag::DragSession;
use crate::geometry::Rect;
use crate::item::{DockItem, SizeClass};
use crate::state::{EngineSnapshot, EngineState};
use crate::zone::DockZone;

/// Shared handle to a manager, for hosts with multiple consumers.
///
/// The engine itself never locks; this alias only packages the common
/// embedding pattern.
pub type SharedManager = Arc<RwLock<DockManager>>;

/// The drag-and-dock interaction engine.
#[derive(Debug, Default)]
pub struct DockManager {
    config: EngineConfig,
    state: EngineState,
    session: Option<DragSession>,
}

impl DockManager {
    /// Creates a manager with default configuration.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Creates a manager with the given configuration.
    ///
    /// The grid config seeds the runtime snap/overlay toggles.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let mut state = EngineState::new();
        state.snap_to_grid = config.grid.snap_enabled;
        state.show_grid_overlay = config.grid.show_overlay;
        Self {
            config,
            state,
            session: None,
        }
    }

    /// Wraps a manager in a shared handle.
    #[must_use]
    pub fn into_shared(self) -> SharedManager { Arc::new(RwLock::new(self)) }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig { &self.config }

    // ========================================================================
    // Query surface
    // ========================================================================

    /// Gets an item by id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&DockItem> { self.state.item(id) }

    /// Iterates all registered items in arbitrary order.
    pub fn items(&self) -> impl Iterator<Item = &DockItem> { self.state.items.values() }

    /// Returns the number of registered items.
    #[must_use]
    pub fn item_count(&self) -> usize { self.state.items.len() }

    /// Gets a zone by id.
    #[must_use]
    pub fn zone(&self, id: &str) -> Option<&DockZone> { self.state.zone(id) }

    /// Iterates all registered zones in registration order.
    pub fn zones(&self) -> impl Iterator<Item = &DockZone> { self.state.zones.iter() }

    /// Returns the number of registered zones.
    #[must_use]
    pub fn zone_count(&self) -> usize { self.state.zones.len() }

    /// Returns `true` while a drag session is live.
    #[must_use]
    pub const fn is_dragging(&self) -> bool { self.session.is_some() }

    /// Returns the id of the item being dragged, if any.
    #[must_use]
    pub fn dragged_item_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.item_id.as_str())
    }

    /// Returns the zone currently hovered by the drag, if any.
    #[must_use]
    pub fn hovered_zone(&self) -> Option<&str> {
        self.session.as_ref().and_then(|s| s.hovered_zone_id.as_deref())
    }

    /// Returns `true` when a dock preview should render.
    #[must_use]
    pub fn preview_visible(&self) -> bool {
        self.session.as_ref().is_some_and(DragSession::preview_visible)
    }

    /// Resolves the effective size class for a registered item.
    ///
    /// Applies the global size override when one is set.
    #[must_use]
    pub fn effective_size_class(&self, id: &str) -> Option<SizeClass> {
        self.state.item(id).map(|item| self.state.effective_size_class(item))
    }

    /// Computes the rectangle an item occupies at its current position,
    /// using its effective size-class dimensions.
    #[must_use]
    pub fn item_rect(&self, id: &str) -> Option<Rect> {
        let item = self.state.item(id)?;
        let size = self.state.effective_size_class(item);
        let dims = self.config.sizes.dimensions(size);
        Some(Rect::from_origin_size(item.position, dims.width, dims.height))
    }

    /// Builds a serializable snapshot for presentation layers.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            items: self.state.items.clone(),
            zones: self.state.zones.clone(),
            global_size_class: self.state.global_size_class,
            snap_to_grid: self.state.snap_to_grid,
            show_grid_overlay: self.state.show_grid_overlay,
            is_dragging: self.session.is_some(),
            hovered_zone_id: self.hovered_zone().map(str::to_string),
        }
    }

    // ========================================================================
    // Global toggles
    // ========================================================================

    /// Returns whether snap-to-grid is enabled.
    #[must_use]
    pub const fn snap_to_grid(&self) -> bool { self.state.snap_to_grid }

    /// Enables or disables snap-to-grid.
    pub fn set_snap_to_grid(&mut self, enabled: bool) { self.state.snap_to_grid = enabled; }

    /// Returns whether the grid overlay is visible.
    #[must_use]
    pub const fn show_grid_overlay(&self) -> bool { self.state.show_grid_overlay }

    /// Shows or hides the grid overlay.
    pub fn set_show_grid_overlay(&mut self, visible: bool) {
        self.state.show_grid_overlay = visible;
    }

    /// Returns the global size override, if active.
    #[must_use]
    pub const fn global_size_class(&self) -> Option<SizeClass> { self.state.global_size_class }

    /// Sets or clears the global size override.
    pub fn set_global_size_class(&mut self, size: Option<SizeClass>) {
        self.state.global_size_class = size;
    }

    // ========================================================================
    // Internal access
    // ========================================================================

    /// The owned state, for op modules.
    pub(crate) const fn state(&self) -> &EngineState { &self.state }

    /// The owned state, for op modules.
    pub(crate) fn state_mut(&mut self) -> &mut EngineState { &mut self.state }

    /// The live session slot, for the drag controller.
    pub(crate) const fn session(&self) -> Option<&DragSession> { self.session.as_ref() }

    /// The live session slot, for the drag controller.
    pub(crate) fn session_mut(&mut self) -> &mut Option<DragSession> { &mut self.session }
}

// ============================================================================
// Tests
// ============================================================================
