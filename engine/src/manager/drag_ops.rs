//! The drag state machine.
//!
//! `Idle → Dragging → {Docking | Floating}`: [`DockManager::start_drag`]
//! opens the single session slot, [`DockManager::drag_to`] advances it on
//! every pointer move, and [`DockManager::release`] or
//! [`DockManager::cancel_drag`] closes it. Both terminal states return
//! the engine to idle.
//!
//! While a docked item is dragged its membership stays intact; only the
//! session carries the in-flight position. Release is the single point
//! where dock membership and floating positions are committed, so a
//! cancelled drag can restore the grab-time state exactly.

use tracing::{debug, warn};

use super::DockManager;
use crate::drag::{DragOrigin, DragOutcome, DragSession};
use crate::geometry::{Point, Rect};

impl DockManager {
    /// Starts a drag session for an item.
    ///
    /// Returns `false` without side effects when a session is already
    /// live or the id is unknown. For floating items the
    /// pointer-to-origin offset is captured here so the item tracks the
    /// pointer without jumping to it. A docked item renders inside its
    /// zone and its recorded floating position is stale, so the carried
    /// position is seeded from the pointer instead (zero offset).
    pub fn start_drag(&mut self, id: &str, pointer: Point) -> bool {
        if self.is_dragging() {
            warn!(item = %id, "drag start rejected, session already live");
            return false;
        }
        let Some(item) = self.state().item(id) else {
            warn!(item = %id, "drag start rejected, unknown item");
            return false;
        };

        let (grab_offset, start_position) = if item.is_docked {
            (Point::default(), pointer)
        } else {
            (pointer.delta_from(item.position), item.position)
        };
        let origin = DragOrigin {
            position: item.position,
            dock_zone_id: item.dock_zone_id.clone(),
        };
        let session = DragSession {
            item_id: id.to_string(),
            grab_offset,
            current_position: start_position,
            origin,
            hovered_zone_id: None,
        };
        *self.session_mut() = Some(session);
        debug!(item = %id, "drag started");
        true
    }

    /// Advances the live drag to a new pointer position.
    ///
    /// Recomputes the carried position (snapped when snap-to-grid is on),
    /// mirrors it onto floating items, and re-evaluates the hovered zone.
    /// No-op when no session is live.
    pub fn drag_to(&mut self, pointer: Point) {
        let Some(session) = self.session() else {
            return;
        };
        let item_id = session.item_id.clone();
        let grab_offset = session.grab_offset;

        let mut position = pointer.delta_from(grab_offset);
        if self.snap_to_grid() {
            position = position.snapped_to_grid(self.config().grid.pitch);
        }

        // Docked items keep their last floating position until release
        // commits a new one.
        let floating = self
            .state()
            .item(&item_id)
            .is_some_and(|item| !item.is_docked);
        if floating {
            if let Some(item) = self.state_mut().item_mut(&item_id) {
                item.position = position;
            }
        }

        let hovered = self.zone_under(&item_id, position);
        if let Some(session) = self.session_mut() {
            session.current_position = position;
            session.hovered_zone_id = hovered;
        }
    }

    /// Releases the live drag, resolving it to a terminal state.
    ///
    /// Hovering a zone resolves to a dock attempt; a rejected dock falls
    /// through to the floating outcome, committing the carried position.
    /// Returns `None` when no session is live.
    pub fn release(&mut self, pointer: Point) -> Option<DragOutcome> {
        self.session()?;
        self.drag_to(pointer);

        let session = self.session_mut().take()?;
        let item_id = session.item_id;

        if let Some(zone_id) = session.hovered_zone_id {
            match self.dock_item(&item_id, &zone_id, None) {
                Ok(()) => {
                    debug!(item = %item_id, zone = %zone_id, "drag resolved to dock");
                    return Some(DragOutcome::Docked { zone_id });
                }
                Err(err) => {
                    debug!(item = %item_id, zone = %zone_id, %err, "dock rejected on release");
                }
            }
        }

        let position = session.current_position;
        self.undock_to_position(&item_id, Some(position));
        debug!(item = %item_id, ?position, "drag resolved to floating");
        Some(DragOutcome::Floating { position })
    }

    /// Cancels the live drag, restoring the grab-time state.
    ///
    /// The item keeps the position and dock membership it had when the
    /// drag started, as if the session never happened. No-op when no
    /// session is live.
    pub fn cancel_drag(&mut self) {
        let Some(session) = self.session_mut().take() else {
            return;
        };

        if let Some(item) = self.state_mut().item_mut(&session.item_id) {
            item.position = session.origin.position;
        }
        debug!(item = %session.item_id, "drag cancelled");
        debug_assert!(self.state().dock_invariants_hold());
    }

    /// Finds the first zone (in registration order) whose bounds
    /// intersect the item's rectangle at the given position.
    ///
    /// Intersection is strict: shared edges do not count.
    fn zone_under(&self, item_id: &str, position: Point) -> Option<String> {
        let item = self.state().item(item_id)?;
        let size = self.state().effective_size_class(item);
        let dims = self.config().sizes.dimensions(size);
        let rect = Rect::from_origin_size(position, dims.width, dims.height);

        self.state()
            .zones
            .iter()
            .find(|zone| zone.bounds.intersects(&rect))
            .map(|zone| zone.id.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================
