//! Drag session types.
//!
//! At most one [`DragSession`] is live at a time, owned by the manager.
//! The session is ephemeral bookkeeping for the `Idle → Dragging →
//! {Docking | Floating}` state machine in `manager::drag_ops`; both
//! terminal states clear the session and feed back to idle.

use serde::Serialize;

use crate::geometry::Point;

/// The item state captured at grab time, used to restore on cancellation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DragOrigin {
    /// The item's floating position before the grab.
    pub position: Point,
    /// The zone the item was docked to before the grab, if any.
    pub dock_zone_id: Option<String>,
}

/// A live drag session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DragSession {
    /// The item being dragged.
    pub item_id: String,

    /// Pointer-to-item-origin offset captured at grab time.
    pub grab_offset: Point,

    /// The item state before the grab.
    pub origin: DragOrigin,

    /// The position carried by the drag (top-left corner), updated on
    /// every pointer move. Committed to the item on release.
    pub current_position: Point,

    /// The first zone (in registration order) whose bounds intersect the
    /// dragged item's rectangle, if any.
    pub hovered_zone_id: Option<String>,
}

impl DragSession {
    /// Returns `true` when a dock preview should render.
    #[must_use]
    pub const fn preview_visible(&self) -> bool { self.hovered_zone_id.is_some() }

    /// Returns `true` if the item was docked when grabbed.
    #[must_use]
    pub const fn grabbed_from_dock(&self) -> bool { self.origin.dock_zone_id.is_some() }
}

/// How a drag session resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum DragOutcome {
    /// The item docked into a zone.
    Docked {
        /// The zone that accepted the item.
        zone_id: String,
    },
    /// The item stayed (or became) free-floating.
    Floating {
        /// The committed floating position.
        position: Point,
    },
}

// ============================================================================
// Tests
// ============================================================================
