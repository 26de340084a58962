//! Zone registry operations.
//!
//! Zones register in evaluation order: during a drag, the first
//! registered zone whose bounds intersect the dragged item wins. Bounds
//! are owned by the host layout; the engine only records what the bounds
//! synchronizer reports.

use tracing::debug;

use super::DockManager;
use crate::geometry::Rect;
use crate::zone::ZoneSpec;

impl DockManager {
    /// Registers a new dock zone.
    ///
    /// A duplicate id is a no-op and returns `false`. Registration order
    /// is preserved and decides zone-collision priority.
    pub fn register_zone(&mut self, spec: ZoneSpec) -> bool {
        if self.state().zone(&spec.id).is_some() {
            debug!(zone = %spec.id, "duplicate zone registration ignored");
            return false;
        }

        let id = spec.id.clone();
        self.state_mut().zones.push(spec.into_zone());
        debug!(zone = %id, "zone registered");
        true
    }

    /// Unregisters a zone, undocking every member.
    ///
    /// Members become floating at their last recorded floating position.
    /// A drag hovering this zone loses its hover. No-op on unknown ids.
    pub fn unregister_zone(&mut self, id: &str) {
        let Some(index) = self.state().zone_index(id) else {
            debug!(zone = %id, "unregister of unknown zone ignored");
            return;
        };

        let members: Vec<String> = self.state().zones[index]
            .member_ids
            .iter()
            .cloned()
            .collect();
        for member in &members {
            if let Some(item) = self.state_mut().item_mut(member) {
                item.is_docked = false;
                item.dock_zone_id = None;
            }
        }
        self.state_mut().zones.remove(index);

        if let Some(session) = self.session_mut() {
            if session.hovered_zone_id.as_deref() == Some(id) {
                session.hovered_zone_id = None;
            }
        }

        debug!(zone = %id, members = members.len(), "zone unregistered");
        debug_assert!(self.state().dock_invariants_hold());
    }

    /// Records a zone's measured on-screen footprint.
    ///
    /// Called by the bounds synchronizer after layout settles. No-op on
    /// unknown ids.
    pub fn update_zone_bounds(&mut self, id: &str, bounds: Rect) {
        match self.state_mut().zone_mut(id) {
            Some(zone) => zone.bounds = bounds,
            None => debug!(zone = %id, "bounds update for unknown zone ignored"),
        }
    }

    /// Resizes a zone, clamping its dimensions to the configured minimums.
    ///
    /// The origin is stored as given, so left/top-handle resizes keep
    /// collision checks current while the gesture is still in flight.
    /// No-op with a log line when the zone is fixed-size or unknown.
    pub fn resize_zone(&mut self, id: &str, bounds: Rect) {
        let Some(zone) = self.state_mut().zone_mut(id) else {
            debug!(zone = %id, "resize of unknown zone ignored");
            return;
        };
        if !zone.is_resizable {
            debug!(zone = %id, "resize of fixed-size zone ignored");
            return;
        }

        zone.bounds = Rect::new(
            bounds.x,
            bounds.y,
            bounds.width.max(zone.min_width),
            bounds.height.max(zone.min_height),
        );
    }

    /// Returns a zone's member ids in display order.
    #[must_use]
    pub fn members_of(&self, zone_id: &str) -> Option<&[String]> {
        self.state().zone(zone_id).map(|z| z.member_ids.as_slice())
    }
}

// ============================================================================
// Tests
// ============================================================================
