//! Item registry operations.
//!
//! Registration is idempotent because component mount effects can fire
//! twice; unknown-id mutations are logged no-ops. Only `dock_item`
//! reports failure to its caller, so the drag controller can fall back
//! to a floating placement on rejection.

use tracing::{debug, warn};

use super::DockManager;
use crate::error::{DockError, DockResult};
use crate::geometry::Point;
use crate::item::{DockItem, ItemSpec, SizeClass};

impl DockManager {
    /// Registers a new draggable item.
    ///
    /// A duplicate id is a no-op and returns `false`. New items receive a
    /// monotonically assigned z-index. When the spec names a dock zone,
    /// the item is docked best-effort after insertion; a rejection leaves
    /// it floating.
    pub fn register_item(&mut self, spec: ItemSpec) -> bool {
        if self.state().items.contains_key(&spec.id) {
            debug!(item = %spec.id, "duplicate item registration ignored");
            return false;
        }

        let position = spec.initial_position();
        let z_index = self.state_mut().next_z_index();
        let item = DockItem {
            id: spec.id.clone(),
            kind: spec.kind,
            size_class: spec.size_class,
            position,
            is_docked: false,
            dock_zone_id: None,
            z_index,
        };
        self.state_mut().items.insert(spec.id.clone(), item);
        debug!(item = %spec.id, "item registered");

        if let Some(zone_id) = spec.dock_zone_id {
            if let Err(err) = self.dock_item(&spec.id, &zone_id, None) {
                debug!(item = %spec.id, zone = %zone_id, %err, "initial dock rejected, item left floating");
            }
        }

        true
    }

    /// Unregisters an item.
    ///
    /// Removes the item from its zone's member list, if docked. An active
    /// drag of this item is cancelled first so no dangling session can
    /// outlive the item. No-op if the id is unknown.
    pub fn unregister_item(&mut self, id: &str) {
        if !self.state().items.contains_key(id) {
            debug!(item = %id, "unregister of unknown item ignored");
            return;
        }

        if self.dragged_item_id() == Some(id) {
            self.cancel_drag();
        }

        self.detach_from_zone(id);
        self.state_mut().items.remove(id);
        debug!(item = %id, "item unregistered");
    }

    /// Overwrites an item's own size class.
    ///
    /// Silent no-op on unknown ids. Does not touch the global override.
    pub fn update_item_size(&mut self, id: &str, size_class: SizeClass) {
        match self.state_mut().item_mut(id) {
            Some(item) => item.size_class = size_class,
            None => debug!(item = %id, "size update for unknown item ignored"),
        }
    }

    /// Raises an item above all others.
    ///
    /// Assigns the next value of the running z-counter, so the item
    /// renders on top until another is brought to front. O(1) amortized.
    pub fn bring_to_front(&mut self, id: &str) {
        if !self.state().items.contains_key(id) {
            debug!(item = %id, "bring_to_front for unknown item ignored");
            return;
        }

        let z_index = self.state_mut().next_z_index();
        if let Some(item) = self.state_mut().item_mut(id) {
            item.z_index = z_index;
        }
    }

    /// Docks an item into a zone.
    ///
    /// Fails with a rejection when the zone is at capacity or the item's
    /// *effective* size class is outside the zone's allow-list. On
    /// success the item leaves any previous zone and is inserted into the
    /// target's member list at `index` (clamped; `None` appends).
    pub fn dock_item(&mut self, id: &str, zone_id: &str, index: Option<usize>) -> DockResult<()> {
        let Some(item) = self.state().item(id) else {
            return Err(DockError::ItemNotFound(id.to_string()));
        };
        let effective_size = self.state().effective_size_class(item);

        let Some(zone) = self.state().zone(zone_id) else {
            return Err(DockError::ZoneNotFound(zone_id.to_string()));
        };

        // Re-docking into the current zone repositions within it, so the
        // capacity check must not count the item itself.
        let already_member = zone.contains_member(id);
        if !already_member && !zone.has_capacity() {
            return Err(DockError::ZoneAtCapacity {
                zone: zone_id.to_string(),
                capacity: zone.max_items.unwrap_or(usize::MAX),
            });
        }
        if !zone.accepts_size(effective_size) {
            return Err(DockError::SizeClassNotAllowed {
                zone: zone_id.to_string(),
                size: effective_size,
            });
        }

        self.detach_from_zone(id);
        if let Some(zone) = self.state_mut().zone_mut(zone_id) {
            zone.insert_member(id.to_string(), index);
        }
        if let Some(item) = self.state_mut().item_mut(id) {
            item.is_docked = true;
            item.dock_zone_id = Some(zone_id.to_string());
        }

        debug!(item = %id, zone = %zone_id, "item docked");
        debug_assert!(self.state().dock_invariants_hold());
        Ok(())
    }

    /// Undocks an item, restoring it to its last known floating position.
    pub fn undock_item(&mut self, id: &str) {
        if !self.state().items.contains_key(id) {
            debug!(item = %id, "undock of unknown item ignored");
            return;
        }

        self.undock_to_position(id, None);
    }

    /// Undocks an item, optionally committing a new floating position.
    ///
    /// `None` keeps the last recorded floating position (or the engine
    /// default for items that never floated).
    pub(crate) fn undock_to_position(&mut self, id: &str, position: Option<Point>) {
        self.detach_from_zone(id);
        if let Some(item) = self.state_mut().item_mut(id) {
            item.is_docked = false;
            item.dock_zone_id = None;
            if let Some(position) = position {
                item.position = position;
            }
            debug!(item = %id, "item undocked");
        }
        debug_assert!(self.state().dock_invariants_hold());
    }

    /// Removes an item from its current zone's member list, if any.
    ///
    /// Leaves the item's own dock fields untouched; callers decide
    /// whether this is a move or an undock.
    pub(crate) fn detach_from_zone(&mut self, id: &str) {
        let Some(previous) = self
            .state()
            .item(id)
            .and_then(|item| item.dock_zone_id.clone())
        else {
            return;
        };

        match self.state_mut().zone_mut(&previous) {
            Some(zone) => {
                zone.remove_member(id);
            }
            None => warn!(item = %id, zone = %previous, "stale zone reference on item"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::geometry::Point;
    use crate::item::{ItemSpec, SizeClass};
    use crate::manager::DockManager;
    use crate::zone::ZoneSpec;

    fn manager_with_zone(spec: ZoneSpec) -> DockManager {
        let mut manager = DockManager::new();
        manager.register_zone(spec);
        manager
    }

    #[test]
    fn test_registration_is_idempotent() {
        let mut manager = DockManager::new();

        assert!(manager.register_item(
            ItemSpec::new("gauge", "chart").with_position(Point::new(10.0, 10.0))
        ));
        let first = manager.item("gauge").unwrap().clone();

        // Second registration with different attributes must not win
        assert!(!manager.register_item(
            ItemSpec::new("gauge", "other")
                .with_size(SizeClass::XLarge)
                .with_position(Point::new(999.0, 999.0))
        ));

        assert_eq!(manager.item("gauge").unwrap(), &first);
        assert_eq!(manager.item_count(), 1);
    }

    #[test]
    fn test_z_index_assignment_is_monotonic() {
        let mut manager = DockManager::new();
        manager.register_item(ItemSpec::new("a", "chart"));
        manager.register_item(ItemSpec::new("b", "chart"));

        let za = manager.item("a").unwrap().z_index;
        let zb = manager.item("b").unwrap().z_index;
        assert!(zb > za);
    }

    #[test]
    fn test_bring_to_front_total_order() {
        let mut manager = DockManager::new();
        manager.register_item(ItemSpec::new("a", "chart"));
        manager.register_item(ItemSpec::new("b", "chart"));
        manager.register_item(ItemSpec::new("c", "chart"));

        manager.bring_to_front("a");
        manager.bring_to_front("c");
        manager.bring_to_front("b");

        let za = manager.item("a").unwrap().z_index;
        let zb = manager.item("b").unwrap().z_index;
        let zc = manager.item("c").unwrap().z_index;
        assert!(za < zc && zc < zb);
    }

    #[test]
    fn test_bring_to_front_unknown_id_is_noop() {
        let mut manager = DockManager::new();
        manager.register_item(ItemSpec::new("a", "chart"));
        let before = manager.item("a").unwrap().z_index;

        manager.bring_to_front("ghost");
        assert_eq!(manager.item("a").unwrap().z_index, before);
    }

    #[test]
    fn test_update_item_size() {
        let mut manager = DockManager::new();
        manager.register_item(ItemSpec::new("a", "chart"));

        manager.update_item_size("a", SizeClass::XLarge);
        assert_eq!(manager.item("a").unwrap().size_class, SizeClass::XLarge);

        // Unknown id: silent no-op
        manager.update_item_size("ghost", SizeClass::Small);
    }

    #[test]
    fn test_dock_and_undock_round_trip() {
        let mut manager = manager_with_zone(ZoneSpec::new("alpha", "Alpha"));
        manager.register_item(
            ItemSpec::new("a", "chart").with_position(Point::new(42.0, 24.0)),
        );

        manager.dock_item("a", "alpha", None).unwrap();
        let item = manager.item("a").unwrap();
        assert!(item.is_docked);
        assert_eq!(item.dock_zone_id.as_deref(), Some("alpha"));
        assert!(manager.zone("alpha").unwrap().contains_member("a"));

        manager.undock_item("a");
        let item = manager.item("a").unwrap();
        assert!(!item.is_docked);
        assert!(item.dock_zone_id.is_none());
        // Floating position survives the round trip
        assert_eq!(item.position, Point::new(42.0, 24.0));
        assert!(!manager.zone("alpha").unwrap().contains_member("a"));
    }

    #[test]
    fn test_dock_rejected_at_capacity() {
        let mut manager = manager_with_zone(ZoneSpec::new("alpha", "Alpha").with_max_items(1));
        manager.register_item(ItemSpec::new("a", "chart"));
        manager.register_item(ItemSpec::new("b", "chart"));

        manager.dock_item("a", "alpha", None).unwrap();

        let err = manager.dock_item("b", "alpha", None).unwrap_err();
        assert!(err.is_rejection());

        let members: Vec<&str> = manager
            .zone("alpha")
            .unwrap()
            .member_ids
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(members, ["a"]);
        assert!(!manager.item("b").unwrap().is_docked);
    }

    #[test]
    fn test_dock_rejected_by_size_gate() {
        let mut manager = manager_with_zone(
            ZoneSpec::new("alpha", "Alpha").with_allowed_sizes(vec![SizeClass::Small]),
        );
        manager.register_item(ItemSpec::new("a", "chart").with_size(SizeClass::Large));

        let err = manager.dock_item("a", "alpha", None).unwrap_err();
        assert!(err.is_rejection());
        assert!(!manager.item("a").unwrap().is_docked);
    }

    #[test]
    fn test_size_gate_uses_effective_size() {
        let mut manager = manager_with_zone(
            ZoneSpec::new("alpha", "Alpha").with_allowed_sizes(vec![SizeClass::Small]),
        );
        manager.register_item(ItemSpec::new("a", "chart").with_size(SizeClass::Large));

        // Global override shrinks the item into eligibility
        manager.set_global_size_class(Some(SizeClass::Small));
        manager.dock_item("a", "alpha", None).unwrap();
        assert!(manager.item("a").unwrap().is_docked);
    }

    #[test]
    fn test_dock_moves_between_zones() {
        let mut manager = DockManager::new();
        manager.register_zone(ZoneSpec::new("alpha", "Alpha"));
        manager.register_zone(ZoneSpec::new("beta", "Beta"));
        manager.register_item(ItemSpec::new("a", "chart"));

        manager.dock_item("a", "alpha", None).unwrap();
        manager.dock_item("a", "beta", None).unwrap();

        assert!(!manager.zone("alpha").unwrap().contains_member("a"));
        assert!(manager.zone("beta").unwrap().contains_member("a"));
        assert_eq!(manager.item("a").unwrap().dock_zone_id.as_deref(), Some("beta"));
    }

    #[test]
    fn test_redock_into_full_zone_repositions() {
        let mut manager = manager_with_zone(ZoneSpec::new("alpha", "Alpha").with_max_items(2));
        manager.register_item(ItemSpec::new("a", "chart"));
        manager.register_item(ItemSpec::new("b", "chart"));

        manager.dock_item("a", "alpha", None).unwrap();
        manager.dock_item("b", "alpha", None).unwrap();

        // The zone is full, but moving an existing member is allowed
        manager.dock_item("a", "alpha", Some(1)).unwrap();
        let members: Vec<&str> = manager
            .zone("alpha")
            .unwrap()
            .member_ids
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(members, ["b", "a"]);
    }

    #[test]
    fn test_dock_at_index() {
        let mut manager = manager_with_zone(ZoneSpec::new("alpha", "Alpha"));
        manager.register_item(ItemSpec::new("a", "chart"));
        manager.register_item(ItemSpec::new("b", "chart"));
        manager.register_item(ItemSpec::new("c", "chart"));

        manager.dock_item("a", "alpha", None).unwrap();
        manager.dock_item("b", "alpha", None).unwrap();
        manager.dock_item("c", "alpha", Some(0)).unwrap();

        let members: Vec<&str> = manager
            .zone("alpha")
            .unwrap()
            .member_ids
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(members, ["c", "a", "b"]);
    }

    #[test]
    fn test_dock_unknown_ids() {
        let mut manager = manager_with_zone(ZoneSpec::new("alpha", "Alpha"));
        manager.register_item(ItemSpec::new("a", "chart"));

        let err = manager.dock_item("ghost", "alpha", None).unwrap_err();
        assert!(err.is_not_found());

        let err = manager.dock_item("a", "ghost", None).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_register_with_initial_dock() {
        let mut manager = manager_with_zone(ZoneSpec::new("alpha", "Alpha"));
        manager.register_item(ItemSpec::new("a", "chart").docked_into("alpha"));

        assert!(manager.item("a").unwrap().is_docked);
        assert!(manager.zone("alpha").unwrap().contains_member("a"));
    }

    #[test]
    fn test_register_with_rejected_initial_dock_leaves_floating() {
        let mut manager = manager_with_zone(ZoneSpec::new("alpha", "Alpha").with_max_items(0));
        manager.register_item(ItemSpec::new("a", "chart").docked_into("alpha"));

        let item = manager.item("a").unwrap();
        assert!(!item.is_docked);
        assert!(item.dock_zone_id.is_none());
    }

    #[test]
    fn test_unregister_removes_zone_membership() {
        let mut manager = manager_with_zone(ZoneSpec::new("alpha", "Alpha"));
        manager.register_item(ItemSpec::new("a", "chart"));
        manager.dock_item("a", "alpha", None).unwrap();

        manager.unregister_item("a");
        assert!(manager.item("a").is_none());
        assert!(manager.zone("alpha").unwrap().member_ids.is_empty());

        // Unknown id: no-op
        manager.unregister_item("a");
    }
}
