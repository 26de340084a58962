//! Debounced zone bounds synchronization.
//!
//! Zone footprints live in the host layout, not in the engine; the
//! engine only caches what a [`ZoneProbe`] measures. Layout churn (item
//! docks, zone resizes, container reflow) arrives as bursts of triggers,
//! so the synchronizer debounces per zone and measures once per burst,
//! after the layout has settled.
//!
//! Like the debouncer it is poll-driven: the host calls
//! [`BoundsSynchronizer::flush`] from its own tick and no background
//! work happens between calls.

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::BoundsConfig;
use crate::debounce::{Debouncer, KeyDebouncer};
use crate::error::DockResult;
use crate::geometry::Rect;
use crate::manager::DockManager;

/// Measures a zone's current on-screen footprint.
///
/// Implemented by the host over whatever layout system it renders with.
/// A zone that cannot be measured right now (detached from layout,
/// mid-transition) returns [`crate::error::DockError::MeasurementUnavailable`];
/// the synchronizer skips it without retrying, and the next layout
/// change reschedules it naturally.
pub trait ZoneProbe {
    /// Measures the named zone.
    fn measure(&self, zone_id: &str) -> DockResult<Rect>;
}

/// Debounced bridge between layout changes and zone bounds.
#[derive(Debug)]
pub struct BoundsSynchronizer {
    debouncer: KeyDebouncer<String>,
}

impl BoundsSynchronizer {
    /// Creates a synchronizer with the given quiet period.
    #[must_use]
    pub fn new(settle: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(settle),
        }
    }

    /// Creates a synchronizer from the engine's bounds configuration.
    #[must_use]
    pub fn from_config(config: &BoundsConfig) -> Self {
        Self::new(Duration::from_millis(config.settle_ms))
    }

    /// Schedules a zone for remeasurement after the quiet period.
    ///
    /// Re-triggering a zone already scheduled pushes its deadline out, so
    /// a burst of layout changes measures once.
    pub fn trigger(&mut self, zone_id: impl Into<String>) {
        let zone_id = zone_id.into();
        if self.debouncer.touch(zone_id.clone()) {
            debug!(zone = %zone_id, "bounds remeasure scheduled");
        }
    }

    /// Schedules every registered zone for remeasurement.
    ///
    /// Used after global layout events (container resize, size-class
    /// override changes) that move all zones at once.
    pub fn trigger_all(&mut self, manager: &DockManager) {
        for zone_id in manager.zones().map(|z| z.id.clone()).collect::<Vec<_>>() {
            self.trigger(zone_id);
        }
    }

    /// Drops a scheduled zone without measuring it.
    ///
    /// Called when a zone unregisters mid-quiet-period.
    pub fn cancel(&mut self, zone_id: &str) { self.debouncer.cancel(&zone_id.to_string()); }

    /// Measures every zone whose quiet period has elapsed and writes the
    /// results back into the manager.
    ///
    /// Unmeasurable zones are skipped, not retried. Returns the number of
    /// zones whose bounds were updated.
    pub fn flush(&mut self, manager: &mut DockManager, probe: &impl ZoneProbe) -> usize {
        let mut updated = 0;
        for zone_id in self.debouncer.drain_settled_keys() {
            match probe.measure(&zone_id) {
                Ok(bounds) => {
                    manager.update_zone_bounds(&zone_id, bounds);
                    updated += 1;
                }
                Err(err) => {
                    warn!(zone = %zone_id, %err, "zone measurement skipped");
                }
            }
        }
        updated
    }

    /// Returns the number of zones waiting out their quiet period.
    #[must_use]
    pub fn pending(&self) -> usize { self.debouncer.len() }

    /// Returns `true` if the named zone is scheduled.
    #[must_use]
    pub fn is_pending(&self, zone_id: &str) -> bool {
        self.debouncer.is_pending(&zone_id.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
