//! Error types for the docking engine.
//!
//! No error in this subsystem is fatal: every failure degrades to "no
//! state change". Duplicate registration is deliberately *not* an error
//! (registration is idempotent), and unknown-id mutations are logged
//! no-ops at the manager surface. The only operation that reports failure
//! to its caller is `dock_item`, because the drag controller falls back
//! to a floating placement when a dock is rejected.

use thiserror::Error;

use crate::item::SizeClass;

/// Result type alias for docking operations.
pub type DockResult<T> = Result<T, DockError>;

/// Errors that can occur during docking operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DockError {
    /// An item with the given id is not registered.
    #[error("item '{0}' not found")]
    ItemNotFound(String),

    /// A zone with the given id is not registered.
    #[error("zone '{0}' not found")]
    ZoneNotFound(String),

    /// The target zone is already holding its configured maximum.
    #[error("zone '{zone}' is at capacity ({capacity})")]
    ZoneAtCapacity {
        /// The zone that rejected the dock.
        zone: String,
        /// The zone's configured `max_items`.
        capacity: usize,
    },

    /// The item's effective size class is not in the zone's allow-list.
    #[error("zone '{zone}' does not accept {size} items")]
    SizeClassNotAllowed {
        /// The zone that rejected the dock.
        zone: String,
        /// The item's effective size class.
        size: SizeClass,
    },

    /// The zone's on-screen footprint could not be measured.
    ///
    /// The bounds update is skipped, not retried eagerly; the next
    /// trigger supplies a fresh attempt.
    #[error("bounds for zone '{0}' could not be measured")]
    MeasurementUnavailable(String),
}

impl DockError {
    /// Returns `true` if this error indicates a missing item or zone.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound(_) | Self::ZoneNotFound(_))
    }

    /// Returns `true` if this error is a dock rejection.
    ///
    /// Rejections leave the item floating; the caller is expected to keep
    /// the item where it was dropped rather than surface an error.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::ZoneAtCapacity { .. } | Self::SizeClassNotAllowed { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DockError::ItemNotFound("gauge".to_string()).to_string(),
            "item 'gauge' not found"
        );

        assert_eq!(
            DockError::ZoneNotFound("sidebar".to_string()).to_string(),
            "zone 'sidebar' not found"
        );

        assert_eq!(
            DockError::ZoneAtCapacity {
                zone: "alpha".to_string(),
                capacity: 1,
            }
            .to_string(),
            "zone 'alpha' is at capacity (1)"
        );

        assert_eq!(
            DockError::SizeClassNotAllowed {
                zone: "alpha".to_string(),
                size: SizeClass::XLarge,
            }
            .to_string(),
            "zone 'alpha' does not accept x-large items"
        );

        assert_eq!(
            DockError::MeasurementUnavailable("alpha".to_string()).to_string(),
            "bounds for zone 'alpha' could not be measured"
        );
    }

    #[test]
    fn test_error_predicates() {
        assert!(DockError::ItemNotFound("a".into()).is_not_found());
        assert!(DockError::ZoneNotFound("a".into()).is_not_found());
        assert!(!DockError::MeasurementUnavailable("a".into()).is_not_found());

        let full = DockError::ZoneAtCapacity {
            zone: "alpha".into(),
            capacity: 2,
        };
        assert!(full.is_rejection());

        let gated = DockError::SizeClassNotAllowed {
            zone: "alpha".into(),
            size: SizeClass::Small,
        };
        assert!(gated.is_rejection());

        assert!(!DockError::ItemNotFound("a".into()).is_rejection());
    }
}
