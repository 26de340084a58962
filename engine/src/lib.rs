//! Drag-and-dock interaction engine.
//!
//! This crate owns the interaction state for a panel-docking surface:
//! which items exist, which zones they can dock into, the single live
//! drag session, and the debounced bridge that keeps cached zone bounds
//! in step with the host layout. Rendering, hit-testing against real
//! DOM/layout nodes, and persistence stay in the host; the engine is the
//! one place docking truth lives.
//!
//! The entry point is [`DockManager`]. Hosts register items and zones on
//! mount, feed pointer events into the drag state machine, and render
//! from snapshots.

pub mod config;
pub mod constants;
pub mod debounce;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod item;
pub mod manager;
pub mod state;
pub mod sync;
pub mod zone;

pub use config::{BoundsConfig, EngineConfig, GridConfig, SizeDimensions, SizeTable};
pub use debounce::{Debouncer, KeyDebouncer};
pub use drag::{DragOrigin, DragOutcome, DragSession};
pub use error::{DockError, DockResult};
pub use geometry::{Point, Rect};
pub use item::{DockItem, ItemSpec, SizeClass};
pub use manager::{DockManager, SharedManager};
pub use state::{EngineSnapshot, EngineState};
pub use sync::{BoundsSynchronizer, ZoneProbe};
pub use zone::{DockZone, MemberIds, ZoneSpec};
