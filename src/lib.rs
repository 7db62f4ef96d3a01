//! # tz-picker
//!
//! Timezone selection for settings screens: ranking a fixed catalog of
//! timezone identifiers around the caller's detected zone, and a
//! pending-change protocol that stages a choice before committing it to an
//! external store of record.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: Ranking is a pure function of the catalog and
//!    the detection. Selection state is passed in and returned; nothing is
//!    held in a global.
//!
//! 2. **Store of record stays external**: The crate never writes the
//!    committed value itself. It emits `PersistRequest`s and re-syncs when
//!    the store reports a value.
//!
//! 3. **Fail fast on contract violations**: Staging a value outside the
//!    catalog is an error, never a silent clamp.
//!
//! ## Modules
//!
//! - `core`: Identifiers, catalog, configuration
//! - `detect`: Host timezone detection
//! - `ranking`: Three-tier catalog ordering and memoization
//! - `selection`: Draft/committed state machine and its effects
//! - `store`: External store trait and an in-memory implementation
//! - `picker`: Presentation-facing session combining all of the above

pub mod core;
pub mod detect;
pub mod error;
pub mod picker;
pub mod ranking;
pub mod selection;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Catalog, PickerConfig, TimezoneId, BUNDLED_ZONES};

pub use crate::detect::{Detection, FixedZoneDetector, SystemZoneDetector, ZoneDetector};

pub use crate::error::{PickerError, Result};

pub use crate::picker::{Affordances, TimezonePicker};

pub use crate::ranking::{rank, rank_detected, RankCache, Tier};

pub use crate::selection::{PersistRequest, Selection, SelectionController};

pub use crate::store::{ExternalStore, MemoryStore};
