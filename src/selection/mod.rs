//! Pending-change confirmation for a selected timezone.
//!
//! A [`Selection`] pairs the value the store of record considers committed
//! with a locally staged draft. The [`SelectionController`] moves between
//! states:
//!
//! - `stage`: pick a new draft (must be in the catalog)
//! - `apply`: commit the draft and emit a [`PersistRequest`]
//! - `revert`: drop the draft
//! - `sync`: adopt a committed value pushed by the store
//!
//! Every operation takes the current state and returns the next one. The
//! controller holds no state of its own besides the catalog reference.
//!
//! ## Example
//!
//! ```
//! use tz_picker::core::{Catalog, TimezoneId};
//! use tz_picker::selection::SelectionController;
//!
//! let catalog = Catalog::new(["Africa/Cairo", "America/New_York", "America/Chicago"]).unwrap();
//! let controller = SelectionController::new(&catalog);
//!
//! let state = controller.initialize(TimezoneId::new("Africa/Cairo"));
//! let state = controller.stage(&state, "America/Chicago").unwrap();
//! assert!(state.is_dirty());
//!
//! let (state, request) = controller.apply(&state);
//! assert_eq!(request.zone(), "America/Chicago");
//! assert_eq!(state.committed(), "America/Chicago");
//! assert!(!state.is_dirty());
//! ```

mod controller;
mod effect;

pub use controller::{Selection, SelectionController};
pub use effect::PersistRequest;
