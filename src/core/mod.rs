//! Core types: timezone identifiers, the catalog, and picker configuration.
//!
//! These are the static building blocks. The catalog is supplied once at
//! startup and shared by the ranker and the selection controller.

pub mod bundled;
pub mod catalog;
pub mod config;
pub mod zone;

pub use bundled::BUNDLED_ZONES;
pub use catalog::Catalog;
pub use config::PickerConfig;
pub use zone::TimezoneId;
