//! The external store of record.
//!
//! The store owns the committed timezone, typically the user's saved
//! profile. The picker only reads the committed value and
//! hands it [`PersistRequest`]s; how and when those land is the store's
//! business.

mod memory;

pub use memory::MemoryStore;

use crate::core::TimezoneId;
use crate::selection::PersistRequest;

/// Store holding the authoritative committed timezone.
pub trait ExternalStore {
    /// The current committed value.
    fn committed(&self) -> TimezoneId;

    /// Accept a persist request. Must not block; failures are reported by
    /// the store through its own channels, never to the caller.
    fn persist(&mut self, request: PersistRequest);
}
