//! In-memory store.

use crate::core::TimezoneId;
use crate::selection::PersistRequest;

use super::ExternalStore;

/// Store that keeps requests in an outbox until told to settle them.
///
/// A test double for tests and demos, not a production store. Requests are
/// not applied on receipt: call [`settle`](Self::settle) to make the latest
/// one committed, or [`push`](Self::push) to simulate an unrelated change
/// made elsewhere.
///
/// Every received request is also appended to [`history`](Self::history),
/// which only shrinks through [`take_history`](Self::take_history).
///
/// ## Example
///
/// ```
/// use tz_picker::core::TimezoneId;
/// use tz_picker::selection::PersistRequest;
/// use tz_picker::store::{ExternalStore, MemoryStore};
///
/// let mut store = MemoryStore::new(TimezoneId::new("Etc/UTC"));
/// store.persist(PersistRequest::new(TimezoneId::new("Asia/Seoul")));
/// assert_eq!(store.committed(), "Etc/UTC");
///
/// store.settle();
/// assert_eq!(store.committed(), "Asia/Seoul");
/// ```
#[derive(Clone, Debug)]
pub struct MemoryStore {
    committed: TimezoneId,
    pending: Vec<PersistRequest>,
    history: Vec<PersistRequest>,
}

impl MemoryStore {
    /// Create a store with an initial committed value.
    #[must_use]
    pub fn new(committed: TimezoneId) -> Self {
        Self {
            committed,
            pending: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Requests received but not yet settled.
    #[must_use]
    pub fn pending(&self) -> &[PersistRequest] {
        &self.pending
    }

    /// Every request ever received, in order.
    #[must_use]
    pub fn history(&self) -> &[PersistRequest] {
        &self.history
    }

    /// Drain the request log, leaving pending requests in place.
    pub fn take_history(&mut self) -> Vec<PersistRequest> {
        std::mem::take(&mut self.history)
    }

    /// Commit the most recent pending request and clear the outbox.
    ///
    /// Returns the new committed value, or `None` if nothing was pending.
    pub fn settle(&mut self) -> Option<TimezoneId> {
        let latest = self.pending.drain(..).last()?;
        self.committed = latest.into_zone();
        Some(self.committed.clone())
    }

    /// Change the committed value from outside the picker.
    ///
    /// Pending requests are dropped.
    pub fn push(&mut self, committed: TimezoneId) {
        self.pending.clear();
        self.committed = committed;
    }
}

impl ExternalStore for MemoryStore {
    fn committed(&self) -> TimezoneId {
        self.committed.clone()
    }

    fn persist(&mut self, request: PersistRequest) {
        log::debug!("store received persist request for {}", request.zone());
        self.history.push(request.clone());
        self.pending.push(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(zone: &str) -> PersistRequest {
        PersistRequest::new(TimezoneId::new(zone))
    }

    #[test]
    fn test_persist_is_deferred() {
        let mut store = MemoryStore::new(TimezoneId::new("Etc/UTC"));
        store.persist(request("Asia/Seoul"));

        assert_eq!(store.committed(), "Etc/UTC");
        assert_eq!(store.pending(), &[request("Asia/Seoul")]);
    }

    #[test]
    fn test_settle_takes_latest() {
        let mut store = MemoryStore::new(TimezoneId::new("Etc/UTC"));
        store.persist(request("Asia/Seoul"));
        store.persist(request("Asia/Tokyo"));

        assert_eq!(store.settle(), Some(TimezoneId::new("Asia/Tokyo")));
        assert!(store.pending().is_empty());
        assert_eq!(store.history().len(), 2);
        assert_eq!(store.settle(), None);
    }

    #[test]
    fn test_take_history_drains_log_only() {
        let mut store = MemoryStore::new(TimezoneId::new("Etc/UTC"));
        store.persist(request("Asia/Seoul"));
        store.settle();
        store.persist(request("Asia/Tokyo"));

        assert_eq!(store.take_history(), vec![request("Asia/Seoul"), request("Asia/Tokyo")]);
        assert!(store.history().is_empty());
        assert_eq!(store.pending(), &[request("Asia/Tokyo")]);

        store.persist(request("Asia/Manila"));
        assert_eq!(store.history(), &[request("Asia/Manila")]);
    }

    #[test]
    fn test_push_drops_pending() {
        let mut store = MemoryStore::new(TimezoneId::new("Etc/UTC"));
        store.persist(request("Asia/Seoul"));
        store.push(TimezoneId::new("Europe/Oslo"));

        assert_eq!(store.committed(), "Europe/Oslo");
        assert!(store.pending().is_empty());
        assert_eq!(store.settle(), None);
    }
}
