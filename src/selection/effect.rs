//! Effects emitted by the selection controller.

use serde::{Deserialize, Serialize};

use crate::core::TimezoneId;

/// Request for the external store to adopt a new committed zone.
///
/// Fire-and-forget: the controller neither waits for nor retries it. The
/// store reports the outcome by pushing its committed value back through
/// `SelectionController::sync`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersistRequest {
    zone: TimezoneId,
}

impl PersistRequest {
    /// Create a request to persist `zone`.
    #[must_use]
    pub fn new(zone: TimezoneId) -> Self {
        Self { zone }
    }

    /// The zone to persist.
    #[must_use]
    pub fn zone(&self) -> &TimezoneId {
        &self.zone
    }

    /// Take the zone out of the request.
    #[must_use]
    pub fn into_zone(self) -> TimezoneId {
        self.zone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accessors() {
        let request = PersistRequest::new(TimezoneId::new("Asia/Manila"));
        assert_eq!(request.zone(), "Asia/Manila");
        assert_eq!(request.into_zone(), TimezoneId::new("Asia/Manila"));
    }

    #[test]
    fn test_request_serialization() {
        let request = PersistRequest::new(TimezoneId::new("Europe/Zurich"));
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"zone":"Europe/Zurich"}"#);

        let back: PersistRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
