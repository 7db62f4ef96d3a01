//! Timezone identifiers.
//!
//! Identifiers are opaque catalog strings such as `"America/Chicago"`. The
//! only structure the crate interprets is the optional `/`-delimited first
//! segment, called the region.

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// An opaque timezone identifier drawn from a catalog.
///
/// Backed by a shared `Arc<str>`, so clones are a reference-count bump.
/// Ranked lists and selections clone identifiers freely.
///
/// ## Example
///
/// ```
/// use tz_picker::core::TimezoneId;
///
/// let zone = TimezoneId::new("America/Argentina/Salta");
/// assert_eq!(zone.region(), Some("America"));
/// assert_eq!(zone.as_str(), "America/Argentina/Salta");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TimezoneId(Arc<str>);

impl TimezoneId {
    /// Create an identifier from any string.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first `/`-delimited segment.
    ///
    /// An identifier without a `/` is its own region (`"UTC"` -> `"UTC"`).
    /// Returns `None` when the first segment is empty.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.0.split('/').next().filter(|r| !r.is_empty())
    }

    /// Check whether `needle` occurs anywhere in the identifier.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl std::fmt::Display for TimezoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TimezoneId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TimezoneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TimezoneId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for TimezoneId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl From<&str> for TimezoneId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TimezoneId {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<TimezoneId> for String {
    fn from(zone: TimezoneId) -> Self {
        zone.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_first_segment() {
        assert_eq!(TimezoneId::new("Europe/Warsaw").region(), Some("Europe"));
        assert_eq!(
            TimezoneId::new("America/Indiana/Knox").region(),
            Some("America")
        );
    }

    #[test]
    fn test_region_without_slash() {
        assert_eq!(TimezoneId::new("UTC").region(), Some("UTC"));
    }

    #[test]
    fn test_region_empty() {
        assert_eq!(TimezoneId::new("").region(), None);
        assert_eq!(TimezoneId::new("/Weird").region(), None);
    }

    #[test]
    fn test_display_and_eq() {
        let zone = TimezoneId::new("Asia/Tokyo");
        assert_eq!(format!("{}", zone), "Asia/Tokyo");
        assert_eq!(zone, "Asia/Tokyo");
        assert_eq!(zone, TimezoneId::from("Asia/Tokyo".to_string()));
    }

    #[test]
    fn test_contains() {
        let zone = TimezoneId::new("Etc/GMT+10");
        assert!(zone.contains("GMT"));
        assert!(!zone.contains("UTC"));
    }

    #[test]
    fn test_serialization_is_plain_string() {
        let zone = TimezoneId::new("Pacific/Auckland");
        let json = serde_json::to_string(&zone).unwrap();
        assert_eq!(json, "\"Pacific/Auckland\"");

        let back: TimezoneId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, zone);
    }
}
