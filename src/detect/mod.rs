//! Detection of the caller's current timezone.
//!
//! The host environment is queried once, through a [`ZoneDetector`], when a
//! picker is built. The result is a [`Detection`]: the detected zone and the
//! region derived from it. Ranking only ever sees the `Detection`.

mod system;

pub use system::SystemZoneDetector;

use serde::{Deserialize, Serialize};

use crate::core::TimezoneId;

/// Source of the caller's current timezone.
///
/// Hosts with their own notion of the current zone (a browser bridge, a
/// user profile) implement this; [`SystemZoneDetector`] covers Unix hosts.
pub trait ZoneDetector {
    /// Report the current timezone, or `None` if it can't be determined.
    fn detect(&self) -> Option<TimezoneId>;
}

/// Detector returning a preconfigured zone.
///
/// Used when the host pins the zone in configuration, and in tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedZoneDetector(pub Option<TimezoneId>);

impl FixedZoneDetector {
    /// Always report `zone`.
    #[must_use]
    pub fn new(zone: &str) -> Self {
        Self(Some(TimezoneId::new(zone)))
    }

    /// Always report nothing.
    #[must_use]
    pub fn none() -> Self {
        Self(None)
    }
}

impl ZoneDetector for FixedZoneDetector {
    fn detect(&self) -> Option<TimezoneId> {
        self.0.clone()
    }
}

/// The detected zone and region used to rank a catalog.
///
/// The region is the first `/` segment of the zone. Both are absent when
/// nothing was detected.
///
/// ## Example
///
/// ```
/// use tz_picker::core::TimezoneId;
/// use tz_picker::detect::Detection;
///
/// let detection = Detection::from_zone(Some(TimezoneId::new("America/Chicago")));
/// assert_eq!(detection.zone(), Some("America/Chicago"));
/// assert_eq!(detection.region(), Some("America"));
///
/// assert!(Detection::none().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Detection {
    zone: Option<TimezoneId>,
    region: Option<String>,
}

impl Detection {
    /// Nothing detected. Ranking keeps catalog order.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Derive the region from a detected zone.
    #[must_use]
    pub fn from_zone(zone: Option<TimezoneId>) -> Self {
        let region = zone.as_ref().and_then(TimezoneId::region).map(str::to_string);
        Self { zone, region }
    }

    /// Set zone and region independently.
    ///
    /// An empty region is treated as absent.
    #[must_use]
    pub fn with_parts(zone: Option<TimezoneId>, region: Option<&str>) -> Self {
        Self {
            zone,
            region: region.filter(|r| !r.is_empty()).map(str::to_string),
        }
    }

    /// Query a detector once and derive the region.
    pub fn detect(detector: &dyn ZoneDetector) -> Self {
        let detection = Self::from_zone(detector.detect());
        log::debug!(
            "detected timezone {:?} (region {:?})",
            detection.zone(),
            detection.region()
        );
        detection
    }

    /// The detected zone.
    #[must_use]
    pub fn zone(&self) -> Option<&str> {
        self.zone.as_ref().map(TimezoneId::as_str)
    }

    /// The detected region.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Check if neither zone nor region is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zone.is_none() && self.region.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_zone_derives_region() {
        let detection = Detection::from_zone(Some(TimezoneId::new("Europe/Berlin")));
        assert_eq!(detection.zone(), Some("Europe/Berlin"));
        assert_eq!(detection.region(), Some("Europe"));
        assert!(!detection.is_empty());
    }

    #[test]
    fn test_absent_zone_means_absent_region() {
        let detection = Detection::from_zone(None);
        assert_eq!(detection, Detection::none());
        assert!(detection.is_empty());
    }

    #[test]
    fn test_with_parts_drops_empty_region() {
        let detection = Detection::with_parts(None, Some(""));
        assert!(detection.is_empty());

        let detection = Detection::with_parts(None, Some("Asia"));
        assert_eq!(detection.region(), Some("Asia"));
        assert_eq!(detection.zone(), None);
    }

    #[test]
    fn test_detect_with_fixed_detector() {
        let detection = Detection::detect(&FixedZoneDetector::new("Australia/Perth"));
        assert_eq!(detection.region(), Some("Australia"));

        let detection = Detection::detect(&FixedZoneDetector::none());
        assert!(detection.is_empty());
    }

    struct ProfileDetector {
        saved: &'static str,
    }

    impl ZoneDetector for ProfileDetector {
        fn detect(&self) -> Option<TimezoneId> {
            Some(TimezoneId::new(self.saved))
        }
    }

    #[test]
    fn test_custom_detector() {
        let detector = ProfileDetector { saved: "Pacific/Fiji" };
        assert_eq!(Detection::detect(&detector).zone(), Some("Pacific/Fiji"));
    }

    #[test]
    fn test_detection_serialization() {
        let detection = Detection::from_zone(Some(TimezoneId::new("America/Chicago")));
        let json = serde_json::to_string(&detection).unwrap();
        assert_eq!(json, r#"{"zone":"America/Chicago","region":"America"}"#);

        let restored: Detection = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, detection);

        let empty: Detection = serde_json::from_str(r#"{"zone":null,"region":null}"#).unwrap();
        assert!(empty.is_empty());
    }
}
