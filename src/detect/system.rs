//! Host timezone lookup.
//!
//! Delegates to `iana-time-zone`, which knows each platform's source of
//! truth (the localtime link on Unix, the registry on Windows, the host
//! `Intl` API on wasm).

use super::ZoneDetector;
use crate::core::TimezoneId;

/// Detector that asks the operating system for its IANA zone name.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemZoneDetector;

impl SystemZoneDetector {
    /// Create a system detector.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ZoneDetector for SystemZoneDetector {
    fn detect(&self) -> Option<TimezoneId> {
        match iana_time_zone::get_timezone() {
            Ok(name) if !name.is_empty() => Some(TimezoneId::from(name)),
            Ok(_) => {
                log::trace!("host reported an empty timezone name");
                None
            }
            Err(err) => {
                log::trace!("failed to discover host timezone: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_host_lookup() {
        let expected = iana_time_zone::get_timezone()
            .ok()
            .filter(|name| !name.is_empty());
        let detected = SystemZoneDetector::new().detect();
        assert_eq!(detected.as_ref().map(TimezoneId::as_str), expected.as_deref());
    }

    #[test]
    fn test_never_reports_posix_rule() {
        // A rule string such as "EST5EDT,M3.2.0,M11.1.0" is not a zone name.
        if let Some(zone) = SystemZoneDetector::new().detect() {
            assert!(!zone.as_str().contains(','), "got rule string {zone}");
            assert!(!zone.as_str().is_empty());
        }
    }
}
