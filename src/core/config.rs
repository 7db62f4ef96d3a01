//! Picker configuration.
//!
//! Hosts configure a picker at startup by providing:
//! - an optional custom catalog (the bundled one is used otherwise)
//! - an optional detected-zone override, which bypasses the system detector
//! - whether to detect the caller's zone at all
//!
//! Configuration can be built in code or loaded from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use super::zone::TimezoneId;
use crate::error::Result;

/// Complete picker configuration.
///
/// ## Example
///
/// ```
/// use tz_picker::core::PickerConfig;
///
/// let config = PickerConfig::from_json(r#"{
///     "catalog": ["Africa/Cairo", "America/Chicago"],
///     "detected_zone": "America/Chicago"
/// }"#).unwrap();
///
/// assert_eq!(config.catalog().unwrap().len(), 2);
/// assert!(config.detect);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Custom catalog. `None` for the bundled catalog.
    pub catalog: Option<Vec<String>>,

    /// Zone to use instead of asking the host environment.
    pub detected_zone: Option<String>,

    /// Detect the caller's zone. When false, ranking keeps catalog order.
    pub detect: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            detected_zone: None,
            detect: true,
        }
    }
}

impl PickerConfig {
    /// Create a configuration using the bundled catalog and system detection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom catalog.
    #[must_use]
    pub fn with_catalog<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.catalog = Some(zones.into_iter().map(Into::into).collect());
        self
    }

    /// Pin the detected zone instead of querying the environment.
    #[must_use]
    pub fn with_detected_zone(mut self, zone: impl Into<String>) -> Self {
        self.detected_zone = Some(zone.into());
        self
    }

    /// Turn off zone detection.
    #[must_use]
    pub fn without_detection(mut self) -> Self {
        self.detect = false;
        self
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Build the configured catalog.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(zones) => Catalog::new(zones.iter().map(String::as_str)),
            None => Ok(Catalog::bundled()),
        }
    }

    /// The pinned zone, if any.
    #[must_use]
    pub fn pinned_zone(&self) -> Option<TimezoneId> {
        self.detected_zone.as_deref().map(TimezoneId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PickerError;

    #[test]
    fn test_default_config() {
        let config = PickerConfig::new();
        assert!(config.catalog.is_none());
        assert!(config.detected_zone.is_none());
        assert!(config.detect);
        assert_eq!(config.catalog().unwrap().len(), Catalog::bundled().len());
    }

    #[test]
    fn test_builder() {
        let config = PickerConfig::new()
            .with_catalog(["Europe/Paris", "Europe/Rome"])
            .with_detected_zone("Europe/Rome")
            .without_detection();

        assert_eq!(config.catalog().unwrap().len(), 2);
        assert_eq!(config.pinned_zone(), Some(TimezoneId::new("Europe/Rome")));
        assert!(!config.detect);
    }

    #[test]
    fn test_from_json_defaults() {
        let config = PickerConfig::from_json("{}").unwrap();
        assert_eq!(config, PickerConfig::default());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = PickerConfig::from_json("{\"detect\": \"yes\"}").unwrap_err();
        assert!(matches!(err, PickerError::Config(_)));
    }

    #[test]
    fn test_duplicate_catalog_fails() {
        let config = PickerConfig::new().with_catalog(["UTC", "UTC"]);
        assert!(matches!(config.catalog(), Err(PickerError::DuplicateZone(_))));
    }

    #[test]
    fn test_from_missing_path() {
        let err = PickerConfig::from_path("/nonexistent/tz-picker.json").unwrap_err();
        assert!(matches!(err, PickerError::Io(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = PickerConfig::new().with_detected_zone("Asia/Dubai");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(PickerConfig::from_json(&json).unwrap(), config);
    }
}
