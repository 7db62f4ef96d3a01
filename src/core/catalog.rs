//! Timezone catalog.
//!
//! The `Catalog` holds the fixed, ordered list of identifiers a picker may
//! offer. It is built once at startup and never mutated. Membership checks
//! are O(1) through a hash index.

use rustc_hash::FxHashMap;

use super::bundled::BUNDLED_ZONES;
use super::zone::TimezoneId;
use crate::error::{PickerError, Result};

/// Ordered, duplicate-free set of valid timezone identifiers.
///
/// ## Example
///
/// ```
/// use tz_picker::core::Catalog;
///
/// let catalog = Catalog::new(["Africa/Cairo", "America/Chicago"]).unwrap();
///
/// assert!(catalog.contains("America/Chicago"));
/// assert!(!catalog.contains("Mars/Olympus"));
/// assert_eq!(catalog.position("Africa/Cairo"), Some(0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    zones: Vec<TimezoneId>,
    index: FxHashMap<TimezoneId, usize>,
}

impl Catalog {
    /// Build a catalog from identifiers, keeping their order.
    ///
    /// Fails with `DuplicateZone` if an identifier appears twice.
    pub fn new<I, Z>(zones: I) -> Result<Self>
    where
        I: IntoIterator<Item = Z>,
        Z: Into<TimezoneId>,
    {
        let mut catalog = Self::default();
        for zone in zones {
            let zone = zone.into();
            if catalog.index.contains_key(&zone) {
                return Err(PickerError::DuplicateZone(zone.to_string()));
            }
            catalog.index.insert(zone.clone(), catalog.zones.len());
            catalog.zones.push(zone);
        }
        Ok(catalog)
    }

    /// The catalog shipped with the crate.
    #[must_use]
    pub fn bundled() -> Self {
        let zones: Vec<TimezoneId> = BUNDLED_ZONES.iter().map(|z| TimezoneId::new(z)).collect();
        let index = zones
            .iter()
            .enumerate()
            .map(|(i, z)| (z.clone(), i))
            .collect();
        Self { zones, index }
    }

    /// Check if an identifier is in the catalog.
    #[must_use]
    pub fn contains(&self, zone: &str) -> bool {
        self.index.contains_key(zone)
    }

    /// Look up the catalog's own copy of an identifier.
    #[must_use]
    pub fn get(&self, zone: &str) -> Option<&TimezoneId> {
        self.index.get(zone).map(|&i| &self.zones[i])
    }

    /// Position of an identifier in catalog order.
    #[must_use]
    pub fn position(&self, zone: &str) -> Option<usize> {
        self.index.get(zone).copied()
    }

    /// Get the number of identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Identifiers in catalog order.
    #[must_use]
    pub fn as_slice(&self) -> &[TimezoneId] {
        &self.zones
    }

    /// Iterate over identifiers in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &TimezoneId> {
        self.zones.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a TimezoneId;
    type IntoIter = std::slice::Iter<'a, TimezoneId>;

    fn into_iter(self) -> Self::IntoIter {
        self.zones.iter()
    }
}
