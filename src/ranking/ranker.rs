//! Three-tier stable partition of a catalog.

use serde::{Deserialize, Serialize};

use crate::core::TimezoneId;
use crate::detect::Detection;

/// Presentation tier of a catalog entry, highest priority first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    /// The detected zone itself.
    Exact,
    /// Contains the detected region.
    Region,
    /// Everything else.
    Other,
}

impl Tier {
    /// Classify one identifier.
    ///
    /// `region` must already be filtered for emptiness.
    #[must_use]
    pub fn classify(zone: &TimezoneId, detected: Option<&str>, region: Option<&str>) -> Self {
        if detected.is_some_and(|d| zone == d) {
            Tier::Exact
        } else if region.is_some_and(|r| zone.contains(r)) {
            Tier::Region
        } else {
            Tier::Other
        }
    }
}

/// Rank a catalog against a detected zone and region.
///
/// Returns a permutation of `catalog`: the entry equal to `zone` first,
/// then entries containing `region` as a substring, then the rest. Each
/// tier keeps catalog order. An absent or empty region forms no tier, and
/// with neither zone nor region the output equals the input.
#[must_use]
pub fn rank(catalog: &[TimezoneId], zone: Option<&str>, region: Option<&str>) -> Vec<TimezoneId> {
    let region = region.filter(|r| !r.is_empty());

    let mut exact = Vec::new();
    let mut regional = Vec::new();
    let mut rest = Vec::with_capacity(catalog.len());

    for entry in catalog {
        match Tier::classify(entry, zone, region) {
            Tier::Exact => exact.push(entry.clone()),
            Tier::Region => regional.push(entry.clone()),
            Tier::Other => rest.push(entry.clone()),
        }
    }

    log::debug!(
        "ranked {} zones: {} exact, {} in region {:?}",
        catalog.len(),
        exact.len(),
        regional.len(),
        region
    );

    exact.extend(regional);
    exact.extend(rest);
    exact
}

/// Rank a catalog against a [`Detection`].
#[must_use]
pub fn rank_detected(catalog: &[TimezoneId], detection: &Detection) -> Vec<TimezoneId> {
    rank(catalog, detection.zone(), detection.region())
}
