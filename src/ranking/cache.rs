//! Memoized ranking for a fixed catalog.

use im::Vector;
use rustc_hash::FxHashMap;

use super::ranker::rank_detected;
use crate::core::{Catalog, TimezoneId};
use crate::detect::Detection;

/// Ranked lists for one catalog, keyed by detection.
///
/// The catalog never changes, so a ranking only depends on the
/// `(zone, region)` pair. Lists are stored as persistent vectors and each
/// lookup hands out an O(1) clone.
///
/// ## Example
///
/// ```
/// use tz_picker::core::{Catalog, TimezoneId};
/// use tz_picker::detect::Detection;
/// use tz_picker::ranking::RankCache;
///
/// let mut cache = RankCache::new(Catalog::bundled());
/// let detection = Detection::from_zone(Some(TimezoneId::new("Asia/Tokyo")));
///
/// let ranked = cache.ranked(&detection);
/// assert_eq!(ranked[0], "Asia/Tokyo");
/// assert_eq!(ranked.len(), cache.catalog().len());
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct RankCache {
    catalog: Catalog,
    entries: FxHashMap<Detection, Vector<TimezoneId>>,
}

impl RankCache {
    /// Create an empty cache for `catalog`.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            entries: FxHashMap::default(),
        }
    }

    /// Get the ranked catalog for a detection, computing it on first use.
    pub fn ranked(&mut self, detection: &Detection) -> Vector<TimezoneId> {
        if let Some(ranked) = self.entries.get(detection) {
            return ranked.clone();
        }
        let ranked: Vector<TimezoneId> =
            rank_detected(self.catalog.as_slice(), detection).into_iter().collect();
        self.entries.insert(detection.clone(), ranked.clone());
        ranked
    }

    /// The catalog being ranked.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of memoized detections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been ranked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all memoized rankings.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
