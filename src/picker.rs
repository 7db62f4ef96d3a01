//! Presentation-facing picker session.
//!
//! `TimezonePicker` ties the pieces together the way a settings screen uses
//! them: the catalog is ranked once against the detected zone, the user's
//! choice is staged as a draft, and confirm/cancel gestures apply or revert
//! it against the store.

use im::Vector;

use crate::core::{Catalog, PickerConfig, TimezoneId};
use crate::detect::{Detection, FixedZoneDetector, SystemZoneDetector, ZoneDetector};
use crate::error::Result;
use crate::ranking::rank_detected;
use crate::selection::{Selection, SelectionController};
use crate::store::ExternalStore;

/// Visibility of the confirm and cancel controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Affordances {
    pub confirm: bool,
    pub cancel: bool,
}

/// A timezone picker bound to a store.
///
/// ## Example
///
/// ```
/// use tz_picker::core::{Catalog, TimezoneId};
/// use tz_picker::detect::FixedZoneDetector;
/// use tz_picker::picker::TimezonePicker;
/// use tz_picker::store::MemoryStore;
///
/// let catalog = Catalog::new(["Africa/Cairo", "America/New_York", "America/Chicago"]).unwrap();
/// let store = MemoryStore::new(TimezoneId::new("Africa/Cairo"));
/// let detector = FixedZoneDetector::new("America/Chicago");
///
/// let mut picker = TimezonePicker::new(catalog, &detector, store);
/// assert_eq!(picker.options()[0], "America/Chicago");
///
/// picker.select("America/Chicago").unwrap();
/// assert!(picker.affordances().confirm);
///
/// picker.confirm();
/// assert!(!picker.is_dirty());
/// assert_eq!(picker.store().pending().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct TimezonePicker<S> {
    catalog: Catalog,
    detection: Detection,
    options: Vector<TimezoneId>,
    selection: Selection,
    store: S,
}

impl<S: ExternalStore> TimezonePicker<S> {
    /// Build a picker, querying `detector` once and ranking the catalog.
    pub fn new(catalog: Catalog, detector: &dyn ZoneDetector, store: S) -> Self {
        let detection = Detection::detect(detector);
        Self::with_detection(catalog, detection, store)
    }

    /// Build a picker from an already computed detection.
    pub fn with_detection(catalog: Catalog, detection: Detection, store: S) -> Self {
        let options: Vector<TimezoneId> =
            rank_detected(catalog.as_slice(), &detection).into_iter().collect();
        let selection = SelectionController::new(&catalog).initialize(store.committed());
        Self {
            catalog,
            detection,
            options,
            selection,
            store,
        }
    }

    /// Build a picker from configuration.
    ///
    /// A pinned zone wins over system detection; with detection disabled
    /// the catalog keeps its order.
    pub fn from_config(config: &PickerConfig, store: S) -> Result<Self> {
        let catalog = config.catalog()?;
        let detection = if !config.detect {
            Detection::none()
        } else if let Some(zone) = config.pinned_zone() {
            Detection::detect(&FixedZoneDetector(Some(zone)))
        } else {
            Detection::detect(&SystemZoneDetector::new())
        };
        Ok(Self::with_detection(catalog, detection, store))
    }

    /// The ranked options.
    #[must_use]
    pub fn options(&self) -> &Vector<TimezoneId> {
        &self.options
    }

    /// Options containing `query`, ignoring case, in ranked order.
    ///
    /// An empty query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<TimezoneId> {
        let query = query.trim().to_lowercase();
        self.options
            .iter()
            .filter(|zone| zone.as_str().to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    /// The detection the options were ranked against.
    #[must_use]
    pub fn detection(&self) -> &Detection {
        &self.detection
    }

    /// The catalog offered by this picker.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current selection state.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The value shown in the picker (the draft).
    #[must_use]
    pub fn value(&self) -> &TimezoneId {
        self.selection.draft()
    }

    /// Check if there is an unconfirmed change.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.selection.is_dirty()
    }

    /// Which controls to show.
    #[must_use]
    pub fn affordances(&self) -> Affordances {
        let dirty = self.is_dirty();
        Affordances {
            confirm: dirty,
            cancel: dirty,
        }
    }

    /// The user picked `value` from the list.
    pub fn select(&mut self, value: &str) -> Result<()> {
        let controller = SelectionController::new(&self.catalog);
        self.selection = controller.stage(&self.selection, value)?;
        Ok(())
    }

    /// The user confirmed: commit the draft and send it to the store.
    pub fn confirm(&mut self) {
        let controller = SelectionController::new(&self.catalog);
        let (selection, request) = controller.apply(&self.selection);
        self.selection = selection;
        self.store.persist(request);
    }

    /// The user cancelled: drop the draft.
    pub fn cancel(&mut self) {
        let controller = SelectionController::new(&self.catalog);
        self.selection = controller.revert(&self.selection);
    }

    /// Re-read the store. A changed committed value replaces the selection.
    ///
    /// Returns true if the selection was reset.
    pub fn refresh(&mut self) -> bool {
        let committed = self.store.committed();
        if &committed == self.selection.committed() {
            return false;
        }
        let controller = SelectionController::new(&self.catalog);
        self.selection = controller.sync(&self.selection, committed);
        true
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the backing store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Release the backing store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PickerError;
    use crate::store::MemoryStore;

    fn picker(committed: &str, detected: &str) -> TimezonePicker<MemoryStore> {
        let catalog =
            Catalog::new(["Africa/Cairo", "America/New_York", "America/Chicago"]).unwrap();
        let store = MemoryStore::new(TimezoneId::new(committed));
        TimezonePicker::new(catalog, &FixedZoneDetector::new(detected), store)
    }

    #[test]
    fn test_options_ranked() {
        let picker = picker("Africa/Cairo", "America/Chicago");
        let options: Vec<_> = picker.options().iter().map(TimezoneId::as_str).collect();
        assert_eq!(options, vec!["America/Chicago", "America/New_York", "Africa/Cairo"]);
        assert_eq!(picker.detection().region(), Some("America"));
    }

    #[test]
    fn test_initial_state() {
        let picker = picker("Africa/Cairo", "America/Chicago");
        assert_eq!(picker.value(), "Africa/Cairo");
        assert_eq!(picker.affordances(), Affordances::default());
    }

    #[test]
    fn test_search() {
        let picker = picker("Africa/Cairo", "America/Chicago");
        assert_eq!(picker.search("NEW"), vec![TimezoneId::new("America/New_York")]);
        assert_eq!(picker.search("america").len(), 2);
        assert_eq!(picker.search("").len(), 3);
        assert!(picker.search("Pacific").is_empty());
    }

    #[test]
    fn test_select_invalid_keeps_state() {
        let mut picker = picker("Africa/Cairo", "America/Chicago");
        let err = picker.select("Nowhere/Land").unwrap_err();
        assert!(matches!(err, PickerError::InvalidSelection(_)));
        assert_eq!(picker.value(), "Africa/Cairo");
    }

    #[test]
    fn test_cancel() {
        let mut picker = picker("Africa/Cairo", "America/Chicago");
        picker.select("America/New_York").unwrap();
        assert!(picker.affordances().cancel);

        picker.cancel();
        assert_eq!(picker.value(), "Africa/Cairo");
        assert!(picker.store().history().is_empty());
    }

    #[test]
    fn test_refresh_after_external_change() {
        let mut picker = picker("Africa/Cairo", "America/Chicago");
        picker.select("America/New_York").unwrap();

        assert!(!picker.refresh());
        assert!(picker.is_dirty());

        picker.store_mut().push(TimezoneId::new("America/Chicago"));
        assert!(picker.refresh());
        assert_eq!(picker.value(), "America/Chicago");
        assert!(!picker.is_dirty());
    }

    #[test]
    fn test_from_config_without_detection() {
        let config = PickerConfig::new()
            .with_catalog(["B/b", "A/a"])
            .with_detected_zone("A/a")
            .without_detection();
        let picker =
            TimezonePicker::from_config(&config, MemoryStore::new(TimezoneId::new("B/b"))).unwrap();

        assert!(picker.detection().is_empty());
        assert_eq!(picker.options()[0], "B/b");
    }

    #[test]
    fn test_from_config_pinned_zone() {
        let config = PickerConfig::new()
            .with_catalog(["B/b", "A/a"])
            .with_detected_zone("A/a");
        let picker =
            TimezonePicker::from_config(&config, MemoryStore::new(TimezoneId::new("B/b"))).unwrap();

        assert_eq!(picker.options()[0], "A/a");
    }
}
