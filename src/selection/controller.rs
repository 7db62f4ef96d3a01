//! Selection state and its transitions.

use serde::{Deserialize, Serialize};

use super::effect::PersistRequest;
use crate::core::{Catalog, TimezoneId};
use crate::error::{PickerError, Result};

/// Committed value paired with a locally staged draft.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    committed: TimezoneId,
    draft: TimezoneId,
}

impl Selection {
    /// The value the store considers authoritative.
    #[must_use]
    pub fn committed(&self) -> &TimezoneId {
        &self.committed
    }

    /// The staged value.
    #[must_use]
    pub fn draft(&self) -> &TimezoneId {
        &self.draft
    }

    /// Check if the draft differs from the committed value.
    ///
    /// Drives visibility of the confirm and cancel affordances.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.draft != self.committed
    }
}

/// Transitions over [`Selection`] for one catalog.
#[derive(Clone, Copy, Debug)]
pub struct SelectionController<'c> {
    catalog: &'c Catalog,
}

impl<'c> SelectionController<'c> {
    /// Create a controller validating drafts against `catalog`.
    #[must_use]
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog drafts are checked against.
    #[must_use]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Start from a committed value read from the store. The draft equals it.
    ///
    /// The store is authoritative, so a committed value outside the catalog
    /// is kept as is and only logged.
    #[must_use]
    pub fn initialize(&self, committed: TimezoneId) -> Selection {
        if !self.catalog.contains(committed.as_str()) {
            log::warn!("committed timezone {committed} is not in the catalog");
        }
        Selection {
            draft: committed.clone(),
            committed,
        }
    }

    /// Stage `value` as the new draft.
    ///
    /// Fails with `InvalidSelection` if `value` is not in the catalog; the
    /// input state is left untouched either way.
    pub fn stage(&self, selection: &Selection, value: &str) -> Result<Selection> {
        let draft = self
            .catalog
            .get(value)
            .ok_or_else(|| PickerError::InvalidSelection(value.to_string()))?;
        Ok(Selection {
            committed: selection.committed.clone(),
            draft: draft.clone(),
        })
    }

    /// Commit the draft and request that the store persist it.
    ///
    /// The commit is optimistic. If the store later reports a different
    /// value, pass it to [`sync`](Self::sync).
    #[must_use]
    pub fn apply(&self, selection: &Selection) -> (Selection, PersistRequest) {
        log::debug!("persisting timezone {}", selection.draft);
        let next = Selection {
            committed: selection.draft.clone(),
            draft: selection.draft.clone(),
        };
        (next, PersistRequest::new(selection.draft.clone()))
    }

    /// Discard the draft.
    #[must_use]
    pub fn revert(&self, selection: &Selection) -> Selection {
        Selection {
            committed: selection.committed.clone(),
            draft: selection.committed.clone(),
        }
    }

    /// Adopt a committed value pushed by the store, dropping any draft.
    #[must_use]
    pub fn sync(&self, selection: &Selection, committed: TimezoneId) -> Selection {
        if selection.is_dirty() && selection.committed != committed {
            log::debug!(
                "store changed timezone to {committed}, discarding draft {}",
                selection.draft
            );
        }
        self.initialize(committed)
    }
}
