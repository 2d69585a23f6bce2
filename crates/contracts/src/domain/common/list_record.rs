use chrono::{DateTime, Utc};

use super::{Facet, RecordKey};
use crate::shared::list::ListError;

/// Form input for a new record
pub trait RecordDraft {
    /// Check required fields. Only emptiness is checked, there is no server of record.
    fn validate(&self) -> Result<(), ListError>;
}

/// A record that can live in a [`crate::shared::list::Collection`]
pub trait ListRecord: Clone {
    type Id: RecordKey;
    type Facet: Facet;
    type Draft: RecordDraft;
    type Patch;

    fn id(&self) -> &Self::Id;

    /// Value compared against the active filter.
    fn facet(&self) -> Self::Facet;

    /// Fields the free-text search looks at.
    fn search_fields(&self) -> Vec<&str>;

    fn from_draft(id: Self::Id, draft: Self::Draft, created_at: DateTime<Utc>) -> Self;

    /// Overwrite the fields present in `patch`. Must be idempotent.
    fn apply_patch(&mut self, patch: &Self::Patch);

    /// Reject patches that would blank a required field.
    fn check_patch(_patch: &Self::Patch) -> Result<(), ListError> {
        Ok(())
    }

    /// Case-insensitive substring match over `search_fields`.
    /// `needle_lower` must already be lower-cased; an empty needle matches everything.
    fn matches_search(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle_lower))
    }
}

/// Shared helper for drafts and patches: fails when a required text field is blank.
pub fn require(field: &'static str, value: &str) -> Result<(), ListError> {
    if value.trim().is_empty() {
        Err(ListError::MissingField(field))
    } else {
        Ok(())
    }
}
