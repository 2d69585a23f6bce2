use std::fmt;

use async_trait::async_trait;
use contracts::domain::common::ListRecord;
use contracts::shared::list::ListError;
use web_sys::AbortSignal;

/// Why a [`RecordSource`] call did not apply
#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    /// Rejected by the list rules: missing required field, unknown id.
    List(ListError),
    /// Transport failure, non-2xx status or an undecodable body.
    Remote(String),
}

impl SourceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::List(e) if e.is_not_found())
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::List(e) => write!(f, "{}", e),
            SourceError::Remote(message) => f.write_str(message),
        }
    }
}

impl From<ListError> for SourceError {
    fn from(e: ListError) -> Self {
        SourceError::List(e)
    }
}

/// Transport-level failures such as a timeout
impl From<String> for SourceError {
    fn from(message: String) -> Self {
        SourceError::Remote(message)
    }
}

/// Where a list page gets its records from and sends its changes to.
///
/// Pages only see this trait; whether the records live in memory or behind the
/// API is decided where the page builds its source.
///
/// Every call takes the abort signal of the request it belongs to; a call stops
/// when the signal fires. Sources with nothing to abort ignore it.
#[async_trait(?Send)]
pub trait RecordSource<T: ListRecord> {
    async fn list(&self, signal: Option<AbortSignal>) -> Result<Vec<T>, SourceError>;

    /// Validate and store a new record; the returned record carries its id.
    async fn create(&self, draft: T::Draft, signal: Option<AbortSignal>) -> Result<T, SourceError>;

    async fn update(
        &self,
        id: &T::Id,
        patch: T::Patch,
        signal: Option<AbortSignal>,
    ) -> Result<T, SourceError>;

    async fn delete(&self, id: &T::Id, signal: Option<AbortSignal>) -> Result<(), SourceError>;
}
