use thiserror::Error;

/// Outcome of a list operation that did not apply
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("Record {0} not found")]
    NotFound(String),

    #[error("Unknown filter value '{0}'")]
    UnknownFilter(String),

    #[error("{0} is required")]
    MissingField(&'static str),
}

impl ListError {
    pub fn not_found(id: impl ToString) -> Self {
        ListError::NotFound(id.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ListError::NotFound(_))
    }
}
