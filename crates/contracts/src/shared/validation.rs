use thiserror::Error;

/// Form validation failures, reported before anything is submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Password must be at least {0} characters.")]
    PasswordTooShort(usize),

    #[error("Please agree to the terms and conditions.")]
    TermsNotAccepted,
}

pub fn required(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(())
    }
}
