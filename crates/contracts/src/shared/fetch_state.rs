//! State of a one-shot remote read: `Loading -> Ready | Failed`.

use crate::system::auth::ErrorBody;

/// Lifecycle of a fetch fired once per mount.
///
/// Terminal states are sticky: once `Ready` or `Failed`, further results are ignored.
/// A new fetch needs a new `FetchState` (i.e. a remount).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> FetchState<T> {
    /// Apply the result of the fetch. Returns `false` when already settled.
    pub fn resolve(&mut self, result: Result<T, String>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match result {
            Ok(value) => FetchState::Ready(value),
            Err(message) => FetchState::Failed(message),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Error text for a non-2xx answer: the server's `{ message }` when the body carries
/// one, otherwise `"{fallback}: {status}"`.
pub fn failure_text(status: u16, body: &str, fallback: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) if !error.message.trim().is_empty() => error.message,
        _ => format!("{}: {}", fallback, status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_resolves_to_ready() {
        let mut state = FetchState::default();
        assert!(state.is_loading());
        assert!(state.resolve(Ok(5)));
        assert_eq!(state.value(), Some(&5));
    }

    #[test]
    fn loading_resolves_to_failed() {
        let mut state: FetchState<u32> = FetchState::Loading;
        assert!(state.resolve(Err("HTTP 500".into())));
        assert_eq!(state.error(), Some("HTTP 500"));
        assert_eq!(state.value(), None);
    }

    #[test]
    fn terminal_states_are_sticky() {
        let mut failed: FetchState<u32> = FetchState::Failed("boom".into());
        assert!(!failed.resolve(Ok(1)));
        assert_eq!(failed, FetchState::Failed("boom".into()));

        let mut ready = FetchState::Ready(1);
        assert!(!ready.resolve(Err("late".into())));
        assert_eq!(ready, FetchState::Ready(1));
    }

    #[test]
    fn failure_text_prefers_server_message() {
        assert_eq!(
            failure_text(422, r#"{"message":"Title is required"}"#, "Save failed"),
            "Title is required"
        );
        assert_eq!(failure_text(500, "", "Save failed"), "Save failed: 500");
        assert_eq!(
            failure_text(502, r#"{"message":"  "}"#, "Save failed"),
            "Save failed: 502"
        );
    }
}
