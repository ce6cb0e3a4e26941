//! Typed errors surfaced by the engine's entry points.
//!
//! Every public operation fails with exactly one member of [`Error`]:
//!
//! | Variant | Meaning | Caller action |
//! |---------|---------|---------------|
//! | [`Error::NotFound`] | The query resolves to no record | user-correctable |
//! | [`Error::Transport`] | The record source is unreachable or failing | retry by resubmission |
//! | [`Error::PageIndex`] | Invalid page index or page size | fix the call site |
//!
//! Raw `reqwest` errors never cross the crate boundary; the `From` impl
//! below folds them into [`Error::Transport`].

use thiserror::Error;

/// Failure taxonomy for resolution, ranking, and hydration.
#[derive(Debug, Error)]
pub enum Error {
    /// No record matched after exhausting the fallback chain.
    #[error("no record matches '{0}'")]
    NotFound(String),

    /// Network failure, timeout, or a non-recoverable HTTP status.
    #[error("record source unavailable: {0}")]
    Transport(String),

    /// Caller supplied a negative page index or a non-positive page size.
    #[error("invalid page index or size: {0}")]
    PageIndex(i64),
}

impl Error {
    /// True when the failure means "no such record" rather than
    /// "service unavailable". The resolver's fallback chain keys on this.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_predicate() {
        assert!(Error::NotFound("mew".into()).is_not_found());
        assert!(!Error::Transport("connection refused".into()).is_not_found());
        assert!(!Error::PageIndex(-1).is_not_found());
    }

    #[test]
    fn test_display_messages() {
        let e = Error::NotFound("missingno".into());
        assert_eq!(e.to_string(), "no record matches 'missingno'");

        let e = Error::PageIndex(-3);
        assert_eq!(e.to_string(), "invalid page index or size: -3");
    }
}
