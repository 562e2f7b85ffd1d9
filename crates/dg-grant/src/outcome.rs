//! Grant outcome type.

use crate::error::GrantFailure;

/// Terminal result of one authentication attempt.
///
/// Exactly one protocol branch produces it and it is immutable once
/// produced. `S` is the subject type the directory resolves on success.
#[derive(Debug, Clone)]
pub enum GrantOutcome<S> {
    /// Authentication succeeded.
    Success {
        /// The authenticated subject.
        subject: S,
    },

    /// Authentication failed with an OAuth 2.0 error.
    Failure(GrantFailure),
}

impl<S> GrantOutcome<S> {
    /// Creates a success outcome.
    #[must_use]
    pub const fn success(subject: S) -> Self {
        Self::Success { subject }
    }

    /// Creates a failure outcome.
    #[must_use]
    pub const fn failure(failure: GrantFailure) -> Self {
        Self::Failure(failure)
    }

    /// Checks whether authentication succeeded.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the authenticated subject, if any.
    #[must_use]
    pub const fn subject(&self) -> Option<&S> {
        match self {
            Self::Success { subject } => Some(subject),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the outcome, returning the authenticated subject.
    #[must_use]
    pub fn into_subject(self) -> Option<S> {
        match self {
            Self::Success { subject } => Some(subject),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure, if any.
    #[must_use]
    pub const fn as_failure(&self) -> Option<&GrantFailure> {
        match self {
            Self::Success { .. } => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Returns the OAuth 2.0 error code on failure.
    #[must_use]
    pub const fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure(failure) => Some(failure.error_code()),
        }
    }

    /// Returns the HTTP status code on failure.
    #[must_use]
    pub const fn http_status(&self) -> Option<u16> {
        match self {
            Self::Success { .. } => None,
            Self::Failure(failure) => Some(failure.http_status()),
        }
    }

    /// Returns the human-readable error description on failure.
    #[must_use]
    pub fn error_description(&self) -> Option<&str> {
        self.as_failure().map(GrantFailure::error_description)
    }
}

impl<S> From<GrantFailure> for GrantOutcome<S> {
    fn from(failure: GrantFailure) -> Self {
        Self::Failure(failure)
    }
}
