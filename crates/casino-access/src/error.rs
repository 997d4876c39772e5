//! Error Types
//!
//! Failures surfaced by the session, gateway and storage layers.

use std::fmt;

use thiserror::Error;

/// Which locally held credential a request needed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    AccessToken,
    RefreshToken,
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialKind::AccessToken => f.write_str("access token"),
            CredentialKind::RefreshToken => f.write_str("refresh token"),
        }
    }
}

/// Durable key/value storage failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to write `{key}` to local storage")]
    Write { key: String },
}

/// Form input rejected before any request is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingField { field: &'static str },
}

/// Errors from login, refresh and current-user requests
#[derive(Debug, Error)]
pub enum AuthError {
    /// The API answered with a non-2xx status
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("No {0} found")]
    MissingCredential(CredentialKind),

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("request timed out")]
    Timeout,

    /// The session was signed out or replaced while a request was in flight
    #[error("session ended before the response arrived")]
    SessionEnded,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Text shown to the operator in the login form or a toast.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Rejected { message, .. } => message.clone(),
            AuthError::MissingCredential(_) | AuthError::Invalid(_) => self.to_string(),
            AuthError::Network(_) => {
                "Network connection problem. Please check your internet connection.".to_string()
            }
            AuthError::Decode(_) => "Unexpected response from the server.".to_string(),
            AuthError::Timeout => {
                "The server took too long to respond. Please try again.".to_string()
            }
            AuthError::Storage(_) => "Could not save the session in this browser.".to_string(),
            AuthError::SessionEnded => "Your session has ended.".to_string(),
        }
    }

    /// True when the server refused the credential itself, as opposed to the
    /// request failing to complete.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AuthError::Rejected { status: 401 | 403, .. })
    }

    /// True when a current-user check means the stored session is dead:
    /// the token was refused, or its account no longer exists (404).
    pub fn ends_session(&self) -> bool {
        self.is_unauthorized() || matches!(self, AuthError::Rejected { status: 404, .. })
    }
}

/// Reasons a persisted session could not be restored.
///
/// Never surfaced to the operator; the session store logs it and falls back
/// to the login view.
#[derive(Debug, Error)]
pub enum SessionRestoreError {
    #[error("no access token stored")]
    MissingToken,
    #[error("no user snapshot stored")]
    MissingSnapshot,
    #[error("stored user snapshot is corrupt: {0}")]
    CorruptSnapshot(#[from] serde_json::Error),
}
