// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Feed Error in '{path}': {message}")]
    Feed { path: PathBuf, message: String },

    #[error("Delete Error: {0}")]
    Delete(#[from] DeleteError),
}

impl Error {
    /// Returns the i18n message key used when this error reaches the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-io-error",
            Error::Config(_) => "notification-config-load-error",
            Error::Feed { .. } => "notification-feed-load-error",
            Error::Delete(err) => err.i18n_key(),
        }
    }
}

/// Failure of the external delete capability.
///
/// The viewer never inspects these; they only travel back to the host so it
/// can decide how to surface them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteError {
    /// The pulse is no longer part of the feed.
    #[error("pulse '{0}' not found")]
    NotFound(String),

    /// The requesting user did not author the pulse.
    #[error("user '{user}' cannot delete pulse '{pulse}'")]
    NotOwner { user: String, pulse: String },

    /// The backing storage rejected the change.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DeleteError {
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DeleteError::NotFound(_) => "notification-delete-not-found",
            DeleteError::NotOwner { .. } => "notification-delete-not-owner",
            DeleteError::Storage(_) => "notification-delete-error",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
