//! Notification errors.

use thiserror::Error;

/// Errors raised while loading store configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The backing store could not be reached or returned nothing.
    #[error("store configuration unavailable: {0}")]
    Unavailable(String),

    /// The stored document could not be parsed.
    #[error("malformed store configuration: {0}")]
    Malformed(String),
}

/// Errors that can occur while composing a notification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("unknown notification event kind '{0}'")]
    UnknownEventKind(String),

    #[error("cannot compose notification without store configuration")]
    ConfigurationUnavailable(#[source] ConfigError),
}
