//! Error Types
//!
//! Failures that can happen while reading the directory from its backend
//! or while reading the host page configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("CMS bridge call failed: {0}")]
    Bridge(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("malformed collection payload from {context}: {reason}")]
    Decode { context: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid directory config: {0}")]
    Invalid(String),
}
