//! Errors raised while building the manor or loading its configuration.

use std::path::PathBuf;
use thiserror::Error;

use crate::text::TextField;

/// Errors from manor construction and configuration.
///
/// All of these are fatal for a playthrough: the case cannot start with a
/// half-built map.
#[derive(Debug, Error)]
pub enum ManorError {
    #[error("{field} text is {len} characters long, the limit is {max}")]
    TextTooLong {
        field: TextField,
        len: usize,
        max: usize,
    },

    #[error("{field} text must not be empty")]
    EmptyText { field: TextField },

    #[error("text must not be empty")]
    BlankText,

    #[error("no room at path {0}")]
    InvalidPath(String),

    #[error("could not read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result alias for manor operations.
pub type ManorResult<T> = Result<T, ManorError>;
