// SPDX-License-Identifier: GPL-3.0-only

//! Error types for viewfinder configuration

use crate::backends::camera::BackendError;
use crate::selection::EncodingPreferenceList;
use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Result type for configuration selection
pub type SelectionResult<T> = Result<T, SelectionError>;

/// Main application error type
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// No configuration could be selected
    Selection(SelectionError),
    /// Capture device errors
    Backend(BackendError),
    /// Configuration file errors
    Config(String),
    /// Generic error with message
    Other(String),
}

/// Selection errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// No enumerated configuration uses an acceptable pixel encoding
    NoAcceptableConfiguration {
        /// Number of configurations the device offered
        candidates: usize,
        /// Encodings that would have been accepted
        preferred: EncodingPreferenceList,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Selection(e) => write!(f, "Selection error: {}", e),
            AppError::Backend(e) => write!(f, "Camera error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NoAcceptableConfiguration {
                candidates,
                preferred,
            } => write!(
                f,
                "None of {} configurations uses an acceptable pixel encoding ({})",
                candidates, preferred
            ),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for SelectionError {}

impl From<SelectionError> for AppError {
    fn from(err: SelectionError) -> Self {
        AppError::Selection(err)
    }
}

impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        AppError::Backend(err)
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
