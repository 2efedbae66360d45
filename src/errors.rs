//! Unified application error type.
//! All modules (api, core, export, cli) return AppError to keep the error
//! handling consistent. Gateway failures have their own enum so that
//! callers which only talk to the remote endpoint can match on them.

use std::io;
use thiserror::Error;

/// Failures of a single call to the remote order endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Not authenticated. Please login first.")]
    Unauthenticated,

    #[error("Failed to connect to API: {0}")]
    Network(String),

    #[error("API request failed: {status}")]
    RequestFailed { status: u16 },

    #[error("Invalid response from API: {0}")]
    Protocol(String),

    #[error("{0}")]
    RemoteRejected(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Remote endpoint
    // ---------------------------
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected DD/MM/YYYY)")]
    InvalidDate(String),

    #[error("Invalid meal type: {0} (expected Lunch or Dinner)")]
    InvalidMealType(String),

    #[error("{0}")]
    InvalidInput(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("No data to export")]
    NoDataToExport,

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// The gateway failure behind this error, if any.
    pub fn gateway(&self) -> Option<&GatewayError> {
        match self {
            AppError::Gateway(g) => Some(g),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
