//! Error types for configuration and input validation.
//!
//! Clustering itself never fails; only the surfaces that accept caller data
//! (configuration files, candidate validation) return these errors.

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StonemapError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Duplicate item identifier: {0}")]
    DuplicateId(Uuid),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "toml")]
    #[error("TOML error: {0}")]
    Toml(String),
}

pub type Result<T> = std::result::Result<T, StonemapError>;
