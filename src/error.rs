//! Error types for the license browser.
//!
//! Library code returns these typed errors; the binary wraps them in
//! `anyhow` with context at the edges.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the browse controller at its input boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowseError {
    /// A filter string that is not "all" or one of the three categories
    #[error("invalid filter '{0}' (expected one of: all, permissive, copyleft-weak, copyleft-strong)")]
    InvalidFilter(String),
}

/// Errors raised while validating a catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog must contain at least one license")]
    Empty,

    #[error("duplicate license id '{0}'")]
    DuplicateId(String),

    #[error("license '{id}' has freedom level {level}, expected 0..=100")]
    FreedomOutOfRange { id: String, level: u8 },
}

/// Errors raised while locating or parsing the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found at specified path: {0}")]
    NotFound(PathBuf),

    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid initial_filter in config")]
    InvalidFilter(#[from] BrowseError),
}
