use thiserror::Error;

use crate::sort::SortKey;

/// Result type for comparer configuration and dispatch
pub type Result<T> = std::result::Result<T, ComparerError>;

/// Errors from the fallible edges of the library.
///
/// The comparators themselves are total and never fail.
#[derive(Error, Debug)]
pub enum ComparerError {
    /// IO error occurred while reading a config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Config file is not valid TOML or has unknown keys
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config parsed but holds an unusable value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown sort key: {0} (expected names, extensions, paths, prefix or anything)")]
    UnknownSortKey(String),

    #[error("Sort key `{0}` requires a query")]
    MissingQuery(SortKey),
}

impl ComparerError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an unknown sort key error
    pub fn unknown_sort_key(key: impl Into<String>) -> Self {
        Self::UnknownSortKey(key.into())
    }
}
