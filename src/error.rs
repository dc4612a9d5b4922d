use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors for a prune invocation. Per-directory removal failures are
/// not here; they are collected in [`crate::pruner::PruneReport`].
#[derive(Debug, Error)]
pub enum PruneError {
    #[error("cannot read base directory {}: {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read confirmation: {0}")]
    Prompt(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
