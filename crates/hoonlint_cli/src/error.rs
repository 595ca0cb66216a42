//! User-facing CLI errors: failures that stem from bad input, reported
//! with `thiserror` and a nonzero exit, never a panic.

use std::path::PathBuf;

use hoonlint_core::SuppressionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown policy {0:?}; only \"Test::Whitespace\" is supported")]
    UnknownPolicy(String),

    #[error("could not read {path}: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },

    #[error(transparent)]
    Suppression(#[from] SuppressionError),
}
