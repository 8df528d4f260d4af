//! Error types for the merge and split runners.
//!
//! A failing input aborts the whole operation, but the error always names
//! the file that caused it so the user knows which entry to fix or drop.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpError {
    #[error("no input files to merge")]
    NoInputFiles,

    #[error("failed to load {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        source: lopdf::Error,
    },

    #[error("failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        source: lopdf::Error,
    },

    #[error("malformed page tree in {}: {details}", .path.display())]
    PageTree { path: PathBuf, details: String },
}
