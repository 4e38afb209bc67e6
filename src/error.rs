//! Error types.

use std::io;
use thiserror::Error;

/// Failures raised by the flat-file store.
///
/// A lookup that finds nothing is not an error; absence is reported as
/// `Ok(None)` by the store so callers never confuse a missing form with a
/// broken file.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("store file unavailable: {0}")]
    Unavailable(#[from] io::Error),

    /// The backing file exists but does not hold the expected JSON shape.
    #[error("store file corrupted: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
