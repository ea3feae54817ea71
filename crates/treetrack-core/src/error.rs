// crates/treetrack-core/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Computation failed: {0}")]
    Computation(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
