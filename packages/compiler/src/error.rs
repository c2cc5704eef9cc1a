//! Error types
//!
//! Synthesis itself never fails; only loading options and binding tables
//! from their serialized form can.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("option `{option}` must be a JavaScript identifier, got {value:?}")]
    InvalidOption { option: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, CodegenError>;
