// File: crates/graphic-core/src/error.rs
// Summary: Error taxonomy for configuration lookups and graphic layout.

use thiserror::Error;

/// Static configuration problems. None of these are transient; retrying never helps.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("no breakpoint threshold is <= width {width}")]
    NoMatchingBreakpoint { width: f64 },
    #[error("breakpoint set is empty")]
    EmptyBreakpoints,
    #[error("invalid breakpoint threshold {key:?}")]
    InvalidThreshold { key: String },
    #[error("duplicate breakpoint threshold {threshold}")]
    DuplicateThreshold { threshold: f64 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("invalid {axis} domain: [{min}, {max}]")]
    InvalidDomain { axis: &'static str, min: f64, max: f64 },
    #[error("invalid graphic size {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
