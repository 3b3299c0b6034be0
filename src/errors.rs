//! Error Types
//!
//! Construction-time failures are the only fatal class: a malformed path or a
//! degenerate configuration prevents rig creation and is never retried.
//! Per-frame numerical edge cases (coincident samples, dot products drifting
//! past [-1, 1], non-finite deltas) are recovered in place inside the frame
//! and never surface here.

use thiserror::Error;

/// The error type for rig and curve construction.
#[derive(Error, Debug)]
pub enum RigError {
    /// The authored control-point list cannot form a usable curve.
    #[error("Invalid flight path: {reason}")]
    InvalidPath {
        /// What made the path unusable
        reason: String,
    },

    /// A tuning coefficient is outside its valid domain.
    #[error("Invalid tuning config: {reason}")]
    InvalidConfig {
        /// The offending coefficient and its value
        reason: String,
    },
}

/// Alias for `Result<T, RigError>`.
pub type Result<T> = std::result::Result<T, RigError>;
