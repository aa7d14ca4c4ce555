// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors surfaced by the detection core.
///
/// The core deliberately favors defined degenerate behavior over errors:
/// missing predictions fold to zero residuals, out-of-range repair indices
/// are skipped, and non-numeric components are omitted. Only conditions that
/// indicate caller misuse propagate as `TsadError`.
#[derive(Debug, Error)]
pub enum TsadError {
    /// A caller-supplied argument violated a documented precondition.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The actual series and the prediction table share no common timestamp.
    ///
    /// Distinct from "no anomalies found": an empty joinable set means the
    /// two inputs describe different series entirely.
    #[error("no overlapping timestamps between actual series and prediction table")]
    NoOverlap,
}

impl TsadError {
    /// Constructs a [`TsadError::InvalidInput`] from any message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Constructs a [`TsadError::NoOverlap`].
    pub fn no_overlap() -> Self {
        Self::NoOverlap
    }
}
