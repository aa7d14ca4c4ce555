// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

//! Shared data model for forecast-residual anomaly detection.
//!
//! The types here are pure, immutable values: an actual series joined to a
//! prediction table yields a [`ScoredSeries`], which downstream transforms
//! turn into a [`CounterfactualSeries`] or per-record [`Explanation`]s.

mod diagnostics;
mod error;
mod scored;
mod series;

pub use diagnostics::{DetectionDiagnostics, DIAGNOSTICS_SCHEMA_VERSION};
pub use error::TsadError;
pub use scored::{
    CounterfactualPoint, CounterfactualSeries, Explanation, ScoredRecord, ScoredSeries,
};
pub use series::{
    is_reserved_column, CellValue, PredictionRow, PredictionTable, TimePoint, RESERVED_COLUMNS,
};
