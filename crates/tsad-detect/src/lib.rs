// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

//! Pure detection transforms over an actual series and a prediction table.
//!
//! The pipeline is: [`score_series`] joins actuals to predictions and
//! standardizes residuals, [`flag_anomalies`] applies a z-score threshold,
//! and the flagged output feeds [`counterfactual_series`] (repair) and
//! [`explain_record`] (component breakdown). [`detect_anomalies`] composes
//! the first two steps.

mod counterfactual;
mod explain;
mod flagger;
mod scorer;

pub use counterfactual::counterfactual_series;
pub use explain::explain_record;
pub use flagger::flag_anomalies;
pub use scorer::score_series;

use tsad_core::{PredictionTable, ScoredSeries, TimePoint, TsadError};

/// Scores residuals and flags anomalies in one call.
pub fn detect_anomalies(
    actual: &[TimePoint],
    predictions: &PredictionTable,
    z_thresh: f64,
) -> Result<ScoredSeries, TsadError> {
    let scored = score_series(actual, predictions)?;
    flag_anomalies(&scored, z_thresh)
}
