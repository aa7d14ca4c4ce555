// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use tsad_core::{
    DetectionDiagnostics, PredictionTable, ScoredRecord, ScoredSeries, TimePoint, TsadError,
};

/// Left-joins the actual series to the prediction table by timestamp and
/// computes standardized residuals.
///
/// The output preserves the actual series's order and length exactly: every
/// actual point yields one record, matched or not. Unmatched points carry
/// `yhat = None` and `residual = None`; for standardization those residuals
/// fold to 0. Z-scores use population statistics (ddof = 0) over the whole
/// series; a zero-variance residual series yields all-zero z-scores.
///
/// Errors with [`TsadError::NoOverlap`] when the actual series is non-empty
/// and no timestamp matched at all, since that indicates mismatched inputs
/// rather than "no anomalies".
pub fn score_series(
    actual: &[TimePoint],
    predictions: &PredictionTable,
) -> Result<ScoredSeries, TsadError> {
    if actual.is_empty() {
        return Ok(ScoredSeries::default());
    }

    let yhat_by_ts = predictions.yhat_by_timestamp();

    let mut records = Vec::with_capacity(actual.len());
    let mut folded = Vec::with_capacity(actual.len());
    let mut matched = 0usize;

    for point in actual {
        // A matched row may itself lack a point prediction; both cases fold
        // to a zero residual.
        let yhat = match yhat_by_ts.get(&point.ts_ns) {
            Some(yhat) => {
                matched += 1;
                *yhat
            }
            None => None,
        };
        let residual = yhat.map(|yhat| point.value - yhat);
        folded.push(residual.unwrap_or(0.0));
        records.push(ScoredRecord {
            ts_ns: point.ts_ns,
            actual: point.value,
            yhat,
            residual,
            residual_z: 0.0,
            is_anomaly: false,
        });
    }

    if matched == 0 {
        return Err(TsadError::no_overlap());
    }

    let mean = mean(&folded);
    let std = population_std(&folded, mean);
    if std > 0.0 {
        for (record, residual) in records.iter_mut().zip(&folded) {
            record.residual_z = (residual - mean) / std;
        }
    }

    let unmatched = actual.len() - matched;
    let mut warnings = vec![];
    if unmatched > 0 {
        warnings.push(format!(
            "{unmatched} of {} points had no matching prediction; residuals folded to 0",
            actual.len()
        ));
    }

    Ok(ScoredSeries {
        records,
        diagnostics: DetectionDiagnostics {
            n: actual.len(),
            matched,
            unmatched,
            residual_mean: mean,
            residual_std: std,
            warnings,
            ..DetectionDiagnostics::default()
        },
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (ddof = 0).
///
/// Returns 0.0 for degenerate inputs (zero variance or non-finite moments)
/// so the caller can skip standardization instead of dividing by zero.
fn population_std(values: &[f64], mean: f64) -> f64 {
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    if variance.is_finite() {
        variance.sqrt()
    } else {
        0.0
    }
}
