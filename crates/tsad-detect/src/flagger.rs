// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use tsad_core::{ScoredSeries, TsadError};

/// Flags every record whose standardized residual meets the threshold.
///
/// The predicate is `|residual_z| >= z_thresh`, inclusive at the boundary.
/// Stateless: returns a new series with flags and diagnostics updated, the
/// input is untouched.
pub fn flag_anomalies(scored: &ScoredSeries, z_thresh: f64) -> Result<ScoredSeries, TsadError> {
    if !z_thresh.is_finite() || z_thresh <= 0.0 {
        return Err(TsadError::invalid_input(format!(
            "z_thresh must be finite and > 0; got {z_thresh}"
        )));
    }

    let mut flagged = scored.clone();
    let mut anomaly_count = 0usize;
    for record in &mut flagged.records {
        record.is_anomaly = record.residual_z.abs() >= z_thresh;
        if record.is_anomaly {
            anomaly_count += 1;
        }
    }
    flagged.diagnostics.z_thresh = Some(z_thresh);
    flagged.diagnostics.anomaly_count = anomaly_count;
    Ok(flagged)
}
