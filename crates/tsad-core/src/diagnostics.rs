// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

/// Diagnostics schema version for detection-run metadata.
pub const DIAGNOSTICS_SCHEMA_VERSION: u32 = 1;

/// Structured metadata captured from one detection run.
///
/// Carried on [`crate::ScoredSeries`] so consumers can report join coverage
/// and residual statistics without recomputing them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionDiagnostics {
    pub schema_version: u32,
    pub engine_version: Option<String>,
    /// Length of the actual series.
    pub n: usize,
    /// Actual points that matched a prediction row by timestamp.
    pub matched: usize,
    /// Actual points with no matching prediction (residual folded to 0).
    pub unmatched: usize,
    pub residual_mean: f64,
    /// Population standard deviation (ddof = 0) of the folded residuals.
    pub residual_std: f64,
    /// Threshold applied by the flagger, when flagging has run.
    pub z_thresh: Option<f64>,
    pub anomaly_count: usize,
    pub warnings: Vec<String>,
}

impl Default for DetectionDiagnostics {
    fn default() -> Self {
        Self {
            schema_version: DIAGNOSTICS_SCHEMA_VERSION,
            engine_version: Some(env!("CARGO_PKG_VERSION").to_string()),
            n: 0,
            matched: 0,
            unmatched: 0,
            residual_mean: 0.0,
            residual_std: 0.0,
            z_thresh: None,
            anomaly_count: 0,
            warnings: vec![],
        }
    }
}
