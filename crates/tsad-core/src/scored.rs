// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::DetectionDiagnostics;
use std::collections::BTreeMap;

/// One actual point joined to its prediction, with derived scoring fields.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredRecord {
    pub ts_ns: i64,
    pub actual: f64,
    /// Matched point prediction; `None` when no prediction row shared this
    /// timestamp.
    pub yhat: Option<f64>,
    /// `actual - yhat`; `None` when unmatched (folded to 0 for scoring).
    pub residual: Option<f64>,
    pub residual_z: f64,
    pub is_anomaly: bool,
}

/// Ordered scoring output: exactly one record per input point, in input
/// order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScoredSeries {
    pub records: Vec<ScoredRecord>,
    pub diagnostics: DetectionDiagnostics,
}

impl ScoredSeries {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Positions of flagged records, ready to feed the counterfactual
    /// builder.
    pub fn anomalous_indices(&self) -> Vec<i64> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.is_anomaly)
            .map(|(idx, _)| idx as i64)
            .collect()
    }
}

/// One point of the repaired series.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterfactualPoint {
    pub ts_ns: i64,
    pub value: f64,
}

/// The actual series with anomalous points replaced by predictions.
///
/// Always exactly two columns per point (timestamp, value), regardless of
/// how many columns the inputs carried, so it can be exported as-is.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CounterfactualSeries {
    pub points: Vec<CounterfactualPoint>,
}

impl CounterfactualSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Forecast-component breakdown for one prediction-table record.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Explanation {
    pub ts_ns: i64,
    /// Point prediction at this record; `None` means "not available".
    pub yhat: Option<f64>,
    /// Every discoverable numeric component, keyed by column name.
    pub components: BTreeMap<String, f64>,
}

impl Explanation {
    /// Components ranked by absolute magnitude descending.
    ///
    /// Ties break by name ascending so the ordering is deterministic.
    pub fn ranked_components(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .components
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        ranked.sort_by(|(name_a, value_a), (name_b, value_b)| {
            value_b
                .abs()
                .total_cmp(&value_a.abs())
                .then_with(|| name_a.cmp(name_b))
        });
        ranked
    }

    /// The `k` largest-magnitude components.
    pub fn top_components(&self, k: usize) -> Vec<(&str, f64)> {
        let mut ranked = self.ranked_components();
        ranked.truncate(k);
        ranked
    }
}
