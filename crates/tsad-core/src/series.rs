// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::TsadError;
use std::collections::{BTreeMap, HashSet};

/// Column names excluded from component discovery.
///
/// The component set of a prediction table is open-ended: any field that is
/// numeric and not one of these timestamp/actual/predicted aliases is treated
/// as a forecast component. Matching is case-insensitive.
pub const RESERVED_COLUMNS: &[&str] = &[
    "ds",
    "ts",
    "ts_ns",
    "timestamp",
    "y",
    "actual",
    "yhat",
    "yhat1",
    "predicted",
];

/// Returns true when `name` is a reserved (non-component) column name.
pub fn is_reserved_column(name: &str) -> bool {
    RESERVED_COLUMNS
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

/// A single observation of the actual series.
///
/// Timestamps are Unix nanoseconds. Uniqueness and ascending order are the
/// caller's responsibility; the core preserves input order as-is.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimePoint {
    pub ts_ns: i64,
    pub value: f64,
}

impl TimePoint {
    pub fn new(ts_ns: i64, value: f64) -> Self {
        Self { ts_ns, value }
    }
}

/// Schema-free cell value for open-ended prediction-table columns.
///
/// Forecasters emit whatever component columns they like; cells arrive as
/// loosely typed values and are coerced to numbers only at explanation time.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl CellValue {
    /// Permissive numeric coercion.
    ///
    /// Numbers pass through, numeric strings parse, booleans map to 1.0/0.0,
    /// and everything else yields `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(raw) => raw.trim().parse::<f64>().ok(),
            Self::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            Self::Null => None,
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// One forecaster row: a timestamp, an optional point prediction, and an
/// open-ended set of named fields (trend, seasonal terms, ...).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionRow {
    pub ts_ns: i64,
    pub yhat: Option<f64>,
    pub fields: BTreeMap<String, CellValue>,
}

impl PredictionRow {
    pub fn new(ts_ns: i64, yhat: f64) -> Self {
        Self {
            ts_ns,
            yhat: Some(yhat),
            fields: BTreeMap::new(),
        }
    }

    /// A row whose point prediction is unavailable.
    pub fn without_yhat(ts_ns: i64) -> Self {
        Self {
            ts_ns,
            yhat: None,
            fields: BTreeMap::new(),
        }
    }

    /// Adds a named field (component column) to the row.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

/// A validated prediction table.
///
/// Construction rejects duplicate timestamps: the timestamp join that every
/// downstream transform performs is only well defined when each timestamp
/// maps to at most one row.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionTable {
    rows: Vec<PredictionRow>,
}

impl PredictionTable {
    /// Constructs a table, rejecting duplicate timestamps.
    pub fn new(rows: Vec<PredictionRow>) -> Result<Self, TsadError> {
        let mut seen = HashSet::with_capacity(rows.len());
        for row in &rows {
            if !seen.insert(row.ts_ns) {
                return Err(TsadError::invalid_input(format!(
                    "duplicate prediction timestamp: ts_ns={}",
                    row.ts_ns
                )));
            }
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[PredictionRow] {
        &self.rows
    }

    pub fn get(&self, idx: usize) -> Option<&PredictionRow> {
        self.rows.get(idx)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Timestamp-keyed lookup of point predictions, built per detection run.
    pub fn yhat_by_timestamp(&self) -> std::collections::HashMap<i64, Option<f64>> {
        self.rows
            .iter()
            .map(|row| (row.ts_ns, row.yhat))
            .collect()
    }
}
