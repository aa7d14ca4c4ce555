// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use tsad_core::{is_reserved_column, Explanation, PredictionTable, TsadError};

/// Extracts the forecast-component breakdown for one prediction-table record.
///
/// Component discovery is dynamic: every field whose name is not a reserved
/// timestamp/actual/predicted alias and whose cell coerces to a number
/// becomes a component. Non-coercible cells are omitted silently, not
/// reported as errors or zeros. A missing point prediction surfaces as
/// `yhat: None`.
///
/// All components are exposed; ranking and top-K truncation are the
/// consumer's choice via [`Explanation::ranked_components`] and
/// [`Explanation::top_components`].
pub fn explain_record(
    predictions: &PredictionTable,
    idx: usize,
) -> Result<Explanation, TsadError> {
    let row = predictions.get(idx).ok_or_else(|| {
        TsadError::invalid_input(format!(
            "record index out of range: idx={idx}, table len={}",
            predictions.len()
        ))
    })?;

    let mut components = BTreeMap::new();
    for (name, cell) in &row.fields {
        if is_reserved_column(name) {
            continue;
        }
        if let Some(value) = cell.as_number() {
            components.insert(name.clone(), value);
        }
    }

    Ok(Explanation {
        ts_ns: row.ts_ns,
        yhat: row.yhat,
        components,
    })
}
