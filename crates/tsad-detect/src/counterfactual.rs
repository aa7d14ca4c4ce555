// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use tsad_core::{CounterfactualPoint, CounterfactualSeries, PredictionTable, TimePoint, TsadError};

/// Builds the repaired series: anomalous positions take the matched
/// prediction, everything else keeps the actual value.
///
/// `anomalous` holds 0-based positions into `actual`. Positions outside
/// `[0, len)` are skipped silently (the element type is `i64` so negative
/// positions are representable), meaning a stale index set computed against
/// a different series cannot fail the export. An in-range position whose
/// timestamp has no matched point prediction also keeps the actual value.
///
/// The output has the same length and timestamp order as `actual` and
/// carries exactly (timestamp, value) per point.
pub fn counterfactual_series(
    actual: &[TimePoint],
    predictions: &PredictionTable,
    anomalous: &[i64],
) -> Result<CounterfactualSeries, TsadError> {
    let yhat_by_ts = predictions.yhat_by_timestamp();

    let mut points: Vec<CounterfactualPoint> = actual
        .iter()
        .map(|point| CounterfactualPoint {
            ts_ns: point.ts_ns,
            value: point.value,
        })
        .collect();

    for &idx in anomalous {
        if idx < 0 || idx >= actual.len() as i64 {
            continue;
        }
        let idx = idx as usize;
        if let Some(Some(yhat)) = yhat_by_ts.get(&actual[idx].ts_ns) {
            points[idx].value = *yhat;
        }
    }

    Ok(CounterfactualSeries { points })
}

#[cfg(test)]
mod tests {
    use super::counterfactual_series;
    use tsad_core::{PredictionRow, PredictionTable, TimePoint};

    fn actual() -> Vec<TimePoint> {
        vec![
            TimePoint::new(1, 5.0),
            TimePoint::new(2, 5.0),
            TimePoint::new(3, 50.0),
            TimePoint::new(4, 5.0),
        ]
    }

    fn predictions() -> PredictionTable {
        PredictionTable::new(vec![
            PredictionRow::new(1, 5.0),
            PredictionRow::new(2, 5.0),
            PredictionRow::new(3, 5.0),
            PredictionRow::new(4, 5.0),
        ])
        .expect("test table should be valid")
    }

    #[test]
    fn empty_index_set_returns_the_actual_series_exactly() {
        let repaired = counterfactual_series(&actual(), &predictions(), &[])
            .expect("repair should succeed");
        let values: Vec<f64> = repaired.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![5.0, 5.0, 50.0, 5.0]);
        let timestamps: Vec<i64> = repaired.points.iter().map(|p| p.ts_ns).collect();
        assert_eq!(timestamps, vec![1, 2, 3, 4]);
    }

    #[test]
    fn anomalous_positions_take_the_matched_prediction() {
        let repaired = counterfactual_series(&actual(), &predictions(), &[2])
            .expect("repair should succeed");
        let values: Vec<f64> = repaired.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![5.0, 5.0, 5.0, 5.0]);
    }

    #[test]
    fn out_of_range_and_negative_indices_are_skipped_silently() {
        let repaired = counterfactual_series(&actual(), &predictions(), &[-3, -1, 4, 100, 2])
            .expect("repair should tolerate stale indices");
        let values: Vec<f64> = repaired.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![5.0, 5.0, 5.0, 5.0]);
        assert_eq!(repaired.len(), 4);
    }

    #[test]
    fn unmatched_anomalous_position_keeps_the_actual_value() {
        let sparse = PredictionTable::new(vec![PredictionRow::new(1, 5.0)])
            .expect("test table should be valid");
        let repaired =
            counterfactual_series(&actual(), &sparse, &[2]).expect("repair should succeed");
        assert_eq!(repaired.points[2].value, 50.0);
    }

    #[test]
    fn matched_position_without_yhat_keeps_the_actual_value() {
        let table = PredictionTable::new(vec![
            PredictionRow::new(1, 5.0),
            PredictionRow::new(2, 5.0),
            PredictionRow::without_yhat(3),
            PredictionRow::new(4, 5.0),
        ])
        .expect("test table should be valid");
        let repaired =
            counterfactual_series(&actual(), &table, &[2]).expect("repair should succeed");
        assert_eq!(repaired.points[2].value, 50.0);
    }

    #[test]
    fn duplicate_indices_in_the_set_are_harmless() {
        let repaired = counterfactual_series(&actual(), &predictions(), &[2, 2, 2])
            .expect("repair should succeed");
        assert_eq!(repaired.points[2].value, 5.0);
    }

    #[test]
    fn empty_actual_series_repairs_to_empty_output() {
        let repaired = counterfactual_series(&[], &predictions(), &[0, 1])
            .expect("empty series should succeed");
        assert!(repaired.is_empty());
    }
}
