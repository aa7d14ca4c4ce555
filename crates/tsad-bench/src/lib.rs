// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use tsad_core::{PredictionRow, PredictionTable, TimePoint};

/// Builds a daily-cadence series with a deterministic trend/seasonal shape
/// and a few injected spikes, paired with a matching prediction table.
pub fn synthetic_inputs(n: usize) -> (Vec<TimePoint>, PredictionTable) {
    const DAY_NS: i64 = 86_400_000_000_000;

    let mut actual = Vec::with_capacity(n);
    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let ts_ns = i as i64 * DAY_NS;
        let trend = 0.01 * i as f64;
        let weekly = 2.0 * ((i % 7) as f64 / 7.0 * std::f64::consts::TAU).sin();
        let yhat = 5.0 + trend + weekly;
        let spike = if n > 0 && (i == n / 5 || i == 3 * n / 5) { 8.0 } else { 0.0 };

        actual.push(TimePoint::new(ts_ns, yhat + spike));
        rows.push(
            PredictionRow::new(ts_ns, yhat)
                .with_field("trend", trend)
                .with_field("season_weekly", weekly),
        );
    }

    let predictions = PredictionTable::new(rows).expect("generated timestamps are unique");
    (actual, predictions)
}
