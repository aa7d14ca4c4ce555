// SPDX-License-Identifier: MIT OR Apache-2.0

#![no_main]

#[path = "common.rs"]
mod common;

use libfuzzer_sys::fuzz_target;
use tsad_core::{CellValue, PredictionRow, PredictionTable, TimePoint};
use tsad_detect::{counterfactual_series, detect_anomalies, explain_record, score_series};

fn build_cell(cursor: &mut common::ByteCursor<'_>) -> CellValue {
    match cursor.next_u8() % 4 {
        0 => CellValue::Number(cursor.next_f64()),
        1 => {
            let raw = cursor.next_i16();
            CellValue::Text(format!("{}.{}", raw, cursor.next_u8()))
        }
        2 => CellValue::Bool(cursor.next_u8() & 1 == 0),
        _ => CellValue::Null,
    }
}

fn build_row(cursor: &mut common::ByteCursor<'_>, ts_ns: i64) -> PredictionRow {
    let mut row = if cursor.next_u8() % 5 == 0 {
        PredictionRow::without_yhat(ts_ns)
    } else {
        PredictionRow::new(ts_ns, cursor.next_f64())
    };
    let field_count = common::bounded(cursor.next_u8(), 0, 4);
    for i in 0..field_count {
        let name = match cursor.next_u8() % 4 {
            0 => "trend".to_string(),
            1 => "season_weekly".to_string(),
            2 => "yhat1".to_string(),
            _ => format!("c{i}"),
        };
        row = row.with_field(name, build_cell(cursor));
    }
    row
}

fuzz_target!(|data: &[u8]| {
    let mut cursor = common::ByteCursor::new(data);

    let n = common::bounded(cursor.next_u8(), 0, 96);
    let mut actual = Vec::with_capacity(n);
    let mut rows = Vec::new();
    for i in 0..n {
        // Timestamps mostly overlap the actual series, sometimes diverge,
        // sometimes collide (duplicate rows must be rejected, not panic).
        let ts_ns = match cursor.next_u8() % 4 {
            0 => i as i64,
            1 => i as i64 + 1_000,
            2 => cursor.next_i64(),
            _ => (i as i64) % 8,
        };
        actual.push(TimePoint::new(i as i64, cursor.next_f64()));
        rows.push(build_row(&mut cursor, ts_ns));
    }

    let Ok(predictions) = PredictionTable::new(rows) else {
        return;
    };

    let z_thresh = f64::from(cursor.next_i16()) / 64.0;
    let _ = detect_anomalies(&actual, &predictions, z_thresh);
    if let Ok(scored) = score_series(&actual, &predictions) {
        let _ = counterfactual_series(&actual, &predictions, &scored.anomalous_indices());
    }

    let index_count = common::bounded(cursor.next_u8(), 0, 12);
    let indices: Vec<i64> = (0..index_count).map(|_| cursor.next_i64()).collect();
    let _ = counterfactual_series(&actual, &predictions, &indices);

    let _ = explain_record(&predictions, usize::from(cursor.next_u8()));
});
