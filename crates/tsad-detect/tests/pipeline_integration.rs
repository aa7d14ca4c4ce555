// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use tsad_core::{PredictionRow, PredictionTable, TimePoint, TsadError};
use tsad_detect::{counterfactual_series, detect_anomalies, explain_record, score_series};

const TOL: f64 = 1e-3;

fn spike_actual() -> Vec<TimePoint> {
    vec![
        TimePoint::new(1, 5.0),
        TimePoint::new(2, 5.0),
        TimePoint::new(3, 50.0),
        TimePoint::new(4, 5.0),
    ]
}

fn spike_predictions() -> PredictionTable {
    PredictionTable::new(vec![
        PredictionRow::new(1, 5.0).with_field("trend", 4.5).with_field("season_weekly", 0.5),
        PredictionRow::new(2, 5.0).with_field("trend", 4.6).with_field("season_weekly", 0.4),
        PredictionRow::new(3, 5.0).with_field("trend", 4.7).with_field("season_weekly", 0.3),
        PredictionRow::new(4, 5.0).with_field("trend", 4.8).with_field("season_weekly", 0.2),
    ])
    .expect("prediction table should be valid")
}

#[test]
fn spike_scenario_detects_repairs_and_explains_the_anomaly() {
    let actual = spike_actual();
    let predictions = spike_predictions();

    // Detect: residuals [0, 0, 45, 0], mean 11.25, population std ~19.486,
    // z ~ [-0.577, -0.577, 1.732, -0.577]; only index 2 clears z_thresh 1.5.
    let scored = detect_anomalies(&actual, &predictions, 1.5).expect("detection should run");
    assert_eq!(scored.len(), 4);
    assert!((scored.records[2].residual_z - 1.732).abs() < TOL);
    assert_eq!(scored.anomalous_indices(), vec![2]);
    assert_eq!(scored.diagnostics.anomaly_count, 1);

    // Repair: the flagged point takes its prediction, everything else stays.
    let repaired = counterfactual_series(&actual, &predictions, &scored.anomalous_indices())
        .expect("repair should run");
    let values: Vec<f64> = repaired.points.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![5.0, 5.0, 5.0, 5.0]);
    let timestamps: Vec<i64> = repaired.points.iter().map(|p| p.ts_ns).collect();
    assert_eq!(timestamps, vec![1, 2, 3, 4]);

    // Explain: the flagged record exposes its forecast components.
    let explanation = explain_record(&predictions, 2).expect("explain should run");
    assert_eq!(explanation.yhat, Some(5.0));
    assert_eq!(explanation.components.get("trend"), Some(&4.7));
    assert_eq!(explanation.top_components(1), vec![("trend", 4.7)]);
}

#[test]
fn quiet_series_flags_nothing_and_repair_is_identity() {
    let actual: Vec<TimePoint> = (0..10).map(|i| TimePoint::new(i, 5.0)).collect();
    let predictions = PredictionTable::new(
        (0..10).map(|i| PredictionRow::new(i, 5.0)).collect(),
    )
    .expect("prediction table should be valid");

    let scored = detect_anomalies(&actual, &predictions, 3.0).expect("detection should run");
    assert!(scored.anomalous_indices().is_empty());

    let repaired = counterfactual_series(&actual, &predictions, &scored.anomalous_indices())
        .expect("repair should run");
    let expected: Vec<f64> = actual.iter().map(|p| p.value).collect();
    let got: Vec<f64> = repaired.points.iter().map(|p| p.value).collect();
    assert_eq!(got, expected);
}

#[test]
fn disjoint_inputs_fail_loudly_instead_of_reporting_no_anomalies() {
    let actual = spike_actual();
    let predictions = PredictionTable::new(vec![
        PredictionRow::new(100, 5.0),
        PredictionRow::new(200, 5.0),
    ])
    .expect("prediction table should be valid");

    let err = score_series(&actual, &predictions).expect_err("disjoint inputs must fail");
    assert!(matches!(err, TsadError::NoOverlap));
}

#[test]
fn partial_overlap_scores_with_warning_but_no_error() {
    let actual = spike_actual();
    let predictions = PredictionTable::new(vec![
        PredictionRow::new(1, 5.0),
        PredictionRow::new(3, 5.0),
    ])
    .expect("prediction table should be valid");

    let scored = score_series(&actual, &predictions).expect("partial overlap should score");
    assert_eq!(scored.diagnostics.matched, 2);
    assert_eq!(scored.diagnostics.unmatched, 2);
    assert_eq!(scored.diagnostics.warnings.len(), 1);
}

#[cfg(feature = "serde")]
#[test]
fn repaired_series_exports_as_a_two_column_artifact() {
    let actual = spike_actual();
    let predictions = spike_predictions();
    let scored = detect_anomalies(&actual, &predictions, 1.5).expect("detection should run");
    let repaired = counterfactual_series(&actual, &predictions, &scored.anomalous_indices())
        .expect("repair should run");

    let encoded = serde_json::to_value(&repaired).expect("series should serialize");
    for point in encoded["points"].as_array().expect("points array") {
        assert_eq!(point.as_object().expect("point object").len(), 2);
    }
}
