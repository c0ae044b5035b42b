// ABOUTME: Integration tests for workout construction, metric formulas, and summaries
// ABOUTME: Covers the reference sensor packages, zero-duration guards, and fault reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use tracker_metrics::{
    build_workout, formulas, summarize, summarize_all, ErrorCode, TrainingBase, WorkoutError,
    WorkoutKind,
};

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPS,
        "{what}: expected {expected}, got {actual}"
    );
}

// ============================================================================
// REFERENCE PACKAGES
// ============================================================================

#[test]
fn test_swimming_reference_package() {
    let workout = build_workout("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let summary = summarize(&workout);

    assert_eq!(summary.kind_name, "Swimming");
    assert_close(summary.duration_hours, 1.0, "duration");
    // 720 * 1.38 / 1000
    assert_close(summary.distance_km, 0.9936, "distance");
    // 25 * 40 / 1000 / 1
    assert_close(summary.mean_speed_kmh, 1.0, "speed");
    // (1.0 + 1.1) * 2 * 80
    assert_close(summary.calories_kcal, 336.0, "calories");
}

#[test]
fn test_running_reference_package() {
    let workout = build_workout("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    let summary = summarize(&workout);

    assert_eq!(summary.kind_name, "Running");
    assert_close(summary.distance_km, 9.75, "distance");
    assert_close(summary.mean_speed_kmh, 9.75, "speed");
    // (18 * 9.75 - 20) * 75 / 1000 * 1 * 60
    assert_close(summary.calories_kcal, 699.75, "calories");
}

#[test]
fn test_walking_reference_package() {
    let workout = build_workout("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    let summary = summarize(&workout);

    assert_eq!(summary.kind_name, "SportsWalking");
    assert_close(summary.distance_km, 5.85, "distance");
    assert_close(summary.mean_speed_kmh, 5.85, "speed");
    // floor(5.85^2 / 180) = 0, leaving 0.035 * 75 * 60
    assert_close(summary.calories_kcal, 157.5, "calories");
}

#[test]
fn test_slow_multi_hour_run() {
    let summary = summarize(&build_workout("RUN", &[420.0, 4.0, 20.0]).unwrap());

    assert_close(summary.distance_km, 0.273, "distance");
    assert_close(summary.mean_speed_kmh, 0.06825, "speed");
    let expected = (18.0 * 0.06825 - 20.0) * 20.0 / 1000.0 * 4.0 * 60.0;
    assert!((summary.calories_kcal - expected).abs() < 1e-6);
}

// ============================================================================
// FORMULA PROPERTIES
// ============================================================================

#[test]
fn test_distance_is_linear_for_every_kind() {
    for (code, tail) in [
        ("RUN", vec![1.0, 75.0]),
        ("WLK", vec![1.0, 75.0, 180.0]),
        ("SWM", vec![1.0, 80.0, 25.0, 40.0]),
    ] {
        let at = |actions: f64| {
            let mut data = vec![actions];
            data.extend(&tail);
            build_workout(code, &data).unwrap().distance_km()
        };
        let kind = WorkoutKind::from_code(code).unwrap();
        let slope = kind.step_length_m() / 1000.0;

        assert_eq!(at(0.0), 0.0, "{code} distance at zero actions");
        assert_close(at(1.0), slope, code);
        assert_close(at(5000.0), 5000.0 * slope, code);
    }
}

#[test]
fn test_zero_duration_is_guarded_on_both_speed_paths() {
    let run = build_workout("RUN", &[15000.0, 0.0, 75.0]).unwrap();
    let walk = build_workout("WLK", &[9000.0, 0.0, 75.0, 180.0]).unwrap();
    let swim = build_workout("SWM", &[720.0, 0.0, 80.0, 25.0, 40.0]).unwrap();

    assert_eq!(run.mean_speed_kmh(), 0.0);
    assert_eq!(walk.mean_speed_kmh(), 0.0);
    assert_eq!(swim.mean_speed_kmh(), 0.0);
    // (0 + 1.1) * 2 * 80
    assert_close(swim.spent_calories(), 176.0, "swim calories at zero duration");
}

#[test]
fn test_walking_truncates_speed_height_quotient() {
    // 3^2 / 4 = 2.25 -> 2
    let floored = formulas::walking_calories(3.0, 80.0, 4.0, 1.0);
    assert_close(floored, (0.035 * 80.0 + 2.0 * 0.029 * 80.0) * 60.0, "floored");

    // A fast walker whose quotient crosses 1 gets the speed term
    let workout = build_workout("WLK", &[30000.0, 1.0, 70.0, 150.0]).unwrap();
    let speed = workout.mean_speed_kmh();
    assert!(speed.powi(2) / 150.0 > 2.0 && speed.powi(2) / 150.0 < 3.0);
    assert_close(
        workout.spent_calories(),
        (0.035 * 70.0 + 2.0 * 0.029 * 70.0) * 60.0,
        "walking calories",
    );
}

// ============================================================================
// FAULTS
// ============================================================================

#[test]
fn test_unrecognized_code_is_never_a_blank_workout() {
    let err = build_workout("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnrecognizedKind);
    assert!(err.to_string().contains("XYZ"));
    assert!(build_workout("", &[]).is_err());
}

#[test]
fn test_arity_mismatch_for_every_kind() {
    for (code, expected) in [("RUN", 3), ("WLK", 4), ("SWM", 5)] {
        let data = vec![1.0; expected + 1];
        match build_workout(code, &data).unwrap_err() {
            WorkoutError::ArgumentMismatch {
                expected: e,
                actual,
                ..
            } => {
                assert_eq!(e, expected);
                assert_eq!(actual, expected + 1);
            }
            other => panic!("unexpected error for {code}: {other}"),
        }
    }
}

#[test]
fn test_base_record_reports_unimplemented_formula() {
    let err = TrainingBase::new(100, 1.0, 70.0)
        .spent_calories()
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnimplementedFormula);
}

// ============================================================================
// SUMMARIES
// ============================================================================

#[test]
fn test_running_summary_renders_fixed_template() {
    let summary = summarize(&build_workout("RUN", &[15000.0, 1.0, 75.0]).unwrap());

    assert_eq!(
        summary.message(),
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
         Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
    );
}

#[test]
fn test_summarize_all_preserves_order() {
    let workouts = [
        build_workout("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap(),
        build_workout("RUN", &[15000.0, 1.0, 75.0]).unwrap(),
    ];
    let names: Vec<_> = summarize_all(&workouts)
        .into_iter()
        .map(|s| s.kind_name)
        .collect();
    assert_eq!(names, ["SportsWalking", "Running"]);
}

#[test]
fn test_summary_json_shape() {
    let summary = summarize(&build_workout("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap());
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["kind_name"], "Swimming");
    assert_eq!(json["mean_speed_kmh"], 1.0);
    assert_eq!(json["calories_kcal"], 336.0);
}
