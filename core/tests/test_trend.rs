// core/tests/test_trend.rs

use chrono::{DateTime, Duration, Utc};

use rehablog_core::trend::pain_trend;
use rehablog_core::types::{SessionKind, SetRow, Trend};

fn now() -> DateTime<Utc> {
    "2025-03-10T12:00:00Z".parse().unwrap()
}

fn row_at(days_ago: i64, pain: Option<i64>) -> SetRow {
    SetRow {
        session_id: format!("s{days_ago}"),
        date: now() - Duration::days(days_ago),
        session_type: SessionKind::Rehab,
        exercise_id: "ex_squat".to_string(),
        set_number: 1,
        reps: Some(10),
        weight_kg: None,
        duration_seconds: None,
        pain_level: pain,
        notes: None,
    }
}

#[test]
fn empty_rows_give_no_data() {
    let t = pain_trend(&[], now(), 7, 0.5);
    assert_eq!(t.trend, Trend::NoData);
    assert!(t.recent_avg.is_none());
    assert!(t.previous_avg.is_none());
}

#[test]
fn pain_only_outside_both_windows_gives_no_data() {
    // eldre enn 14 dager: ignoreres helt
    let rows = vec![row_at(20, Some(8)), row_at(30, Some(9))];
    let t = pain_trend(&rows, now(), 7, 0.5);
    assert_eq!(t.trend, Trend::NoData);
    assert!(t.recent_avg.is_none());
    assert!(t.previous_avg.is_none());
}

#[test]
fn rows_without_pain_level_do_not_count() {
    let rows = vec![row_at(2, None), row_at(10, None)];
    let t = pain_trend(&rows, now(), 7, 0.5);
    assert_eq!(t.trend, Trend::NoData);
}

#[test]
fn recent_only_is_stable() {
    let rows = vec![row_at(2, Some(4)), row_at(3, Some(5))];
    let t = pain_trend(&rows, now(), 7, 0.5);
    assert_eq!(t.trend, Trend::Stable);
    assert_eq!(t.recent_avg, Some(4.5));
    assert!(t.previous_avg.is_none());
}

#[test]
fn previous_only_is_no_data() {
    let rows = vec![row_at(10, Some(5))];
    let t = pain_trend(&rows, now(), 7, 0.5);
    assert_eq!(t.trend, Trend::NoData);
    assert!(t.recent_avg.is_none());
    assert_eq!(t.previous_avg, Some(5.0));
}

#[test]
fn small_diff_is_stable_regardless_of_sign() {
    // |diff| < 0.5 → stabil, begge retninger
    // recent 5.25 vs previous 5.0 (diff +0.25)
    let up = vec![
        row_at(2, Some(5)),
        row_at(3, Some(5)),
        row_at(4, Some(5)),
        row_at(5, Some(6)),
        row_at(10, Some(5)),
    ];
    assert_eq!(pain_trend(&up, now(), 7, 0.5).trend, Trend::Stable);

    // recent 4.75 vs previous 5.0 (diff -0.25)
    let down = vec![
        row_at(2, Some(5)),
        row_at(3, Some(5)),
        row_at(4, Some(4)),
        row_at(5, Some(5)),
        row_at(10, Some(5)),
    ];
    let t = pain_trend(&down, now(), 7, 0.5);
    assert!((t.recent_avg.unwrap() - t.previous_avg.unwrap()).abs() < 0.5);
    assert_eq!(t.trend, Trend::Stable);
}

#[test]
fn lower_recent_pain_is_improving() {
    let rows = vec![row_at(2, Some(3)), row_at(10, Some(6))];
    let t = pain_trend(&rows, now(), 7, 0.5);
    assert_eq!(t.trend, Trend::Improving);
    assert_eq!(t.recent_avg, Some(3.0));
    assert_eq!(t.previous_avg, Some(6.0));
}

#[test]
fn higher_recent_pain_is_worsening() {
    let rows = vec![row_at(2, Some(7)), row_at(10, Some(4))];
    let t = pain_trend(&rows, now(), 7, 0.5);
    assert_eq!(t.trend, Trend::Worsening);
}

#[test]
fn diff_exactly_at_band_is_not_stable() {
    // |0.5| < 0.5 er usann → klassifiseres på fortegn
    let rows = vec![
        row_at(2, Some(5)),
        row_at(3, Some(6)),
        row_at(10, Some(5)),
    ];
    let t = pain_trend(&rows, now(), 7, 0.5);
    assert_eq!(t.recent_avg, Some(5.5));
    assert_eq!(t.previous_avg, Some(5.0));
    assert_eq!(t.trend, Trend::Worsening);
}

#[test]
fn zero_mean_counts_as_data() {
    // snitt 0.0 i siste vindu er ekte data, ikke «mangler»
    let rows = vec![row_at(2, Some(0)), row_at(3, Some(0)), row_at(10, Some(5))];
    let t = pain_trend(&rows, now(), 7, 0.5);
    assert_eq!(t.recent_avg, Some(0.0));
    assert_eq!(t.trend, Trend::Improving);
}

#[test]
fn means_are_full_precision() {
    // avrunding er presentasjonslaget sitt ansvar
    let rows = vec![row_at(2, Some(1)), row_at(3, Some(2)), row_at(4, Some(2))];
    let t = pain_trend(&rows, now(), 7, 0.5);
    assert!((t.recent_avg.unwrap() - 5.0 / 3.0).abs() < 1e-12);
}
