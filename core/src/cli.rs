use anyhow::Context;

use crate::analyze_history::{analyze_history, HistoryInputs};
use crate::errors::validate_rows;
use crate::storage::load_cfg;
use crate::types::{HistoryMeta, ProgressReport, SetRow, Trend};

/// Avrunding til én desimal skjer her – motoren leverer full presisjon.
fn fmt_avg(avg: Option<f64>) -> String {
    match avg {
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}

pub fn print_progress_report(report: &ProgressReport) {
    println!("--- Progress Report ({}) ---", report.user_id);

    let trend_label = match report.pain_trend.trend {
        Trend::Improving => "bedring",
        Trend::Worsening => "forverring",
        Trend::Stable => "stabil",
        Trend::NoData => "ingen data",
    };
    println!(
        "Smertetrend: {} (siste 7d: {}, forrige 7d: {})",
        trend_label,
        fmt_avg(report.pain_trend.recent_avg),
        fmt_avg(report.pain_trend.previous_avg)
    );
    println!("Streak: {} dager", report.streak);
    println!("Økter totalt: {}", report.total_sessions);

    if let Some(last) = &report.last_session {
        println!(
            "Siste økt: {} ({:?}, {} øvelser, {} sett)",
            last.date.date_naive(),
            last.session_type,
            last.exercise_count,
            last.set_count
        );
    }

    for day in &report.daily {
        println!(
            "  {}  smerte={}  økter={}  reps={}  volum={:.1}",
            day.date,
            fmt_avg(day.avg_pain),
            day.session_count,
            day.total_reps,
            day.total_weight
        );
    }
}

/// Les rader + meta (og ev. konfig) fra disk, analyser og skriv rapporten.
pub fn run_report(rows_path: &str, meta_path: &str, cfg_path: Option<&str>) -> anyhow::Result<()> {
    let raw_rows = std::fs::read_to_string(rows_path)
        .with_context(|| format!("kunne ikke lese rader fra {rows_path}"))?;
    let rows: Vec<SetRow> =
        serde_json::from_str(&raw_rows).with_context(|| format!("ugyldig JSON i {rows_path}"))?;

    let raw_meta = std::fs::read_to_string(meta_path)
        .with_context(|| format!("kunne ikke lese meta fra {meta_path}"))?;
    let meta: HistoryMeta =
        serde_json::from_str(&raw_meta).with_context(|| format!("ugyldig JSON i {meta_path}"))?;

    let cfg = match cfg_path {
        Some(p) => load_cfg(p).map_err(|e| anyhow::anyhow!("konfig fra {p}: {e}"))?,
        None => Default::default(),
    };

    validate_rows(&rows)?;

    let report = analyze_history(HistoryInputs {
        rows: &rows,
        meta: &meta,
        cfg: &cfg,
    });
    print_progress_report(&report);
    Ok(())
}
