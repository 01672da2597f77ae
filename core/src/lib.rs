pub mod aggregate;
pub mod analyze_history;
pub mod cli;
pub mod errors;
pub mod metrics;
pub mod storage;
pub mod streak;
pub mod trend;
pub mod types;

pub use analyze_history::{analyze_history, HistoryInputs};
pub use errors::{validate_rows, AnalyticsError};
pub use storage::{load_cfg, save_cfg};
pub use types::{
    AnalyzerCfg, DayAggregate, HistoryMeta, PainTrend, ProgressReport, SessionKind,
    SessionSummary, SetRow, Trend,
};

use metrics::METRICS;

fn from_json<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T, AnalyticsError> {
    let mut de = serde_json::Deserializer::from_str(raw);
    // serde_path_to_error gir feltsti i feilmeldingen, ikke bare linje/kolonne
    serde_path_to_error::deserialize(&mut de).map_err(|e| AnalyticsError::Json(e.to_string()))
}

/// JSON-fasade: rader + meta (+ ev. konfig) inn som JSON-strenger,
/// ferdig serialisert `ProgressReport` ut. Serialisering av selve
/// datamodellen er ellers kallerens ansvar.
pub fn analyze_history_json(
    rows_json: &str,
    meta_json: &str,
    cfg_json: Option<&str>,
) -> Result<String, AnalyticsError> {
    let rows: Vec<SetRow> = from_json(rows_json)?;
    let meta: HistoryMeta = from_json(meta_json)?;
    let cfg: AnalyzerCfg = match cfg_json {
        Some(raw) => from_json(raw)?,
        None => AnalyzerCfg::default(),
    };

    if let Err(e) = validate_rows(&rows) {
        METRICS.invalid_rows_total.inc();
        log::warn!("historikk avvist i validering: {e}");
        return Err(e);
    }
    if rows.is_empty() {
        METRICS.empty_history_total.inc();
    }

    let report = analyze_history(HistoryInputs {
        rows: &rows,
        meta: &meta,
        cfg: &cfg,
    });
    METRICS.analyses_total.inc();
    log::debug!(
        "analyse ferdig for {}: {} økter, streak {}",
        report.user_id,
        report.total_sessions,
        report.streak
    );

    serde_json::to_string(&report).map_err(|e| AnalyticsError::Json(e.to_string()))
}
