use crate::aggregate::{aggregate_by_day, session_dates, session_summaries, total_sessions};
use crate::streak::current_streak;
use crate::trend::pain_trend;
use crate::types::{AnalyzerCfg, HistoryMeta, ProgressReport, SetRow};

/// Input til én analyse. Alt injiseres – ingen klokke, ingen I/O.
#[derive(Debug, Clone)]
pub struct HistoryInputs<'a> {
    pub rows: &'a [SetRow],
    pub meta: &'a HistoryMeta,
    pub cfg: &'a AnalyzerCfg,
}

/// Ren, deterministisk analyse av hele historikken.
///
/// Tom input er ikke en feil: trend blir no_data, streak 0, serien tom.
pub fn analyze_history(inputs: HistoryInputs) -> ProgressReport {
    let HistoryInputs { rows, meta, cfg } = inputs;
    let now = meta.generated_at;

    let trend = pain_trend(rows, now, cfg.trend_window_days(), cfg.stable_band());

    let dates = session_dates(rows);
    let streak = current_streak(&dates, now.date_naive());

    let daily = aggregate_by_day(rows);

    let mut summaries = session_summaries(rows);
    let last_session = summaries.first().cloned();
    summaries.truncate(cfg.recent_limit());

    ProgressReport {
        user_id: meta.user_id.clone(),
        generated_at: now,
        pain_trend: trend,
        streak,
        total_sessions: total_sessions(rows),
        daily,
        last_session,
        has_data: !summaries.is_empty(),
        recent_sessions: summaries,
    }
}
