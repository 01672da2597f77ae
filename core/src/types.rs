use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Økt-type: rehab eller gym. Settes når økten logges, aldri endret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Rehab,
    Gym,
}

/// Én loggført serie (sett), ferdig joinet med økt-metadata av kalleren.
/// Valgfrie felter er None når de ikke ble logget – aldri 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRow {
    pub session_id: String,
    pub date: DateTime<Utc>, // økt-tidspunkt (UTC)
    pub session_type: SessionKind,
    pub exercise_id: String,
    pub set_number: u32, // tildelt av kaller, valideres ikke for hull/duplikater
    #[serde(default)]
    pub reps: Option<i64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub duration_seconds: Option<i64>,
    #[serde(default)]
    pub pain_level: Option<i64>, // 0–10
    #[serde(default)]
    pub notes: Option<String>,
}

/// Smertetrend-klassifisering over to vinduer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Worsening,
    Stable,
    NoData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainTrend {
    pub recent_avg: Option<f64>,   // siste vindu, full presisjon
    pub previous_avg: Option<f64>, // vinduet før
    pub trend: Trend,
}

/// Dagsaggregat for grafer. Kun dager med minst én rad dukker opp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAggregate {
    pub date: NaiveDate,
    pub avg_pain: Option<f64>, // snitt over rader med satt pain_level
    pub session_count: u32,    // distinkte økter den dagen
    pub total_reps: i64,
    pub total_weight: f64, // sum reps × (vekt eller 0)
}

/// Sammendrag av én økt – for «siste økt» og «nylige økter» på dashbordet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: String,
    pub date: DateTime<Utc>,
    pub session_type: SessionKind,
    pub exercise_count: u32, // distinkte øvelser
    pub set_count: u32,
}

/// Konfig med valgfrie felter og faste defaults (løses via accessors).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalyzerCfg {
    pub trend_window_days: Option<i64>, // typ 7
    pub stable_band: Option<f64>,       // typ 0.5
    pub recent_limit: Option<usize>,    // typ 5
}

impl AnalyzerCfg {
    pub fn trend_window_days(&self) -> i64 {
        self.trend_window_days.unwrap_or(7)
    }

    pub fn stable_band(&self) -> f64 {
        self.stable_band.unwrap_or(0.5)
    }

    pub fn recent_limit(&self) -> usize {
        self.recent_limit.unwrap_or(5)
    }
}

/// Metadata for én analyse. `generated_at` injiseres av kalleren –
/// motoren leser aldri systemklokka selv.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryMeta {
    pub user_id: String,
    pub generated_at: DateTime<Utc>,
}

/// Samlet rapport fra analysemotoren.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub user_id: String,
    pub generated_at: DateTime<Utc>,
    pub pain_trend: PainTrend,
    pub streak: u32,
    pub total_sessions: u32,
    pub daily: Vec<DayAggregate>, // stigende på dato
    pub last_session: Option<SessionSummary>,
    pub recent_sessions: Vec<SessionSummary>, // synkende på dato
    pub has_data: bool,
}
