use once_cell::sync::Lazy;
use prometheus::{IntCounter, Opts, Registry};

/// Prosess-tellere for analysemotoren. Registreres én gang på
/// default-registry og bumpes kun i JSON-fasaden – de rene
/// beregningsfunksjonene er uten sideeffekter.
pub struct Metrics {
    pub analyses_total: IntCounter,
    pub empty_history_total: IntCounter,
    pub invalid_rows_total: IntCounter,
}

impl Metrics {
    pub fn new(registry: &Registry) -> prometheus::Result<Self> {
        let analyses_total = IntCounter::with_opts(Opts::new(
            "rehablog_analyses_total",
            "Antall fullførte historikk-analyser",
        ))?;
        let empty_history_total = IntCounter::with_opts(Opts::new(
            "rehablog_empty_history_total",
            "Antall analyser med tom historikk",
        ))?;
        let invalid_rows_total = IntCounter::with_opts(Opts::new(
            "rehablog_invalid_rows_total",
            "Antall analyser avvist i validering",
        ))?;

        registry.register(Box::new(analyses_total.clone()))?;
        registry.register(Box::new(empty_history_total.clone()))?;
        registry.register(Box::new(invalid_rows_total.clone()))?;

        Ok(Self {
            analyses_total,
            empty_history_total,
            invalid_rows_total,
        })
    }
}

pub static METRICS: Lazy<Metrics> = Lazy::new(|| {
    Metrics::new(prometheus::default_registry()).expect("registrering av analytics-tellere")
});
