use chrono::{DateTime, Duration, Utc};

use crate::types::{PainTrend, SetRow, Trend};

/// Løpende snitt over Some-verdier.
#[derive(Debug, Clone, Copy, Default)]
struct MeanAcc {
    sum: f64,
    n: u32,
}

impl MeanAcc {
    fn add(&mut self, x: f64) {
        self.sum += x;
        self.n += 1;
    }

    fn mean(&self) -> Option<f64> {
        if self.n == 0 {
            None
        } else {
            Some(self.sum / f64::from(self.n))
        }
    }
}

/// Smertetrend: siste vindu mot vinduet før.
///
/// Rader uten pain_level teller ikke; rader eldre enn 2×vindu ignoreres.
/// Snittene returneres urundet – avrunding er presentasjonens ansvar.
pub fn pain_trend(
    rows: &[SetRow],
    now: DateTime<Utc>,
    window_days: i64,
    stable_band: f64,
) -> PainTrend {
    let recent_cut = now - Duration::days(window_days);
    let lookback_cut = now - Duration::days(2 * window_days);

    let mut recent = MeanAcc::default();
    let mut previous = MeanAcc::default();

    for r in rows {
        let Some(p) = r.pain_level else { continue };
        if r.date >= recent_cut {
            recent.add(p as f64);
        } else if r.date >= lookback_cut {
            previous.add(p as f64);
        }
    }

    let recent_avg = recent.mean();
    let previous_avg = previous.mean();

    // NB: et snitt på 0.0 er data – «udefinert» betyr null kvalifiserende rader.
    let trend = match (recent_avg, previous_avg) {
        (Some(r), Some(p)) => {
            let diff = r - p;
            if diff.abs() < stable_band {
                Trend::Stable
            } else if diff < 0.0 {
                Trend::Improving // lavere smerte = bedring
            } else {
                Trend::Worsening
            }
        }
        (Some(_), None) => Trend::Stable,
        _ => Trend::NoData,
    };

    PainTrend {
        recent_avg,
        previous_avg,
        trend,
    }
}
