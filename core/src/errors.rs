use thiserror::Error;

use crate::types::SetRow;

/// Feiltaksonomien for analysemotoren. Validering skjer ved JSON-fasaden;
/// de rene funksjonene feiler aldri på manglende valgfrie felter.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("invalid_pain_level: session {session_id} has pain_level {value} (must be 0–10)")]
    InvalidPainLevel { session_id: String, value: i64 },

    #[error("non_positive_reps: session {session_id} has reps {value} (must be > 0)")]
    NonPositiveReps { session_id: String, value: i64 },

    #[error("json: {0}")]
    Json(String),
}

/// Sjekk invariantene fra datamodellen: pain_level i [0,10], reps > 0.
/// Første brudd vinner.
pub fn validate_rows(rows: &[SetRow]) -> Result<(), AnalyticsError> {
    for r in rows {
        if let Some(p) = r.pain_level {
            if !(0..=10).contains(&p) {
                return Err(AnalyticsError::InvalidPainLevel {
                    session_id: r.session_id.clone(),
                    value: p,
                });
            }
        }
        if let Some(reps) = r.reps {
            if reps <= 0 {
                return Err(AnalyticsError::NonPositiveReps {
                    session_id: r.session_id.clone(),
                    value: reps,
                });
            }
        }
    }
    Ok(())
}
