use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};

use crate::types::{DayAggregate, SessionKind, SessionSummary, SetRow};

#[derive(Debug, Default)]
struct DayAcc {
    sessions: HashSet<String>,
    pain_sum: f64,
    pain_n: u32,
    total_reps: i64,
    total_weight: f64,
}

/// Dagsaggregater for grafer, stigende på dato.
///
/// Null-felter ekskluderes fra aggregatene (aldri tolket som 0) – med
/// unntak av manglende vekt, som teller som 0 i volumproduktet.
pub fn aggregate_by_day(rows: &[SetRow]) -> Vec<DayAggregate> {
    let mut days: BTreeMap<NaiveDate, DayAcc> = BTreeMap::new();

    for r in rows {
        let acc = days.entry(r.date.date_naive()).or_default();
        acc.sessions.insert(r.session_id.clone());

        if let Some(p) = r.pain_level {
            acc.pain_sum += p as f64;
            acc.pain_n += 1;
        }
        if let Some(reps) = r.reps {
            acc.total_reps += reps;
            acc.total_weight += reps as f64 * r.weight_kg.unwrap_or(0.0);
        }
    }

    // BTreeMap gir stigende dato-rekkefølge gratis
    days.into_iter()
        .map(|(date, acc)| DayAggregate {
            date,
            avg_pain: if acc.pain_n == 0 {
                None
            } else {
                Some(acc.pain_sum / f64::from(acc.pain_n))
            },
            session_count: acc.sessions.len() as u32,
            total_reps: acc.total_reps,
            total_weight: acc.total_weight,
        })
        .collect()
}

/// Distinkte øktdatoer, synkende – input til streak-beregningen.
pub fn session_dates(rows: &[SetRow]) -> Vec<NaiveDate> {
    let distinct: BTreeSet<NaiveDate> = rows.iter().map(|r| r.date.date_naive()).collect();
    distinct.into_iter().rev().collect()
}

/// Antall distinkte økter i hele historikken.
pub fn total_sessions(rows: &[SetRow]) -> u32 {
    let distinct: HashSet<&str> = rows.iter().map(|r| r.session_id.as_str()).collect();
    distinct.len() as u32
}

/// Økt-sammendrag (distinkte øvelser + antall sett per økt), synkende på dato.
pub fn session_summaries(rows: &[SetRow]) -> Vec<SessionSummary> {
    struct SessAcc {
        date: DateTime<Utc>,
        session_type: SessionKind,
        exercises: HashSet<String>,
        set_count: u32,
    }

    let mut sessions: HashMap<String, SessAcc> = HashMap::new();

    for r in rows {
        let acc = sessions.entry(r.session_id.clone()).or_insert_with(|| SessAcc {
            date: r.date,
            session_type: r.session_type,
            exercises: HashSet::new(),
            set_count: 0,
        });
        acc.exercises.insert(r.exercise_id.clone());
        acc.set_count += 1;
    }

    let mut out: Vec<SessionSummary> = sessions
        .into_iter()
        .map(|(id, acc)| SessionSummary {
            id,
            date: acc.date,
            session_type: acc.session_type,
            exercise_count: acc.exercises.len() as u32,
            set_count: acc.set_count,
        })
        .collect();

    // synkende dato; id som tie-break for deterministisk rekkefølge
    out.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
    out
}
