use chrono::{Duration, NaiveDate};

/// Aktiv streak: antall sammenhengende kalenderdager med minst én økt,
/// forankret i dag eller i går.
///
/// `dates_desc` må være distinkte datoer sortert synkende. En manglende
/// «i dag» nuller ikke streaken så lenge i går er logget; alle andre hull
/// stopper tellingen umiddelbart. Dette er den aktive streaken, ikke den
/// lengste i historikken.
pub fn current_streak(dates_desc: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut streak = 0u32;
    let mut anchor = today;

    for (i, &d) in dates_desc.iter().enumerate() {
        let expected = anchor - Duration::days(i as i64);
        if d == expected {
            streak += 1;
        } else if i == 0 && d == today - Duration::days(1) {
            // I dag er ikke logget ennå, men i går var – flytt ankeret én dag bak.
            streak += 1;
            anchor = anchor - Duration::days(1);
        } else {
            break;
        }
    }

    streak
}
