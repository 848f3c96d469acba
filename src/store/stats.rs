//! Pure aggregation helpers over a loaded entry sequence.

use crate::models::day_total::DayTotal;
use crate::models::entry::Entry;
use crate::utils::date::trailing_days;
use chrono::NaiveDate;

/// Total intake logged on `day`. 0 when nothing matches.
pub fn daily_total(entries: &[Entry], day: NaiveDate) -> u32 {
    entries
        .iter()
        .filter(|e| e.is_on(day))
        .map(|e| e.amount_ml)
        .sum()
}

/// Daily totals for the `days` consecutive dates ending at `reference`
/// (inclusive), oldest first.
///
/// Days with no intake appear with a 0 total, so the result always has
/// exactly `days` elements with no gaps.
pub fn history(entries: &[Entry], days: usize, reference: NaiveDate) -> Vec<DayTotal> {
    trailing_days(days, reference)
        .into_iter()
        .map(|date| DayTotal {
            date,
            total_ml: daily_total(entries, date),
        })
        .collect()
}
