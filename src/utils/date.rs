use chrono::{Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// The `n` consecutive dates ending at `reference` (inclusive), oldest first.
pub fn trailing_days(n: usize, reference: NaiveDate) -> Vec<NaiveDate> {
    (0..n)
        .rev()
        .map(|back| reference - Duration::days(back as i64))
        .collect()
}
