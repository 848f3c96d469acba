use chrono::NaiveDate;

/// One day of the trailing history window: a calendar date paired with the
/// total intake logged on it (0 when nothing was logged).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub total_ml: u32,
}
