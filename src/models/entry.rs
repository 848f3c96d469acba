use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Serialize, Serializer};

/// Calendar date of an entry.
///
/// Rows read from disk may carry date text that does not parse; such values
/// are kept verbatim and written back unchanged on the next rewrite, they
/// are never dropped or replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryDate {
    Day(NaiveDate),
    Raw(String),
}

impl EntryDate {
    pub fn parse(field: &str) -> Self {
        match NaiveDate::parse_from_str(field.trim(), "%Y-%m-%d") {
            Ok(d) => EntryDate::Day(d),
            Err(_) => EntryDate::Raw(field.to_string()),
        }
    }

    pub fn as_day(&self) -> Option<NaiveDate> {
        match self {
            EntryDate::Day(d) => Some(*d),
            EntryDate::Raw(_) => None,
        }
    }

    /// The text written to the "Date" column.
    pub fn to_field(&self) -> String {
        match self {
            EntryDate::Day(d) => d.format("%Y-%m-%d").to_string(),
            EntryDate::Raw(s) => s.clone(),
        }
    }
}

impl Serialize for EntryDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_field())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub date: EntryDate, // ⇔ "Date" column ("YYYY-MM-DD")
    pub time: NaiveTime, // ⇔ "Time" column ("HH:MM:SS")
    pub amount_ml: u32,  // ⇔ "Amount (ml)" column
}

impl Entry {
    /// Build the entry for an intake logged at `at`.
    /// The sub-second part of the instant is dropped so the entry compares
    /// equal after a round trip through the log file.
    pub fn at(at: NaiveDateTime, amount_ml: u32) -> Self {
        Self {
            date: EntryDate::Day(at.date()),
            time: at.time().with_nanosecond(0).unwrap_or(at.time()),
            amount_ml,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.to_field()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }

    /// True when the entry belongs to the given calendar day.
    /// Raw (unparsable) dates never match.
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.date.as_day() == Some(day)
    }
}
