use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::store::file::HEADERS;
use csv::Writer;

/// Write the normalized entries to a CSV file in the log's own layout.
pub fn write_csv(path: &str, entries: &[Entry]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(HEADERS)?;

    for e in entries {
        wtr.write_record([e.date_str(), e.time_str(), e.amount_ml.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
