use crate::errors::AppResult;
use crate::models::entry::{Entry, EntryDate};
use crate::store::file::EntryStore;
use chrono::{NaiveDateTime, NaiveTime};
use csv::StringRecord;

/// Normalize one raw row into an Entry.
///
/// Bad fields never fail a load: an unparsable date is kept as raw text,
/// an unparsable time becomes midnight, an unparsable or missing amount
/// becomes 0.
pub fn map_record(rec: &StringRecord) -> Entry {
    let date = EntryDate::parse(rec.get(0).unwrap_or(""));

    let time = rec
        .get(1)
        .and_then(|t| NaiveTime::parse_from_str(t.trim(), "%H:%M:%S").ok())
        .unwrap_or(NaiveTime::MIN);

    let amount_ml = rec
        .get(2)
        .and_then(|a| a.trim().parse::<u32>().ok())
        .unwrap_or(0);

    Entry {
        date,
        time,
        amount_ml,
    }
}

/// Load the full log in row order. The position of an entry in the returned
/// sequence is its identity for `delete_positions`.
///
/// Side-effect-free: a missing file loads as an empty sequence.
pub fn load_entries(store: &EntryStore) -> AppResult<Vec<Entry>> {
    if !store.exists() {
        return Ok(Vec::new());
    }

    let (_, rows) = store.read_raw()?;
    Ok(rows.iter().map(map_record).collect())
}

/// Append one intake logged at `at` and persist the whole log.
/// After return, a load yields the previous sequence plus this entry.
pub fn append_entry(store: &EntryStore, amount_ml: u32, at: NaiveDateTime) -> AppResult<Entry> {
    let mut entries = load_entries(store)?;

    let entry = Entry::at(at, amount_ml);
    entries.push(entry.clone());

    persist(store, &entries)?;
    Ok(entry)
}

/// Remove the given zero-based positions and persist the compacted log,
/// keeping the survivors in their original relative order.
///
/// Positions that match no row are ignored; the store does not second-guess
/// the caller's indices. Returns whether any row was actually removed.
pub fn delete_positions(store: &EntryStore, positions: &[usize]) -> AppResult<bool> {
    if positions.is_empty() {
        return Ok(false);
    }

    let entries = load_entries(store)?;
    let before = entries.len();

    let kept: Vec<Entry> = entries
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !positions.contains(i))
        .map(|(_, e)| e)
        .collect();

    if kept.len() == before {
        return Ok(false);
    }

    persist(store, &kept)?;
    Ok(true)
}

/// Rewrite the whole file from the in-memory sequence.
pub fn persist(store: &EntryStore, entries: &[Entry]) -> AppResult<()> {
    let rows: Vec<[String; 3]> = entries
        .iter()
        .map(|e| [e.date_str(), e.time_str(), e.amount_ml.to_string()])
        .collect();

    store.write_rows(&rows)
}
