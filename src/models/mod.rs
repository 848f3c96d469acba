pub mod day_total;
pub mod entry;
