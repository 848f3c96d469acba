pub mod file;
pub mod initialize;
pub mod migrate;
pub mod queries;
pub mod stats;

pub use file::EntryStore;
