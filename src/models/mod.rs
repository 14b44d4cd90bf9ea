pub mod day_summary;
pub mod entry;

pub use day_summary::DaySummary;
pub use entry::{Break, Entry, EntryStatus, EntryViolation};
