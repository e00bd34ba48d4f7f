pub mod app;
pub mod shifts;
pub mod time_entries;
