pub mod summary_service;

pub use summary_service::{DayHistory, DaySummary, SummaryService};
