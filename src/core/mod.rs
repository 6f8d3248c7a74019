//! Engine facade and derived-view services over the ledger record.

pub mod manager;
pub mod services;

pub use manager::BudgetManager;
pub use services::{DayHistory, DaySummary, SummaryService};
