//! Derived read-only views over the transaction log.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::ledger::{LedgerState, Transaction};
use crate::locale::Locale;

/// A day's transactions paired with the sum of their amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub transactions: Vec<Transaction>,
    pub total: f64,
}

/// One rendered history entry: a day, its localized label, and the
/// transactions that survived the active filter.
#[derive(Debug, Clone, PartialEq)]
pub struct DayHistory {
    pub day: NaiveDate,
    pub label: String,
    pub transactions: Vec<Transaction>,
    pub total: f64,
}

/// Stateless view builders that operate over [`LedgerState`] snapshots.
pub struct SummaryService;

impl SummaryService {
    /// Partitions the transaction log by calendar day.
    ///
    /// Insertion order is preserved within each day; the key order of the
    /// returned map carries no display contract (sorting is the caller's job).
    pub fn transactions_by_date(state: &LedgerState) -> BTreeMap<NaiveDate, Vec<Transaction>> {
        let mut grouped: BTreeMap<NaiveDate, Vec<Transaction>> = BTreeMap::new();
        for txn in &state.transactions {
            grouped.entry(txn.day()).or_default().push(txn.clone());
        }
        grouped
    }

    /// Pairs each day's transactions with their expense total.
    pub fn daily_summary(state: &LedgerState) -> BTreeMap<NaiveDate, DaySummary> {
        Self::transactions_by_date(state)
            .into_iter()
            .map(|(day, transactions)| {
                let total = transactions.iter().map(|t| t.amount).sum();
                (day, DaySummary { transactions, total })
            })
            .collect()
    }

    /// Builds the history view: days sorted most recent first, filtered by a
    /// free-text query.
    ///
    /// A day whose raw `YYYY-MM-DD` string or localized label contains the
    /// query (case-insensitively) shows all of its transactions; otherwise
    /// only transactions whose description matches survive, and days left
    /// with nothing are dropped. Totals follow the surviving set. An empty
    /// query yields every day unfiltered.
    pub fn history(state: &LedgerState, locale: &Locale, filter: &str) -> Vec<DayHistory> {
        let needle = filter.trim().to_lowercase();
        let mut days = Vec::new();
        for (day, transactions) in Self::transactions_by_date(state).into_iter().rev() {
            let label = locale.format_day(day);
            let surviving = if needle.is_empty() {
                transactions
            } else {
                let date_match = day.to_string().to_lowercase().contains(&needle)
                    || label.to_lowercase().contains(&needle);
                if date_match {
                    transactions
                } else {
                    let matched: Vec<Transaction> = transactions
                        .into_iter()
                        .filter(|t| t.description.to_lowercase().contains(&needle))
                        .collect();
                    if matched.is_empty() {
                        continue;
                    }
                    matched
                }
            };
            let total = surviving.iter().map(|t| t.amount).sum();
            days.push(DayHistory {
                day,
                label,
                transactions: surviving,
                total,
            });
        }
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn at(d: u32, h: u32) -> NaiveDateTime {
        day(d).and_hms_opt(h, 0, 0).unwrap()
    }

    fn sample_state() -> LedgerState {
        let mut state = LedgerState::new(day(4));
        state.record_expense(30.0, "lunch", at(1, 13));
        state.record_expense(12.5, "кофе", at(1, 16));
        state.record_expense(200.0, "groceries", at(3, 10));
        state.record_expense(7.0, "bus", at(4, 9));
        state
    }

    #[test]
    fn grouping_partitions_every_transaction_exactly_once() {
        let state = sample_state();
        let grouped = SummaryService::transactions_by_date(&state);
        let counted: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(counted, state.transaction_count());
        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped[&day(1)].len(), 2);
    }

    #[test]
    fn grouping_preserves_relative_order_within_a_day() {
        let state = sample_state();
        let grouped = SummaryService::transactions_by_date(&state);
        let descriptions: Vec<&str> = grouped[&day(1)]
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(descriptions, ["lunch", "кофе"]);
    }

    #[test]
    fn daily_summary_totals_each_day() {
        let state = sample_state();
        let summary = SummaryService::daily_summary(&state);
        assert_eq!(summary[&day(1)].total, 42.5);
        assert_eq!(summary[&day(3)].total, 200.0);
        assert_eq!(summary[&day(4)].total, 7.0);
    }

    #[test]
    fn history_sorts_days_most_recent_first() {
        let state = sample_state();
        let history = SummaryService::history(&state, &Locale::english(), "");
        let days: Vec<NaiveDate> = history.iter().map(|entry| entry.day).collect();
        assert_eq!(days, [day(4), day(3), day(1)]);
    }

    #[test]
    fn date_matching_filter_keeps_the_whole_day() {
        let state = sample_state();
        let history = SummaryService::history(&state, &Locale::english(), "2025-03-01");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].transactions.len(), 2);
        assert_eq!(history[0].total, 42.5);
    }

    #[test]
    fn localized_label_matches_the_filter() {
        let state = sample_state();
        let history = SummaryService::history(&state, &Locale::english(), "march");
        // Every day is in March, so the whole history survives.
        assert_eq!(history.len(), 3);
        let russian = SummaryService::history(&state, &Locale::russian(), "марта");
        assert_eq!(russian.len(), 3);
    }

    #[test]
    fn description_filter_narrows_within_days() {
        let state = sample_state();
        let history = SummaryService::history(&state, &Locale::english(), "КОФЕ");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].day, day(1));
        assert_eq!(history[0].transactions.len(), 1);
        assert_eq!(history[0].total, 12.5);
    }

    #[test]
    fn non_matching_days_are_dropped() {
        let state = sample_state();
        let history = SummaryService::history(&state, &Locale::english(), "bus");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].day, day(4));
    }

    #[test]
    fn unmatched_filter_yields_empty_history() {
        let state = sample_state();
        let history = SummaryService::history(&state, &Locale::english(), "никогда");
        assert!(history.is_empty());
    }

    #[test]
    fn whitespace_only_filter_counts_as_empty() {
        let state = sample_state();
        let history = SummaryService::history(&state, &Locale::english(), "   ");
        assert_eq!(history.len(), 3);
    }
}
