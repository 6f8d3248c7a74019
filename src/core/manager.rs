use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::core::services::{DayHistory, DaySummary, SummaryService};
use crate::errors::LedgerError;
use crate::ledger::{LedgerState, Transaction};
use crate::locale::Locale;
use crate::storage::StorageBackend;
use crate::time::Clock;

/// Facade that owns the ledger state and coordinates accrual, mutations, and
/// write-through persistence.
///
/// Construction is the only way to obtain a manager, and it always runs
/// catch-up accrual first; every mutating call is followed by a full
/// synchronous persist. Callers share one explicitly owned instance, there is
/// no ambient singleton.
pub struct BudgetManager {
    state: LedgerState,
    storage: Box<dyn StorageBackend>,
    clock: Box<dyn Clock>,
}

impl BudgetManager {
    /// Loads the persisted record and applies catch-up accrual for every
    /// calendar day elapsed since the last recorded date, persisting only if
    /// the accrual fired.
    pub fn open(
        storage: Box<dyn StorageBackend>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, LedgerError> {
        let mut state = storage.load()?;
        let today = clock.today();
        if state.accrue_through(today) {
            storage.save(&state)?;
            tracing::info!(
                %today,
                balance = state.current_balance,
                "applied catch-up accrual"
            );
        }
        Ok(Self {
            state,
            storage,
            clock,
        })
    }

    /// Changes the daily accrual rate, reconciling today's balance. The
    /// amount is accepted as-is; validation belongs to the caller.
    pub fn set_daily_budget(&mut self, amount: f64) -> Result<(), LedgerError> {
        let today = self.clock.today();
        self.state.set_daily_budget(amount, today);
        self.storage.save(&self.state)?;
        tracing::debug!(amount, balance = self.state.current_balance, "daily budget set");
        Ok(())
    }

    /// Logs an expense stamped with the current device time. The caller must
    /// pre-validate `amount > 0`; the engine does not reject non-positive
    /// amounts, and the balance may go negative.
    pub fn add_expense(&mut self, amount: f64, description: &str) -> Result<(), LedgerError> {
        self.state.record_expense(amount, description, self.clock.now());
        self.storage.save(&self.state)?;
        tracing::debug!(amount, balance = self.state.current_balance, "expense logged");
        Ok(())
    }

    pub fn balance(&self) -> f64 {
        self.state.current_balance
    }

    pub fn daily_budget(&self) -> f64 {
        self.state.daily_budget
    }

    /// The raw append-only expense log, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    /// Transactions partitioned by calendar day.
    pub fn transactions_by_date(&self) -> BTreeMap<NaiveDate, Vec<Transaction>> {
        SummaryService::transactions_by_date(&self.state)
    }

    /// Per-day transactions with their expense totals.
    pub fn daily_summary(&self) -> BTreeMap<NaiveDate, DaySummary> {
        SummaryService::daily_summary(&self.state)
    }

    /// Filtered history view, most recent day first.
    pub fn history(&self, locale: &Locale, filter: &str) -> Vec<DayHistory> {
        SummaryService::history(&self.state, locale, filter)
    }

    /// Read access to the underlying record.
    pub fn state(&self) -> &LedgerState {
        &self.state
    }
}
