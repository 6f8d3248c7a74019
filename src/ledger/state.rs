use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// The durable ledger record, one per installation.
///
/// Every field carries its own serde default so a record written by an older
/// version loads field-by-field instead of failing outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Amount added to the balance once per calendar day.
    #[serde(default)]
    pub daily_budget: f64,
    /// Signed running balance. Never clamped; overspending is permitted.
    #[serde(default)]
    pub current_balance: f64,
    /// Append-only expense log, insertion order preserved.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// Calendar date of the most recent accrual application.
    #[serde(default = "today_local")]
    pub last_date: NaiveDate,
    /// Balance snapshot taken on every budget change. Written for on-disk
    /// compatibility; no present query reads it.
    #[serde(default)]
    pub last_balance: f64,
}

impl LedgerState {
    /// Fresh zero-valued state anchored to the given calendar day.
    pub fn new(last_date: NaiveDate) -> Self {
        Self {
            daily_budget: 0.0,
            current_balance: 0.0,
            transactions: Vec::new(),
            last_date,
            last_balance: 0.0,
        }
    }

    /// Applies catch-up accrual for every calendar day elapsed since
    /// `last_date`. Returns whether anything changed.
    ///
    /// Same-day calls are no-ops, and so is a clock that moved backward:
    /// `last_date` stays monotonically non-decreasing.
    pub fn accrue_through(&mut self, today: NaiveDate) -> bool {
        if today <= self.last_date {
            return false;
        }
        let days_passed = (today - self.last_date).num_days();
        self.current_balance += self.daily_budget * days_passed as f64;
        self.last_date = today;
        true
    }

    /// Changes the daily rate and reconciles the balance for the current day.
    ///
    /// `amount` is accepted as-is, zero and negative included; validation
    /// belongs to the caller.
    pub fn set_daily_budget(&mut self, amount: f64, today: NaiveDate) {
        let old_budget = self.daily_budget;
        if self.last_date != today {
            // Catch-up had not run for today yet; accrue the missed days at
            // the old rate, then treat today as freshly started on the new one.
            self.accrue_through(today);
            self.current_balance += amount;
        } else if old_budget != 0.0 {
            // Same-day rate edit corrects today's number, it does not backdate.
            self.current_balance += amount - old_budget;
        } else if self.current_balance == 0.0 && self.transactions.is_empty() {
            // Very first budget ever set: bootstrap today's allowance.
            self.current_balance = amount;
        }
        self.daily_budget = amount;
        self.last_balance = self.current_balance;
    }

    /// Subtracts `amount` from the balance and appends the expense, stamped
    /// with the supplied device-local timestamp. The balance may go negative.
    pub fn record_expense(
        &mut self,
        amount: f64,
        description: impl Into<String>,
        at: NaiveDateTime,
    ) {
        self.current_balance -= amount;
        self.transactions.push(Transaction::new(at, amount, description));
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

impl Default for LedgerState {
    fn default() -> Self {
        Self::new(today_local())
    }
}

fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
