use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single logged expense. Immutable once appended to the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Full device-local timestamp of creation.
    #[serde(with = "timestamp_format")]
    pub date: NaiveDateTime,
    /// Positive magnitude of the expense, not the signed balance delta.
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn new(date: NaiveDateTime, amount: f64, description: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            description: description.into(),
            kind: TransactionKind::Expense,
        }
    }

    /// Calendar day the transaction belongs to, used as the grouping key.
    pub fn day(&self) -> chrono::NaiveDate {
        self.date.date()
    }
}

/// Kind tag carried on every transaction. The record anticipates other kinds,
/// but expenses are the only one written today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    Expense,
}

/// Serializes transaction timestamps as `YYYY-MM-DD HH:MM:SS.ffffff`.
/// Parsing tolerates a short or absent fractional part.
pub(crate) mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const WRITE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
    const READ_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(WRITE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, READ_FORMAT).map_err(serde::de::Error::custom)
    }
}
