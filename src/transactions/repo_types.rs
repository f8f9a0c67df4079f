use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

pub const DEFAULT_CATEGORY: &str = "Other";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    /// Case-insensitive; anything else is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "income" => Some(TxKind::Income),
            "expense" => Some(TxKind::Expense),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct TransactionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: Date,
    pub amount: f64,
    pub kind: String,
    pub category: Option<String>,
    pub note: Option<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub category: Option<String>,
    pub note: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<TransactionRow> for Transaction {
    fn from(r: TransactionRow) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            date: r.date,
            amount: r.amount,
            // rows written by other clients may carry odd types; only "income" counts as income
            kind: match TxKind::parse(&r.kind) {
                Some(TxKind::Income) => TxKind::Income,
                _ => TxKind::Expense,
            },
            category: r.category,
            note: r.note,
            created_at: r.created_at,
        }
    }
}

/// A validated transaction ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub user_id: Uuid,
    pub date: Date,
    pub amount: f64,
    pub kind: TxKind,
    pub category: String,
    pub note: Option<String>,
}
