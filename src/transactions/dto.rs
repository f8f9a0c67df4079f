use serde::{Deserialize, Serialize};

use super::repo_types::Transaction;

#[derive(Debug, Default, Deserialize)]
pub struct AddTransactionRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default, rename = "userId")]
    pub user_id_alt: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub amount: Option<AmountInput>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Forms post amounts as strings; API clients send numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    pub fn value(&self) -> Option<f64> {
        match self {
            AmountInput::Number(n) => Some(*n),
            AmountInput::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddTransactionResponse {
    pub message: &'static str,
    pub data: Transaction,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub income: f64,
    pub expense: f64,
    pub savings: f64,
    pub expense_pct: f64,
    pub savings_pct: f64,
    pub tx_count: usize,
}
