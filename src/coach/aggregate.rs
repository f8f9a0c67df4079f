//! Buckets a window of transactions and measures it against the 60:20:20 split.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::money::money;
use crate::transactions::{Transaction, TxKind};

pub const ESSENTIALS_SHARE: f64 = 0.60;
pub const SAVINGS_SHARE: f64 = 0.20;
pub const LIFESTYLE_SHARE: f64 = 0.20;

pub const TOP_CATEGORY_LIMIT: usize = 6;

/// Category keywords counted as essentials; everything else is lifestyle.
const ESSENTIALS: &[&str] = &[
    "rent",
    "bills",
    "groceries",
    "food",
    "utilities",
    "transport",
    "medicine",
    "emi",
    "loan",
    "school",
    "education",
    "health",
    "insurance",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Essentials,
    Lifestyle,
}

pub fn category_key(category: &str) -> String {
    category.trim().to_lowercase()
}

/// Unset or blank categories count as essentials.
pub fn classify(category: Option<&str>) -> Bucket {
    let key = match category.map(category_key) {
        Some(k) if !k.is_empty() => k,
        _ => return Bucket::Essentials,
    };
    if ESSENTIALS.contains(&key.as_str()) {
        Bucket::Essentials
    } else {
        Bucket::Lifestyle
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregate {
    pub total_income: f64,
    pub total_expense: f64,
    /// Expense totals keyed by lower-cased, trimmed category.
    pub by_category: BTreeMap<String, CategoryTotal>,
    pub essentials_actual: f64,
    pub lifestyle_actual: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deviations {
    pub total_income: f64,
    pub total_expense: f64,
    pub savings: f64,
    pub target_essentials: f64,
    pub target_savings: f64,
    pub target_lifestyle: f64,
    pub essentials_actual: f64,
    pub lifestyle_actual: f64,
    /// Positive means overspend.
    pub essentials_diff: f64,
    /// Negative means shortfall.
    pub savings_diff: f64,
    pub lifestyle_diff: f64,
}

/// Every running sum is rounded to cents as it grows.
pub fn aggregate(txs: &[Transaction]) -> Aggregate {
    let mut agg = Aggregate::default();

    for t in txs {
        let amt = money(t.amount);
        if t.kind == TxKind::Income {
            agg.total_income = money(agg.total_income + amt);
            continue;
        }

        agg.total_expense = money(agg.total_expense + amt);

        let key = t
            .category
            .as_deref()
            .map(category_key)
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| category_key(crate::transactions::DEFAULT_CATEGORY));
        let entry = agg
            .by_category
            .entry(key.clone())
            .or_insert_with(|| CategoryTotal { category: key, amount: 0.0, count: 0 });
        entry.amount = money(entry.amount + amt);
        entry.count += 1;

        match classify(t.category.as_deref()) {
            Bucket::Essentials => agg.essentials_actual = money(agg.essentials_actual + amt),
            Bucket::Lifestyle => agg.lifestyle_actual = money(agg.lifestyle_actual + amt),
        }
    }

    agg
}

impl Aggregate {
    pub fn savings(&self) -> f64 {
        money(self.total_income - self.total_expense)
    }

    pub fn deviations(&self) -> Deviations {
        let savings = self.savings();
        let target_essentials = money(self.total_income * ESSENTIALS_SHARE);
        let target_savings = money(self.total_income * SAVINGS_SHARE);
        let target_lifestyle = money(self.total_income * LIFESTYLE_SHARE);

        Deviations {
            total_income: self.total_income,
            total_expense: self.total_expense,
            savings,
            target_essentials,
            target_savings,
            target_lifestyle,
            essentials_actual: self.essentials_actual,
            lifestyle_actual: self.lifestyle_actual,
            essentials_diff: money(self.essentials_actual - target_essentials),
            savings_diff: money(savings - target_savings),
            lifestyle_diff: money(self.lifestyle_actual - target_lifestyle),
        }
    }

    /// Highest spend first; equal amounts keep category name order.
    pub fn top_categories(&self, limit: usize) -> Vec<CategoryTotal> {
        let mut all: Vec<CategoryTotal> = self.by_category.values().cloned().collect();
        all.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        all.truncate(limit);
        all
    }
}
