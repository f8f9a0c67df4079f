use serde::Serialize;

use super::aggregate::{classify, Bucket, CategoryTotal, Deviations};
use crate::money::{money, weekly_step};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NudgeCategory {
    Spending,
    Savings,
    Info,
}

impl NudgeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            NudgeCategory::Spending => "spending",
            NudgeCategory::Savings => "savings",
            NudgeCategory::Info => "info",
        }
    }

    /// How the nudge is filed in the log; essentials overspend wins over a savings gap.
    pub fn for_deviations(d: &Deviations) -> Self {
        if d.essentials_diff > 0.0 {
            NudgeCategory::Spending
        } else if d.savings_diff < 0.0 {
            NudgeCategory::Savings
        } else {
            NudgeCategory::Info
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Advice {
    pub insights: Vec<String>,
    pub actions: Vec<String>,
    pub nudge: String,
    pub category: NudgeCategory,
}

struct Fmt<'a> {
    currency: &'a str,
}

impl Fmt<'_> {
    fn amt(&self, x: f64) -> String {
        format!("{}{}", self.currency, x)
    }
}

pub fn advise(d: &Deviations, top: &[CategoryTotal], currency: &str) -> Advice {
    let f = Fmt { currency };
    let mut insights = Vec::new();
    let mut actions = Vec::new();

    if d.total_income <= 0.0 {
        insights.push(
            "No income recorded in the last 30 days. Add income transactions for planning.".to_string(),
        );
        actions.push(
            "Add your income entries (amount + date + source) to allow the coach compute targets."
                .to_string(),
        );
    } else {
        if d.savings < d.target_savings {
            insights.push(format!(
                "Savings {} are below the 20% target ({}).",
                f.amt(d.savings),
                f.amt(d.target_savings)
            ));
            let gap = money(d.target_savings - d.savings);
            actions.push(format!(
                "Try saving an additional {} per week for the next 4 weeks.",
                f.amt(weekly_step(gap, 4.0) as f64)
            ));
        } else {
            insights.push(format!(
                "Good — savings {} meet or exceed the 20% target.",
                f.amt(d.savings)
            ));
        }

        if d.essentials_actual > d.target_essentials {
            let over = money(d.essentials_actual - d.target_essentials);
            insights.push(format!(
                "Essentials spending {} is {} above the 60% target ({}).",
                f.amt(d.essentials_actual),
                f.amt(over),
                f.amt(d.target_essentials)
            ));
            let biggest = top
                .iter()
                .find(|c| classify(Some(c.category.as_str())) == Bucket::Essentials)
                .or_else(|| top.first());
            match biggest {
                Some(c) => actions.push(format!(
                    "Reduce {} by about {} per week (small, consistent cuts).",
                    c.category,
                    f.amt(weekly_step(over, 3.0) as f64)
                )),
                None => actions.push(
                    "Reduce repeated essentials costs (transport, groceries) slightly this month."
                        .to_string(),
                ),
            }
        } else {
            insights.push(format!(
                "Essentials spending {} is within the 60% target.",
                f.amt(d.essentials_actual)
            ));
        }

        if d.lifestyle_actual > d.target_lifestyle {
            let over = money(d.lifestyle_actual - d.target_lifestyle);
            insights.push(format!(
                "Lifestyle spending {} is {} above the 20% target ({}).",
                f.amt(d.lifestyle_actual),
                f.amt(over),
                f.amt(d.target_lifestyle)
            ));
            actions.push(format!(
                "Cut discretionary spends (e.g., takeout) by ~{} per week.",
                f.amt(weekly_step(over, 2.0) as f64)
            ));
        } else {
            insights.push(format!(
                "Lifestyle spending {} is within the 20% target.",
                f.amt(d.lifestyle_actual)
            ));
        }
    }

    Advice {
        insights,
        actions,
        nudge: pick_nudge(d, &f),
        category: NudgeCategory::for_deviations(d),
    }
}

/// One message by fixed priority: no income, savings gap, essentials, lifestyle, healthy.
fn pick_nudge(d: &Deviations, f: &Fmt<'_>) -> String {
    if d.total_income <= 0.0 {
        return "Add income details so ArthaSathi can recommend a plan.".to_string();
    }
    if d.savings < d.target_savings {
        let gap = money((d.target_savings - d.savings).max(0.0));
        return format!(
            "You're {} short of the 20% savings target. Try saving {} per week.",
            f.amt(gap),
            f.amt(weekly_step(gap, 4.0) as f64)
        );
    }
    if d.essentials_actual > d.target_essentials {
        let over = money(d.essentials_actual - d.target_essentials);
        return format!(
            "Essentials overspend of {}. Try trimming groceries/transport by {} this week.",
            f.amt(over),
            f.amt(weekly_step(over, 3.0) as f64)
        );
    }
    if d.lifestyle_actual > d.target_lifestyle {
        let over = money(d.lifestyle_actual - d.target_lifestyle);
        return format!(
            "Lifestyle overspend {}. Skip one takeaway this week and save ~{}.",
            f.amt(over),
            f.amt(weekly_step(over, 2.0) as f64)
        );
    }
    "Nice — your 60:20:20 split looks healthy. Keep adding transactions for weekly tips.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coach::aggregate::{aggregate, TOP_CATEGORY_LIMIT};
    use crate::transactions::{Transaction, TxKind};
    use time::macros::{date, datetime};
    use uuid::Uuid;

    const NO_INCOME_NUDGE: &str = "Add income details so ArthaSathi can recommend a plan.";

    fn tx(kind: TxKind, amount: f64, category: &str) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            date: date!(2025 - 06 - 10),
            amount,
            kind,
            category: Some(category.to_string()),
            note: None,
            created_at: datetime!(2025-06-10 12:00 UTC),
        }
    }

    fn run(txs: &[Transaction]) -> Advice {
        let agg = aggregate(txs);
        advise(&agg.deviations(), &agg.top_categories(TOP_CATEGORY_LIMIT), "₹")
    }

    #[test]
    fn zero_income_always_asks_for_income() {
        for txs in [
            vec![],
            vec![tx(TxKind::Expense, 5000.0, "rent")],
            vec![
                tx(TxKind::Expense, 1.0, "movies"),
                tx(TxKind::Expense, 99999.0, "groceries"),
            ],
        ] {
            let advice = run(&txs);
            assert_eq!(advice.nudge, NO_INCOME_NUDGE);
            assert_eq!(advice.insights.len(), 1);
            assert_eq!(advice.actions.len(), 1);
            assert!(advice.insights[0].starts_with("No income recorded"));
        }
    }

    #[test]
    fn savings_shortfall_outranks_overspend() {
        let advice = run(&[
            tx(TxKind::Income, 10000.0, "salary"),
            tx(TxKind::Expense, 6500.0, "groceries"),
            tx(TxKind::Expense, 3000.0, "entertainment"),
        ]);
        assert_eq!(
            advice.nudge,
            "You're ₹1500 short of the 20% savings target. Try saving ₹375 per week."
        );
        assert_eq!(
            advice.insights,
            vec![
                "Savings ₹500 are below the 20% target (₹2000).".to_string(),
                "Essentials spending ₹6500 is ₹500 above the 60% target (₹6000).".to_string(),
                "Lifestyle spending ₹3000 is ₹1000 above the 20% target (₹2000).".to_string(),
            ]
        );
        assert_eq!(
            advice.actions,
            vec![
                "Try saving an additional ₹375 per week for the next 4 weeks.".to_string(),
                "Reduce groceries by about ₹167 per week (small, consistent cuts).".to_string(),
                "Cut discretionary spends (e.g., takeout) by ~₹500 per week.".to_string(),
            ]
        );
        // filed as spending because essentials are over target
        assert_eq!(advice.category, NudgeCategory::Spending);
    }

    #[test]
    fn essentials_overspend_when_savings_on_target() {
        let advice = run(&[
            tx(TxKind::Income, 10000.0, "salary"),
            tx(TxKind::Expense, 6100.0, "rent"),
            tx(TxKind::Expense, 500.0, "movies"),
        ]);
        assert_eq!(
            advice.nudge,
            "Essentials overspend of ₹100. Try trimming groceries/transport by ₹34 this week."
        );
        assert!(advice.insights[0].starts_with("Good — savings ₹3400"));
        assert_eq!(advice.actions.len(), 1);
        assert!(advice.actions[0].starts_with("Reduce rent by about ₹34"));
    }

    #[test]
    fn lifestyle_overspend_is_last_warning() {
        let advice = run(&[
            tx(TxKind::Income, 10000.0, "salary"),
            tx(TxKind::Expense, 1000.0, "rent"),
            tx(TxKind::Expense, 2501.0, "shopping"),
        ]);
        assert_eq!(
            advice.nudge,
            "Lifestyle overspend ₹501. Skip one takeaway this week and save ~₹251."
        );
        assert_eq!(advice.category, NudgeCategory::Info);
    }

    #[test]
    fn healthy_split() {
        let advice = run(&[
            tx(TxKind::Income, 10000.0, "salary"),
            tx(TxKind::Expense, 5000.0, "rent"),
            tx(TxKind::Expense, 1500.0, "shopping"),
        ]);
        assert!(advice.nudge.starts_with("Nice — your 60:20:20 split looks healthy."));
        assert!(advice.actions.is_empty());
        assert_eq!(advice.insights.len(), 3);
    }

    #[test]
    fn essentials_cut_falls_back_to_top_category() {
        let d = Deviations {
            total_income: 100.0,
            total_expense: 70.0,
            savings: 30.0,
            target_essentials: 60.0,
            target_savings: 20.0,
            target_lifestyle: 20.0,
            essentials_actual: 70.0,
            lifestyle_actual: 0.0,
            essentials_diff: 10.0,
            savings_diff: 10.0,
            lifestyle_diff: -20.0,
        };
        let top = vec![CategoryTotal {
            category: "gadgets".into(),
            amount: 70.0,
            count: 1,
        }];
        let advice = advise(&d, &top, "$");
        assert_eq!(advice.actions, vec!["Reduce gadgets by about $4 per week (small, consistent cuts).".to_string()]);

        let advice = advise(&d, &[], "$");
        assert!(advice.actions[0].starts_with("Reduce repeated essentials costs"));
    }

    #[test]
    fn nudge_category_priorities() {
        let mut d = run_deviations(10000.0, 0.0, 0.0);
        assert_eq!(NudgeCategory::for_deviations(&d), NudgeCategory::Info);
        d.savings_diff = -1.0;
        assert_eq!(NudgeCategory::for_deviations(&d), NudgeCategory::Savings);
        d.essentials_diff = 1.0;
        assert_eq!(NudgeCategory::for_deviations(&d), NudgeCategory::Spending);
        assert_eq!(NudgeCategory::Spending.as_str(), "spending");
    }

    fn run_deviations(income: f64, essentials: f64, lifestyle: f64) -> Deviations {
        aggregate(&[
            tx(TxKind::Income, income, "salary"),
            tx(TxKind::Expense, essentials, "rent"),
            tx(TxKind::Expense, lifestyle, "movies"),
        ])
        .deviations()
    }
}
