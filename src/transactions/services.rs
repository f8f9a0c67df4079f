use time::{macros::format_description, Date};
use uuid::Uuid;

use super::dto::{AddTransactionRequest, TransactionSummary};
use super::repo_types::{NewTransaction, Transaction, TxKind, DEFAULT_CATEGORY};
use crate::body::{body_user_id, non_blank};
use crate::error::ApiError;
use crate::money::{money, round_to};

/// Checks an add request and fills in defaults (today's date, "Other" category).
pub fn validate_new_transaction(
    req: AddTransactionRequest,
    today: Date,
) -> Result<NewTransaction, ApiError> {
    let required = || ApiError::bad_request("user_id, amount and type are required");

    let user_id = body_user_id(req.user_id, req.user_id_alt).ok_or_else(required)?;
    let amount = req.amount.ok_or_else(required)?;
    let kind = non_blank(req.kind).ok_or_else(required)?;

    let amount = amount
        .value()
        .ok_or_else(|| ApiError::bad_request("amount must be a non-negative number"))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(ApiError::bad_request("amount must be a non-negative number"));
    }
    // zero after rounding to cents counts as missing
    let amount = money(amount);
    if amount == 0.0 {
        return Err(required());
    }

    let user_id =
        Uuid::parse_str(&user_id).map_err(|_| ApiError::bad_request("user_id must be a UUID"))?;
    let kind = TxKind::parse(&kind)
        .ok_or_else(|| ApiError::bad_request("type must be 'income' or 'expense'"))?;

    let date = match non_blank(req.date) {
        Some(raw) => Date::parse(&raw, format_description!("[year]-[month]-[day]"))
            .map_err(|_| ApiError::bad_request("date must be formatted YYYY-MM-DD"))?,
        None => today,
    };

    Ok(NewTransaction {
        user_id,
        date,
        amount,
        kind,
        category: non_blank(req.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        note: non_blank(req.note),
    })
}

/// Income/expense snapshot over whatever transactions are given.
pub fn summarize(txs: &[Transaction]) -> TransactionSummary {
    let (mut income, mut expense) = (0.0, 0.0);
    for t in txs {
        match t.kind {
            TxKind::Income => income = money(income + t.amount),
            TxKind::Expense => expense = money(expense + t.amount),
        }
    }
    let savings = money(income - expense);
    let base = if income > 0.0 { income } else { 1.0 };

    TransactionSummary {
        income,
        expense,
        savings,
        expense_pct: round_to(expense / base * 100.0, 1),
        savings_pct: round_to(savings / base * 100.0, 1),
        tx_count: txs.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transactions::dto::AmountInput;
    use time::macros::{date, datetime};

    const USER: &str = "47e20981-bcd8-4853-adc4-6702ca1dccfc";

    fn request(amount: AmountInput, kind: &str) -> AddTransactionRequest {
        AddTransactionRequest {
            user_id: Some(USER.into()),
            amount: Some(amount),
            kind: Some(kind.into()),
            ..Default::default()
        }
    }

    fn message(err: ApiError) -> String {
        err.message()
    }

    #[test]
    fn fills_defaults() {
        let today = date!(2025 - 06 - 15);
        let tx = validate_new_transaction(request(AmountInput::Number(120.456), "Expense"), today)
            .unwrap();
        assert_eq!(tx.user_id.to_string(), USER);
        assert_eq!(tx.date, today);
        assert_eq!(tx.amount, 120.46);
        assert_eq!(tx.kind, TxKind::Expense);
        assert_eq!(tx.category, "Other");
        assert_eq!(tx.note, None);
    }

    #[test]
    fn accepts_string_amount_and_explicit_fields() {
        let mut req = request(AmountInput::Text(" 2500 ".into()), "income");
        req.date = Some("2025-06-01".into());
        req.category = Some("  Salary ".into());
        req.note = Some("june".into());
        let tx = validate_new_transaction(req, date!(2025 - 06 - 15)).unwrap();
        assert_eq!(tx.amount, 2500.0);
        assert_eq!(tx.kind, TxKind::Income);
        assert_eq!(tx.date, date!(2025 - 06 - 01));
        assert_eq!(tx.category, "Salary");
        assert_eq!(tx.note.as_deref(), Some("june"));
    }

    #[test]
    fn rejects_missing_fields() {
        let today = date!(2025 - 06 - 15);
        let err = validate_new_transaction(AddTransactionRequest::default(), today).unwrap_err();
        assert_eq!(message(err), "user_id, amount and type are required");

        let err =
            validate_new_transaction(request(AmountInput::Number(0.0), "expense"), today).unwrap_err();
        assert_eq!(message(err), "user_id, amount and type are required");

        let err = validate_new_transaction(request(AmountInput::Number(0.004), "expense"), today)
            .unwrap_err();
        assert_eq!(message(err), "user_id, amount and type are required");
    }

    #[test]
    fn sub_cent_amount_rounds_up_to_a_cent() {
        let tx = validate_new_transaction(
            request(AmountInput::Text("0.006".into()), "expense"),
            date!(2025 - 06 - 15),
        )
        .unwrap();
        assert_eq!(tx.amount, 0.01);
    }

    #[test]
    fn snake_case_user_id_wins_over_camel_case() {
        let mut req = request(AmountInput::Number(5.0), "expense");
        req.user_id_alt = Some("not-a-uuid".into());
        let tx = validate_new_transaction(req, date!(2025 - 06 - 15)).unwrap();
        assert_eq!(tx.user_id.to_string(), USER);

        let mut req = request(AmountInput::Number(5.0), "expense");
        req.user_id = None;
        req.user_id_alt = Some(USER.into());
        let tx = validate_new_transaction(req, date!(2025 - 06 - 15)).unwrap();
        assert_eq!(tx.user_id.to_string(), USER);
    }

    #[test]
    fn rejects_bad_values() {
        let today = date!(2025 - 06 - 15);
        let err = validate_new_transaction(request(AmountInput::Number(5.0), "transfer"), today)
            .unwrap_err();
        assert_eq!(message(err), "type must be 'income' or 'expense'");

        let err = validate_new_transaction(request(AmountInput::Number(-5.0), "expense"), today)
            .unwrap_err();
        assert_eq!(message(err), "amount must be a non-negative number");

        let err = validate_new_transaction(request(AmountInput::Text("lots".into()), "expense"), today)
            .unwrap_err();
        assert_eq!(message(err), "amount must be a non-negative number");

        let mut req = request(AmountInput::Number(5.0), "expense");
        req.user_id = Some("not-a-uuid".into());
        assert_eq!(
            message(validate_new_transaction(req, today).unwrap_err()),
            "user_id must be a UUID"
        );

        let mut req = request(AmountInput::Number(5.0), "expense");
        req.date = Some("15/06/2025".into());
        assert_eq!(
            message(validate_new_transaction(req, today).unwrap_err()),
            "date must be formatted YYYY-MM-DD"
        );
    }

    fn tx(kind: TxKind, amount: f64) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            date: date!(2025 - 06 - 01),
            amount,
            kind,
            category: None,
            note: None,
            created_at: datetime!(2025-06-01 0:00 UTC),
        }
    }

    #[test]
    fn summarizes_percentages_of_income() {
        let s = summarize(&[
            tx(TxKind::Income, 3000.0),
            tx(TxKind::Expense, 1000.0),
            tx(TxKind::Expense, 1000.0),
        ]);
        assert_eq!(s.income, 3000.0);
        assert_eq!(s.expense, 2000.0);
        assert_eq!(s.savings, 1000.0);
        assert_eq!(s.expense_pct, 66.7);
        assert_eq!(s.savings_pct, 33.3);
        assert_eq!(s.tx_count, 3);
    }

    #[test]
    fn summary_without_income_uses_unit_base() {
        let s = summarize(&[tx(TxKind::Expense, 2.5)]);
        assert_eq!(s.expense_pct, 250.0);
        assert_eq!(s.savings, -2.5);
        assert_eq!(summarize(&[]).tx_count, 0);
    }
}
