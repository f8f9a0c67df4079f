use anyhow::Context;
use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use super::repo_types::{NewTransaction, Transaction, TransactionRow};

pub async fn insert(db: &PgPool, tx: &NewTransaction) -> anyhow::Result<Transaction> {
    let row = sqlx::query_as::<_, TransactionRow>(
        r#"
        INSERT INTO transactions (user_id, date, amount, type, category, note)
        VALUES ($1, $2, CAST($3 AS NUMERIC(12, 2)), $4, $5, $6)
        RETURNING id, user_id, date, amount::float8 AS amount, type AS kind,
                  category, note, created_at
        "#,
    )
    .bind(tx.user_id)
    .bind(tx.date)
    .bind(tx.amount)
    .bind(tx.kind.as_str())
    .bind(&tx.category)
    .bind(tx.note.as_deref())
    .fetch_one(db)
    .await
    .context("insert transaction")?;

    Ok(row.into())
}

/// Newest date first; `since` is inclusive.
pub async fn list_by_user(
    db: &PgPool,
    user_id: Uuid,
    since: Option<Date>,
) -> anyhow::Result<Vec<Transaction>> {
    let rows = sqlx::query_as::<_, TransactionRow>(
        r#"
        SELECT id, user_id, date, amount::float8 AS amount, type AS kind,
               category, note, created_at
          FROM transactions
         WHERE user_id = $1
           AND ($2::date IS NULL OR date >= $2)
         ORDER BY date DESC, created_at DESC
        "#,
    )
    .bind(user_id)
    .bind(since)
    .fetch_all(db)
    .await
    .context("list transactions")?;

    Ok(rows.into_iter().map(Transaction::from).collect())
}
