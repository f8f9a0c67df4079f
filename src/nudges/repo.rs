use anyhow::Context;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use super::repo_types::{NewNudge, Nudge, NudgeRow};

pub async fn insert(db: &PgPool, nudge: &NewNudge) -> anyhow::Result<Nudge> {
    let row = sqlx::query_as::<_, NudgeRow>(
        r#"
        INSERT INTO nudges (user_id, message, language, category, insights, actions)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, message, language, category, insights, actions, created_at
        "#,
    )
    .bind(nudge.user_id)
    .bind(&nudge.message)
    .bind(&nudge.language)
    .bind(nudge.category.as_deref())
    .bind(Json(&nudge.insights))
    .bind(Json(&nudge.actions))
    .fetch_one(db)
    .await
    .context("insert nudge")?;

    Ok(row.into())
}

/// Newest first.
pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Nudge>> {
    let rows = sqlx::query_as::<_, NudgeRow>(
        r#"
        SELECT id, user_id, message, language, category, insights, actions, created_at
          FROM nudges
         WHERE user_id = $1
         ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("list nudges")?;

    Ok(rows.into_iter().map(Nudge::from).collect())
}
