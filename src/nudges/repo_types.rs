use serde::Serialize;
use sqlx::types::Json;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
pub struct NudgeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    pub language: String,
    pub category: Option<String>,
    pub insights: Json<Vec<String>>,
    pub actions: Json<Vec<String>>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Nudge {
    pub id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    pub language: String,
    pub category: Option<String>,
    pub insights: Vec<String>,
    pub actions: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<NudgeRow> for Nudge {
    fn from(r: NudgeRow) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            message: r.message,
            language: r.language,
            category: r.category,
            insights: r.insights.0,
            actions: r.actions.0,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewNudge {
    pub user_id: Uuid,
    pub message: String,
    pub language: String,
    pub category: Option<String>,
    pub insights: Vec<String>,
    pub actions: Vec<String>,
}
