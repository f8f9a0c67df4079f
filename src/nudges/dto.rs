use serde::{Deserialize, Serialize};

use super::repo_types::Nudge;

#[derive(Debug, Default, Deserialize)]
pub struct AddNudgeRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default, rename = "userId")]
    pub user_id_alt: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub actions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AddNudgeResponse {
    pub message: &'static str,
    pub data: Nudge,
}
