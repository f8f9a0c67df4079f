use serde::{Deserialize, Serialize};

use super::aggregate::{CategoryTotal, Deviations};
use crate::nudges::Nudge;

#[derive(Debug, Default, Deserialize)]
pub struct CoachRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default, rename = "userId")]
    pub user_id_alt: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachResponse {
    pub insights: Vec<String>,
    pub actions: Vec<String>,
    pub nudge: String,
    pub deviations: Deviations,
    pub top_categories: Vec<CategoryTotal>,
    /// `None` when the nudge log refused the write.
    pub nudge_saved: Option<Nudge>,
}
