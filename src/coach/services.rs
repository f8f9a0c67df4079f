use time::{Date, Duration};
use tracing::{error, info};
use uuid::Uuid;

use super::advice::advise;
use super::aggregate::{aggregate, TOP_CATEGORY_LIMIT};
use super::dto::CoachResponse;
use crate::config::CoachConfig;
use crate::nudges::NewNudge;
use crate::store::LedgerStore;

pub const WINDOW_DAYS: i64 = 30;

/// First day (inclusive) of the trailing coaching window.
pub fn window_start(today: Date) -> Date {
    today
        .checked_sub(Duration::days(WINDOW_DAYS))
        .unwrap_or(Date::MIN)
}

/// Reads the window, builds advice and files the nudge. Only the read can fail the call.
pub async fn coach_user(
    store: &dyn LedgerStore,
    cfg: &CoachConfig,
    user_id: Uuid,
    today: Date,
) -> anyhow::Result<CoachResponse> {
    let txs = store
        .list_transactions(user_id, Some(window_start(today)))
        .await?;

    let agg = aggregate(&txs);
    let deviations = agg.deviations();
    let top_categories = agg.top_categories(TOP_CATEGORY_LIMIT);
    let advice = advise(&deviations, &top_categories, &cfg.currency_symbol);

    let new_nudge = NewNudge {
        user_id,
        message: advice.nudge.clone(),
        language: cfg.nudge_language.clone(),
        category: Some(advice.category.as_str().to_string()),
        insights: advice.insights.clone(),
        actions: advice.actions.clone(),
    };
    let nudge_saved = match store.insert_nudge(&new_nudge).await {
        Ok(n) => Some(n),
        Err(e) => {
            error!(error = %e, %user_id, "failed to save nudge");
            None
        }
    };

    info!(
        %user_id,
        tx_count = txs.len(),
        category = advice.category.as_str(),
        saved = nudge_saved.is_some(),
        "coach advice generated"
    );

    Ok(CoachResponse {
        insights: advice.insights,
        actions: advice.actions,
        nudge: advice.nudge,
        deviations,
        top_categories,
        nudge_saved,
    })
}
