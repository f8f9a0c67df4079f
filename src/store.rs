use async_trait::async_trait;
use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use crate::nudges::{self, NewNudge, Nudge};
use crate::transactions::{self, NewTransaction, Transaction};

/// The external store holding transactions and the nudge log.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    async fn insert_transaction(&self, tx: &NewTransaction) -> anyhow::Result<Transaction>;
    /// Newest date first; `since` is inclusive.
    async fn list_transactions(
        &self,
        user_id: Uuid,
        since: Option<Date>,
    ) -> anyhow::Result<Vec<Transaction>>;
    async fn insert_nudge(&self, nudge: &NewNudge) -> anyhow::Result<Nudge>;
    /// Newest first.
    async fn list_nudges(&self, user_id: Uuid) -> anyhow::Result<Vec<Nudge>>;
}

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LedgerStore for PgStore {
    async fn insert_transaction(&self, tx: &NewTransaction) -> anyhow::Result<Transaction> {
        transactions::repo::insert(&self.db, tx).await
    }

    async fn list_transactions(
        &self,
        user_id: Uuid,
        since: Option<Date>,
    ) -> anyhow::Result<Vec<Transaction>> {
        transactions::repo::list_by_user(&self.db, user_id, since).await
    }

    async fn insert_nudge(&self, nudge: &NewNudge) -> anyhow::Result<Nudge> {
        nudges::repo::insert(&self.db, nudge).await
    }

    async fn list_nudges(&self, user_id: Uuid) -> anyhow::Result<Vec<Nudge>> {
        nudges::repo::list_by_user(&self.db, user_id).await
    }
}
