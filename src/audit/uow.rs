use chrono::Local;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use crate::audit::recorder::{self, PendingChange};
use crate::audit::Audited;
use crate::db;

/// A single transactional unit-of-work. Repository writes borrow the
/// transaction through [`executor`](UnitOfWork::executor); entity changes
/// are recorded alongside. At [`commit`](UnitOfWork::commit) the recorder
/// runs once, inserting one audit row per tracked change through the same
/// transaction, so the data change and its audit trail land atomically or
/// not at all.
pub struct UnitOfWork {
    tx: Transaction<'static, Postgres>,
    pending: Vec<PendingChange>,
}

impl UnitOfWork {
    pub async fn begin(pool: &PgPool) -> Result<Self, sqlx::Error> {
        Ok(UnitOfWork {
            tx: pool.begin().await?,
            pending: Vec::new(),
        })
    }

    pub fn executor(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    pub fn record_added<E: Audited>(&mut self, entity: &E) {
        self.pending.push(PendingChange::added(entity));
    }

    pub fn record_modified<E: Audited>(&mut self, before: &E, after: &E) {
        self.pending.push(PendingChange::modified(before, after));
    }

    pub fn record_deleted<E: Audited>(&mut self, entity: &E) {
        self.pending.push(PendingChange::deleted(entity));
    }

    /// Flush audit records, then commit. Runs exactly once; any failure
    /// rolls back the entire unit-of-work when the transaction drops.
    pub async fn commit(mut self) -> Result<(), sqlx::Error> {
        let drafts = recorder::capture(&self.pending);
        let now = Local::now();
        for draft in &drafts {
            db::audit::insert(
                &mut *self.tx,
                draft.entity_name,
                draft.action.as_str(),
                &draft.change_summary,
                now,
            )
            .await?;
        }
        self.tx.commit().await
    }
}
