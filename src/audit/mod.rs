//! Change auditing: every write to a tracked entity goes through a
//! [`UnitOfWork`], which collects pending changes and turns them into
//! append-only audit rows inside the same database transaction.

pub mod recorder;
pub mod uow;

pub use recorder::{ChangeAction, FieldChange, PendingChange, TRACKED_ENTITIES};
pub use uow::UnitOfWork;

/// Per-entity audit descriptor: the entity's tracked name and an explicit
/// list of its declared fields rendered to text. Implemented on each model
/// instead of reflecting over live ORM state.
pub trait Audited {
    const ENTITY: &'static str;

    fn audit_fields(&self) -> Vec<(&'static str, String)>;
}
