use crate::audit::Audited;

/// Entity names eligible for audit capture. Changes to any other entity
/// type are silently dropped at commit.
pub const TRACKED_ENTITIES: &[&str] = &["Customer", "Company", "Appointment"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeAction {
    Added,
    Modified,
    Deleted,
}

impl ChangeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeAction::Added => "Added",
            ChangeAction::Modified => "Modified",
            ChangeAction::Deleted => "Deleted",
        }
    }
}

/// Old/new value of one declared field. `old` is absent for inserts,
/// `new` is absent for deletes.
#[derive(Debug, Clone)]
pub struct FieldChange {
    pub field: &'static str,
    pub old: Option<String>,
    pub new: Option<String>,
}

/// One entity mutation waiting in a unit-of-work.
#[derive(Debug, Clone)]
pub struct PendingChange {
    pub entity: &'static str,
    pub action: ChangeAction,
    pub fields: Vec<FieldChange>,
}

impl PendingChange {
    pub fn added<E: Audited>(entity: &E) -> Self {
        PendingChange {
            entity: E::ENTITY,
            action: ChangeAction::Added,
            fields: entity
                .audit_fields()
                .into_iter()
                .map(|(field, value)| FieldChange {
                    field,
                    old: None,
                    new: Some(value),
                })
                .collect(),
        }
    }

    pub fn modified<E: Audited>(before: &E, after: &E) -> Self {
        let fields = before
            .audit_fields()
            .into_iter()
            .zip(after.audit_fields())
            .map(|((field, old), (_, new))| FieldChange {
                field,
                old: Some(old),
                new: Some(new),
            })
            .collect();
        PendingChange {
            entity: E::ENTITY,
            action: ChangeAction::Modified,
            fields,
        }
    }

    pub fn deleted<E: Audited>(entity: &E) -> Self {
        PendingChange {
            entity: E::ENTITY,
            action: ChangeAction::Deleted,
            fields: entity
                .audit_fields()
                .into_iter()
                .map(|(field, value)| FieldChange {
                    field,
                    old: Some(value),
                    new: None,
                })
                .collect(),
        }
    }
}

/// An audit record ready for insertion; the id and timestamp are assigned
/// at persist time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditDraft {
    pub entity_name: &'static str,
    pub action: ChangeAction,
    pub change_summary: String,
}

/// Turn the pending changes of a unit-of-work into audit drafts: one draft
/// per mutated instance of a tracked entity type. Untracked types and
/// modifications where no declared field changed produce nothing.
pub fn capture(pending: &[PendingChange]) -> Vec<AuditDraft> {
    pending
        .iter()
        .filter(|change| TRACKED_ENTITIES.contains(&change.entity))
        .filter_map(|change| {
            render_summary(change).map(|change_summary| AuditDraft {
                entity_name: change.entity,
                action: change.action,
                change_summary,
            })
        })
        .collect()
}

/// One line per declared field:
/// - Added:    `<field>: <new>`
/// - Modified: `<field>: From <old> to <new>` (only fields that changed)
/// - Deleted:  `<field>: Deleted`
fn render_summary(change: &PendingChange) -> Option<String> {
    let lines: Vec<String> = match change.action {
        ChangeAction::Added => change
            .fields
            .iter()
            .map(|f| format!("{}: {}", f.field, f.new.as_deref().unwrap_or_default()))
            .collect(),
        ChangeAction::Modified => change
            .fields
            .iter()
            .filter(|f| f.old != f.new)
            .map(|f| {
                format!(
                    "{}: From {} to {}",
                    f.field,
                    f.old.as_deref().unwrap_or_default(),
                    f.new.as_deref().unwrap_or_default()
                )
            })
            .collect(),
        ChangeAction::Deleted => change
            .fields
            .iter()
            .map(|f| format!("{}: Deleted", f.field))
            .collect(),
    };

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        name: String,
        size: String,
    }

    impl Audited for Fixture {
        const ENTITY: &'static str = "Customer";

        fn audit_fields(&self) -> Vec<(&'static str, String)> {
            vec![("name", self.name.clone()), ("size", self.size.clone())]
        }
    }

    struct Untracked;

    impl Audited for Untracked {
        const ENTITY: &'static str = "User";

        fn audit_fields(&self) -> Vec<(&'static str, String)> {
            vec![("email", "a@b.c".to_string())]
        }
    }

    fn fixture(name: &str, size: &str) -> Fixture {
        Fixture {
            name: name.to_string(),
            size: size.to_string(),
        }
    }

    #[test]
    fn added_renders_every_field() {
        let drafts = capture(&[PendingChange::added(&fixture("Ann", "small"))]);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].entity_name, "Customer");
        assert_eq!(drafts[0].action, ChangeAction::Added);
        assert_eq!(drafts[0].change_summary, "name: Ann\nsize: small");
    }

    #[test]
    fn modified_renders_only_changed_fields() {
        let before = fixture("Ann", "small");
        let after = fixture("Anna", "small");
        let drafts = capture(&[PendingChange::modified(&before, &after)]);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].change_summary, "name: From Ann to Anna");
    }

    #[test]
    fn modified_with_no_changed_fields_is_dropped() {
        let same = fixture("Ann", "small");
        let drafts = capture(&[PendingChange::modified(&same, &same)]);
        assert!(drafts.is_empty());
    }

    #[test]
    fn deleted_renders_one_line_per_field() {
        let drafts = capture(&[PendingChange::deleted(&fixture("Ann", "small"))]);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].action, ChangeAction::Deleted);
        assert_eq!(drafts[0].change_summary, "name: Deleted\nsize: Deleted");
    }

    #[test]
    fn untracked_entities_are_filtered_out() {
        let drafts = capture(&[PendingChange::added(&Untracked)]);
        assert!(drafts.is_empty());
    }

    #[test]
    fn one_draft_per_mutated_instance() {
        let pending = vec![
            PendingChange::added(&fixture("Ann", "small")),
            PendingChange::deleted(&fixture("Bea", "large")),
            PendingChange::added(&Untracked),
        ];
        let drafts = capture(&pending);
        assert_eq!(drafts.len(), 2);
    }

    #[test]
    fn empty_unit_of_work_produces_nothing() {
        assert!(capture(&[]).is_empty());
    }
}
