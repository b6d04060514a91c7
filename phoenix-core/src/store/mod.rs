//! In-memory entity store.
//!
//! Session-scoped, single-actor storage: one insertion-ordered collection per
//! entity type, no persistence and no locking. Mutations return
//! [`StoreError`] for id collisions and missing records; both are recoverable
//! by the caller.

mod collection;
mod error;
mod materials;

pub use collection::{Collection, Entity};
pub use error::StoreError;
pub use materials::MaterialCollection;

use crate::domain::models::{
    Checklist, DailyLog, DocumentFile, Material, Milestone, Project, Transaction,
};

macro_rules! impl_entity {
    ($($ty:ty),+ $(,)?) => {
        $(impl Entity for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })+
    };
}

impl_entity!(
    Project,
    Material,
    Milestone,
    Transaction,
    DocumentFile,
    DailyLog,
    Checklist,
);

/// All domain collections for one session.
///
/// Materials get a wrapped collection so the supply auto-promotion runs on
/// every quantity update; everything else uses the generic [`Collection`]
/// directly.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    pub projects: Collection<Project>,
    pub materials: MaterialCollection,
    pub milestones: Collection<Milestone>,
    pub transactions: Collection<Transaction>,
    pub documents: Collection<DocumentFile>,
    pub daily_logs: Collection<DailyLog>,
    pub checklists: Collection<Checklist>,
}

macro_rules! add_helper {
    ($name:ident, $field:ident, $ty:ty, $prefix:literal) => {
        pub fn $name(&mut self, mut record: $ty) -> Result<String, StoreError> {
            let id = self.$field.allocate_id($prefix);
            record.id = id.clone();
            self.$field.insert(record)?;
            Ok(id)
        }
    };
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Insert helpers that allocate the record's id. Whatever id the caller
    // put on the record is replaced with a fresh time-based one, so these
    // cannot collide; the returned id is the one the record lives under.
    add_helper!(add_project, projects, Project, "p");
    add_helper!(add_material, materials, Material, "mt");
    add_helper!(add_milestone, milestones, Milestone, "m");
    add_helper!(add_transaction, transactions, Transaction, "t");
    add_helper!(add_document, documents, DocumentFile, "d");
    add_helper!(add_daily_log, daily_logs, DailyLog, "l");
    add_helper!(add_checklist, checklists, Checklist, "c");

    /// Material edit through the supply-promotion hook; see
    /// [`MaterialCollection::update`].
    pub fn update_material(
        &mut self,
        id: &str,
        edit: impl FnOnce(&mut Material),
    ) -> Result<(), StoreError> {
        self.materials.update(id, edit)
    }
}
