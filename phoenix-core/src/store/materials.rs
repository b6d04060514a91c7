use crate::domain::models::Material;

use super::{Collection, StoreError};

/// Material collection with the supply auto-promotion hook.
///
/// Wraps the generic [`Collection`] so that any update touching a quantity
/// re-evaluates the one documented automatic transition (`OnOrder` ->
/// `InStock` once the actual quantity covers the planned quantity) in the
/// same call. Callers never need to re-check it after editing quantities,
/// and edits that leave the quantities alone never trigger it.
#[derive(Debug, Clone, Default)]
pub struct MaterialCollection {
    inner: Collection<Material>,
}

impl MaterialCollection {
    pub fn new() -> Self {
        Self {
            inner: Collection::new(),
        }
    }

    pub fn list(&self) -> &[Material] {
        self.inner.list()
    }

    pub fn get(&self, id: &str) -> Option<&Material> {
        self.inner.get(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn allocate_id(&self, prefix: &str) -> String {
        self.inner.allocate_id(prefix)
    }

    /// Inserts as-is; the promotion rule only runs on updates, matching the
    /// contract that a freshly entered record keeps its user-chosen status.
    pub fn insert(&mut self, material: Material) -> Result<(), StoreError> {
        self.inner.insert(material)
    }

    /// Applies `edit`; if it changed either quantity, re-evaluates the supply
    /// promotion within the same call. Edits that leave both quantities alone
    /// (a deliberate status change, a renamed line item) never re-trigger it.
    pub fn update(&mut self, id: &str, edit: impl FnOnce(&mut Material)) -> Result<(), StoreError> {
        self.inner.update(id, |material| {
            let quantities = (material.planned_quantity, material.actual_quantity);
            edit(material);
            if (material.planned_quantity, material.actual_quantity) != quantities {
                material.apply_supply_promotion();
            }
        })
    }

    pub fn remove(&mut self, id: &str) -> Result<Material, StoreError> {
        self.inner.remove(id)
    }
}
