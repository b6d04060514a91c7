use thiserror::Error;

/// Data-integrity errors surfaced by the entity store.
///
/// Both variants are recoverable by the caller: a stale UI can re-fetch the
/// list on `NotFound`, and an id collision is fixed by allocating a fresh id.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no record with id: {0}")]
    NotFound(String),
    #[error("duplicate id: {0}")]
    DuplicateId(String),
}
