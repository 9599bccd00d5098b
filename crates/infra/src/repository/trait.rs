use async_trait::async_trait;
use thiserror::Error;

use moviedb_core::Entity;

/// Storage-level failure.
///
/// "No such row" is not an error here; it is reported through `Option`/`bool`
/// return values so callers can turn it into a 404.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The database could not be reached (pool closed/timed out, I/O, TLS).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A uniqueness constraint rejected the write.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A row could not be mapped into a record.
    #[error("decode error: {0}")]
    Decode(String),

    /// Any other database error.
    #[error("database error: {0}")]
    Database(String),
}

/// CRUD access to one table.
///
/// Each method is a single statement; there is no read-then-write. `replace`
/// and `delete` return whether a row with that id existed.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// All rows passing `filter`, ordered by id ascending.
    async fn list(&self, filter: &E::Filter) -> Result<Vec<E>, StoreError>;

    async fn get(&self, id: E::Id) -> Result<Option<E>, StoreError>;

    /// Insert a new row; the returned record carries the storage-assigned id.
    async fn insert(&self, fields: E::Fields) -> Result<E, StoreError>;

    /// Overwrite every column of an existing row.
    async fn replace(&self, id: E::Id, fields: E::Fields) -> Result<bool, StoreError>;

    async fn delete(&self, id: E::Id) -> Result<bool, StoreError>;
}
