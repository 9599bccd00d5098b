//! MySQL-backed repositories.
//!
//! One generic [`MySqlRepository`] serves every table; the per-table SQL and
//! row mapping live in [`MySqlTable`] implementations (see `tables.rs`).
//!
//! ## Error Mapping
//!
//! | SQLx Error | StoreError | Scenario |
//! |------------|------------|----------|
//! | Database (unique violation, MySQL 1062) | `Conflict` | Duplicate value in a `UNIQUE` column |
//! | Database (other) | `Database` | Any other server-side failure |
//! | PoolTimedOut / PoolClosed / Io / Tls | `Unavailable` | Server unreachable |
//! | ColumnDecode / ColumnNotFound / Decode | `Decode` | Schema drift |
//!
//! ## Affected Rows
//!
//! `replace` and `delete` rely on `rows_affected()`. sqlx negotiates
//! `CLIENT_FOUND_ROWS`, so an `UPDATE` that writes identical values still
//! counts the matched row.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::mysql::{MySqlArguments, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::MySql;
use tracing::instrument;

use moviedb_core::Entity;

use super::r#trait::{Repository, StoreError};
use crate::config::{ConfigError, DatabaseConfig};

pub type MySqlQuery<'q> = sqlx::query::Query<'q, MySql, MySqlArguments>;

/// SQL and row mapping for one entity's table.
///
/// Every statement uses `?` placeholders; values are always bound, never
/// interpolated.
pub trait MySqlTable: Entity {
    /// `SELECT ... WHERE <filter> ORDER BY id`; placeholders bound by `bind_filter`.
    const SELECT_FILTERED: &'static str;
    /// `SELECT ... WHERE id = ?`.
    const SELECT_BY_ID: &'static str;
    /// `INSERT` with placeholders bound by `bind_fields`.
    const INSERT: &'static str;
    /// `UPDATE ... SET <fields> WHERE id = ?`; fields first, id last.
    const UPDATE: &'static str;
    const DELETE: &'static str;

    fn bind_fields<'q>(query: MySqlQuery<'q>, fields: &'q Self::Fields) -> MySqlQuery<'q>;

    fn bind_filter<'q>(query: MySqlQuery<'q>, filter: &'q Self::Filter) -> MySqlQuery<'q>;

    fn decode_row(row: &MySqlRow) -> Result<Self, sqlx::Error>;
}

/// Open a connection pool for the configured server.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<MySqlPool, ConnectError> {
    let options = config.connect_options()?;
    let pool = MySqlPoolOptions::new()
        .connect_with(options)
        .await
        .map_err(|e| map_sqlx_error("connect", e))?;
    Ok(pool)
}

#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Repository over one MySQL table.
#[derive(Debug, Clone)]
pub struct MySqlRepository<E> {
    pool: MySqlPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> MySqlRepository<E> {
    /// `MySqlPool` is internally reference-counted; clones share connections.
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl<E: MySqlTable> Repository<E> for MySqlRepository<E> {
    #[instrument(skip(self), fields(table = E::COLLECTION), err)]
    async fn list(&self, filter: &E::Filter) -> Result<Vec<E>, StoreError> {
        let rows = E::bind_filter(sqlx::query(E::SELECT_FILTERED), filter)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("list", e))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            records.push(E::decode_row(row).map_err(|e| map_sqlx_error("list", e))?);
        }
        Ok(records)
    }

    #[instrument(skip(self, id), fields(table = E::COLLECTION, id = %id), err)]
    async fn get(&self, id: E::Id) -> Result<Option<E>, StoreError> {
        let key: i64 = id.into();
        let row = sqlx::query(E::SELECT_BY_ID)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("get", e))?;

        match row {
            Some(row) => Ok(Some(E::decode_row(&row).map_err(|e| map_sqlx_error("get", e))?)),
            None => Ok(None),
        }
    }

    #[instrument(skip(self, values), fields(table = E::COLLECTION), err)]
    async fn insert(&self, values: E::Fields) -> Result<E, StoreError> {
        let result = E::bind_fields(sqlx::query(E::INSERT), &values)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("insert", e))?;

        let id = i64::try_from(result.last_insert_id()).map_err(|_| {
            StoreError::Decode(format!(
                "last_insert_id {} does not fit an i64",
                result.last_insert_id()
            ))
        })?;

        tracing::debug!(id, "row inserted");
        Ok(E::from_parts(E::Id::from(id), values))
    }

    #[instrument(skip(self, id, values), fields(table = E::COLLECTION, id = %id), err)]
    async fn replace(&self, id: E::Id, values: E::Fields) -> Result<bool, StoreError> {
        let key: i64 = id.into();
        let result = E::bind_fields(sqlx::query(E::UPDATE), &values)
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("replace", e))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, id), fields(table = E::COLLECTION, id = %id), err)]
    async fn delete(&self, id: E::Id) -> Result<bool, StoreError> {
        let key: i64 = id.into();
        let result = sqlx::query(E::DELETE)
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete", e))?;

        Ok(result.rows_affected() > 0)
    }
}

pub(crate) fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            let msg = format!("{} failed: {}", operation, db_err.message());
            if db_err.is_unique_violation() {
                StoreError::Conflict(msg)
            } else {
                StoreError::Database(msg)
            }
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            StoreError::Unavailable(format!("connection pool unavailable in {operation}"))
        }
        sqlx::Error::Io(e) => StoreError::Unavailable(format!("i/o error in {operation}: {e}")),
        sqlx::Error::Tls(e) => StoreError::Unavailable(format!("tls error in {operation}: {e}")),
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::Decode(_) => StoreError::Decode(format!("{operation}: {err}")),
        _ => StoreError::Database(format!("sqlx error in {operation}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_failures_are_unavailable() {
        assert!(matches!(
            map_sqlx_error("get", sqlx::Error::PoolTimedOut),
            StoreError::Unavailable(_)
        ));
        assert!(matches!(
            map_sqlx_error("get", sqlx::Error::PoolClosed),
            StoreError::Unavailable(_)
        ));
    }

    #[test]
    fn decode_failures_are_decode_errors() {
        let err = map_sqlx_error("list", sqlx::Error::ColumnNotFound("title".into()));
        assert!(matches!(err, StoreError::Decode(ref m) if m.contains("title")));
    }

    #[test]
    fn unexpected_errors_fall_back_to_database() {
        let err = map_sqlx_error("insert", sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Database(ref m) if m.contains("insert")));
    }
}
