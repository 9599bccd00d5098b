use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use moviedb_core::Entity;

use super::r#trait::{Repository, StoreError};

/// In-memory repository for tests/dev.
///
/// Ids start at 1 and are never reused, matching `AUTO_INCREMENT`.
#[derive(Debug)]
pub struct InMemoryRepository<E> {
    inner: RwLock<Table<E>>,
}

#[derive(Debug)]
struct Table<E> {
    rows: BTreeMap<i64, E>,
    next_id: i64,
}

impl<E> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("in-memory table lock poisoned".to_string())
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn list(&self, filter: &E::Filter) -> Result<Vec<E>, StoreError> {
        let table = self.inner.read().map_err(|_| poisoned())?;
        Ok(table
            .rows
            .values()
            .filter(|r| r.matches(filter))
            .cloned()
            .collect())
    }

    async fn get(&self, id: E::Id) -> Result<Option<E>, StoreError> {
        let key: i64 = id.into();
        let table = self.inner.read().map_err(|_| poisoned())?;
        Ok(table.rows.get(&key).cloned())
    }

    async fn insert(&self, fields: E::Fields) -> Result<E, StoreError> {
        let mut table = self.inner.write().map_err(|_| poisoned())?;
        let id = table.next_id;
        table.next_id += 1;

        let record = E::from_parts(E::Id::from(id), fields);
        table.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn replace(&self, id: E::Id, fields: E::Fields) -> Result<bool, StoreError> {
        let key: i64 = id.into();
        let mut table = self.inner.write().map_err(|_| poisoned())?;
        match table.rows.get_mut(&key) {
            Some(row) => {
                *row = E::from_parts(id, fields);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: E::Id) -> Result<bool, StoreError> {
        let key: i64 = id.into();
        let mut table = self.inner.write().map_err(|_| poisoned())?;
        Ok(table.rows.remove(&key).is_some())
    }
}
