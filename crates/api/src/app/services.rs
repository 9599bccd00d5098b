//! Storage wiring shared by every handler.

use std::sync::Arc;

use sqlx::MySqlPool;

use moviedb_core::{Movie, User};
use moviedb_infra::{
    connect_pool, ConnectError, DatabaseConfig, InMemoryRepository, MySqlRepository, Repository,
};

/// Which backend the repositories run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local maps; contents vanish on restart.
    InMemory,
    MySql,
}

impl StorageBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageBackend::InMemory => "memory",
            StorageBackend::MySql => "mysql",
        }
    }
}

/// Repositories handed to the router via `Extension<Arc<AppServices>>`.
#[derive(Clone)]
pub struct AppServices {
    pub movies: Arc<dyn Repository<Movie>>,
    pub users: Arc<dyn Repository<User>>,
    backend: StorageBackend,
}

impl AppServices {
    pub fn in_memory() -> Self {
        Self {
            movies: Arc::new(InMemoryRepository::<Movie>::new()),
            users: Arc::new(InMemoryRepository::<User>::new()),
            backend: StorageBackend::InMemory,
        }
    }

    pub fn mysql(pool: MySqlPool) -> Self {
        Self {
            movies: Arc::new(MySqlRepository::<Movie>::new(pool.clone())),
            users: Arc::new(MySqlRepository::<User>::new(pool)),
            backend: StorageBackend::MySql,
        }
    }

    pub fn backend(&self) -> StorageBackend {
        self.backend
    }
}

/// MySQL when a database is configured, in-memory otherwise.
pub async fn build_services(database: Option<&DatabaseConfig>) -> Result<AppServices, ConnectError> {
    match database {
        Some(config) => {
            tracing::info!(database = %config.redacted(), "connecting to MySQL");
            let pool = connect_pool(config).await?;
            Ok(AppServices::mysql(pool))
        }
        None => {
            tracing::warn!(
                "no database configured (DATABASE_URL / DB_NAME unset); using in-memory storage"
            );
            Ok(AppServices::in_memory())
        }
    }
}
