//! Infrastructure layer: database configuration and record repositories.

pub mod config;
pub mod repository;

pub use config::{ConfigError, DatabaseConfig};
pub use repository::{
    connect_pool, ConnectError, InMemoryRepository, MySqlRepository, MySqlTable, Repository,
    StoreError,
};
