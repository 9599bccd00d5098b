//! Record storage boundary.
//!
//! Controllers talk to storage only through [`Repository`]. Two backends
//! exist: MySQL (production) and an in-memory map (dev/test).

pub mod in_memory;
pub mod mysql;
pub mod tables;
pub mod r#trait;

pub use in_memory::InMemoryRepository;
pub use mysql::{connect_pool, ConnectError, MySqlQuery, MySqlRepository, MySqlTable};
pub use r#trait::{Repository, StoreError};
