//! Key-value module: repository (store access) and service (outcome rules).

pub mod repository;
pub mod service;

pub use repository::{KeyValueRepository, SqliteKeyValueRepository};
pub use service::KeyValueService;
