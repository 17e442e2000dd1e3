//! Service layer for the key-value store.
//! - `kv::repository` runs one statement per call on its own store connection.
//! - `kv::service` turns row counts into found / not-found outcomes.
//! - `errors` classifies store failures for the HTTP layer.

pub mod errors;
pub mod kv;
#[cfg(test)]
pub mod test_support;
