use std::sync::Arc;

use models::kv_entry::Model;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::kv::repository::KeyValueRepository;

/// Application service over a [`KeyValueRepository`].
/// Turns zero-row updates and deletes into [`ServiceError::NotFound`].
#[derive(Clone)]
pub struct KeyValueService {
    repo: Arc<dyn KeyValueRepository>,
}

impl KeyValueService {
    pub fn new(repo: Arc<dyn KeyValueRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip(self, value))]
    pub async fn create(&self, key: &str, value: &str) -> Result<Model, ServiceError> {
        let m = self.repo.create(key, value).await?;
        info!("created");
        Ok(m)
    }

    /// Only the value changes; the key comes from the caller, never the body.
    #[instrument(skip(self, value))]
    pub async fn update(&self, key: &str, value: &str) -> Result<Model, ServiceError> {
        if !self.repo.update(key, value).await? {
            return Err(ServiceError::not_found(key));
        }
        info!("updated");
        Ok(Model { key: key.to_string(), value: Some(value.to_string()) })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, key: &str) -> Result<(), ServiceError> {
        if !self.repo.delete(key).await? {
            return Err(ServiceError::not_found(key));
        }
        info!("deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_repo;

    fn sorted(mut rows: Vec<Model>) -> Vec<(String, Option<String>)> {
        rows.sort_by(|a, b| a.key.cmp(&b.key));
        rows.into_iter().map(|m| (m.key, m.value)).collect()
    }

    #[tokio::test]
    async fn round_trip_create_update_delete() -> Result<(), anyhow::Error> {
        let (repo, path) = temp_repo().await?;
        let svc = KeyValueService::new(Arc::new(repo));

        svc.create("k", "v").await?;
        assert_eq!(sorted(svc.list().await?), vec![("k".into(), Some("v".into()))]);

        let m = svc.update("k", "v2").await?;
        assert_eq!(m.value.as_deref(), Some("v2"));
        assert_eq!(sorted(svc.list().await?), vec![("k".into(), Some("v2".into()))]);

        svc.delete("k").await?;
        assert!(svc.list().await?.is_empty());

        let _ = std::fs::remove_file(&path);
        Ok(())
    }

    #[tokio::test]
    async fn missing_keys_are_not_found_and_leave_others_alone() -> Result<(), anyhow::Error> {
        let (repo, path) = temp_repo().await?;
        let svc = KeyValueService::new(Arc::new(repo));

        svc.create("a", "1").await?;
        svc.create("b", "2").await?;

        assert!(matches!(svc.update("c", "x").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete("c").await, Err(ServiceError::NotFound(_))));

        svc.update("a", "10").await?;
        svc.delete("b").await?;
        assert_eq!(sorted(svc.list().await?), vec![("a".into(), Some("10".into()))]);

        let _ = std::fs::remove_file(&path);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_create_keeps_existing_value() -> Result<(), anyhow::Error> {
        let (repo, path) = temp_repo().await?;
        let svc = KeyValueService::new(Arc::new(repo));

        svc.create("a", "1").await?;
        assert!(matches!(svc.create("a", "2").await, Err(ServiceError::Conflict(_))));
        assert_eq!(sorted(svc.list().await?), vec![("a".into(), Some("1".into()))]);

        let _ = std::fs::remove_file(&path);
        Ok(())
    }
}
