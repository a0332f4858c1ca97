//! In-process implementation of the link store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::entities::Link;
use crate::domain::store::{CreateOutcome, LinkStore};
use crate::error::AppError;

/// In-memory link store.
///
/// Serves two roles: the backing store when no `DATABASE_URL` is configured,
/// and the store used by integration tests. Each mutating operation holds
/// the write lock for its whole critical section, which gives it the same
/// atomicity guarantees as the single-statement SQL in the Postgres store.
#[derive(Default)]
pub struct MemoryLinkStore {
    links: RwLock<HashMap<String, Link>>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn try_create(
        &self,
        code: &str,
        target: &str,
        now: DateTime<Utc>,
    ) -> Result<CreateOutcome, AppError> {
        let mut links = self.links.write().await;

        if links.contains_key(code) {
            return Ok(CreateOutcome::CodeExists);
        }

        let link = Link::new(code.to_string(), target.to_string(), now);
        links.insert(code.to_string(), link.clone());

        Ok(CreateOutcome::Created(link))
    }

    async fn increment_and_touch(
        &self,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Link>, AppError> {
        let mut links = self.links.write().await;

        Ok(links.get_mut(code).map(|link| {
            link.clicks += 1;
            link.last_clicked = Some(now);
            link.clone()
        }))
    }

    async fn get(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.read().await.get(code).cloned())
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.links.write().await.remove(code).is_some())
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self.links.read().await.values().cloned().collect();
        links.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.code.cmp(&a.code))
        });
        Ok(links)
    }
}
