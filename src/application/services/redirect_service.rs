//! Redirect resolution service.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::domain::entities::Link;
use crate::domain::store::LinkStore;
use crate::error::AppError;

/// Resolves short codes for redirecting visitors.
///
/// Resolution and counting are one store operation: the resolver never
/// looks a record up and fires the increment separately, so a visit either
/// counts and redirects, or does neither. A code deleted between request
/// arrival and resolution yields [`AppError::NotFound`], not a stale
/// redirect.
pub struct RedirectService {
    store: Arc<dyn LinkStore>,
}

impl RedirectService {
    /// Creates a new resolver over a store.
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Records a visit to `code` and returns the post-increment record,
    /// whose `target` the caller redirects to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes; this is an
    /// expected outcome, not a failure. Returns [`AppError::Store`] on
    /// storage failure.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        match self.store.increment_and_touch(code, Utc::now()).await? {
            Some(link) => Ok(link),
            None => {
                debug!(code, "resolve miss");
                Err(AppError::NotFound {
                    code: code.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::MockLinkStore;

    #[tokio::test]
    async fn resolve_returns_post_increment_record() {
        let mut store = MockLinkStore::new();
        store
            .expect_increment_and_touch()
            .withf(|code, _| code == "abc123")
            .times(1)
            .returning(|code, now| {
                let mut link = Link::new(
                    code.to_string(),
                    "https://example.com/page".to_string(),
                    now,
                );
                link.clicks = 1;
                link.last_clicked = Some(now);
                Ok(Some(link))
            });

        let service = RedirectService::new(Arc::new(store));
        let link = service.resolve("abc123").await.unwrap();

        assert_eq!(link.target, "https://example.com/page");
        assert_eq!(link.clicks, 1);
        assert!(link.last_clicked.is_some());
    }

    #[tokio::test]
    async fn resolve_unknown_code_is_not_found() {
        let mut store = MockLinkStore::new();
        store
            .expect_increment_and_touch()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = RedirectService::new(Arc::new(store));
        let result = service.resolve("nosuch1").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn resolve_never_reads_without_counting() {
        let mut store = MockLinkStore::new();
        // get() must not be called; the increment is the lookup
        store.expect_get().times(0);
        store
            .expect_increment_and_touch()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = RedirectService::new(Arc::new(store));
        let _ = service.resolve("abc123").await;
    }
}
