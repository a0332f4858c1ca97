//! Link allocation and management service.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::codegen::{CodeGenerator, is_valid_code, is_valid_target};
use crate::domain::entities::Link;
use crate::domain::store::{CreateOutcome, LinkStore};
use crate::error::AppError;

/// Upper bound on candidate generation per create request.
///
/// At a 62^6 keyspace this ceiling is a defensive limit, not an expected
/// path; hitting it surfaces as [`AppError::AllocationExhausted`].
const MAX_ALLOC_ATTEMPTS: usize = 16;

/// Coordinates code allocation and link management.
///
/// Creation never performs an application-level existence check: the store's
/// conditional insert is the single synchronization point, and a collision
/// on an auto-generated candidate is recovered by drawing a new one.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
    codegen: CodeGenerator,
}

impl LinkService {
    /// Creates a new service over a store and candidate generator.
    pub fn new(store: Arc<dyn LinkStore>, codegen: CodeGenerator) -> Self {
        Self { store, codegen }
    }

    /// Creates a link for `target`, with a caller-chosen code or an
    /// auto-generated one.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidTarget`] if `target` is not an absolute
    ///   http(s) URL
    /// - [`AppError::InvalidCode`] if a supplied custom code fails syntax
    ///   validation
    /// - [`AppError::CodeTaken`] if the custom code is already in use
    ///   (terminal, never retried)
    /// - [`AppError::AllocationExhausted`] if the retry ceiling is hit on
    ///   the auto-generate path
    /// - [`AppError::Store`] on storage failure
    pub async fn create_link(
        &self,
        target: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        if !is_valid_target(&target) {
            return Err(AppError::InvalidTarget);
        }

        match custom_code {
            Some(code) => self.create_with_custom_code(code, target).await,
            None => self.create_with_generated_code(target).await,
        }
    }

    async fn create_with_custom_code(
        &self,
        code: String,
        target: String,
    ) -> Result<Link, AppError> {
        if !is_valid_code(&code) {
            return Err(AppError::InvalidCode { code });
        }

        // One atomic insert decides the race; under concurrent requests for
        // the same code exactly one caller observes Created.
        match self.store.try_create(&code, &target, Utc::now()).await? {
            CreateOutcome::Created(link) => Ok(link),
            CreateOutcome::CodeExists => Err(AppError::CodeTaken { code }),
        }
    }

    async fn create_with_generated_code(&self, target: String) -> Result<Link, AppError> {
        for attempt in 1..=MAX_ALLOC_ATTEMPTS {
            let candidate = self.codegen.candidate();

            match self
                .store
                .try_create(&candidate, &target, Utc::now())
                .await?
            {
                CreateOutcome::Created(link) => return Ok(link),
                CreateOutcome::CodeExists => {
                    debug!(code = %candidate, attempt, "candidate collision, drawing a new code");
                }
            }
        }

        Err(AppError::AllocationExhausted {
            attempts: MAX_ALLOC_ATTEMPTS,
        })
    }

    /// Fetches a link by code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.store
            .get(code)
            .await?
            .ok_or_else(|| AppError::NotFound {
                code: code.to_string(),
            })
    }

    /// Lists all links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.store.list_all().await
    }

    /// Deletes a link by code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if self.store.delete(code).await? {
            Ok(())
        } else {
            Err(AppError::NotFound {
                code: code.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::MockLinkStore;
    use chrono::Utc;

    fn test_link(code: &str, target: &str) -> Link {
        Link::new(code.to_string(), target.to_string(), Utc::now())
    }

    #[tokio::test]
    async fn create_with_generated_code_succeeds_first_try() {
        let mut store = MockLinkStore::new();
        store
            .expect_try_create()
            .times(1)
            .returning(|code, target, now| {
                Ok(CreateOutcome::Created(Link::new(
                    code.to_string(),
                    target.to_string(),
                    now,
                )))
            });

        let service = LinkService::new(Arc::new(store), CodeGenerator::seeded(1));
        let link = service
            .create_link("https://example.com".to_string(), None)
            .await
            .unwrap();

        assert_eq!(link.target, "https://example.com");
        assert!(is_valid_code(&link.code));
        assert_eq!(link.clicks, 0);
    }

    #[tokio::test]
    async fn create_retries_on_collision_with_fresh_candidate() {
        let mut store = MockLinkStore::new();
        let mut calls = 0;
        store.expect_try_create().times(3).returning_st(
            move |code, target, now| {
                calls += 1;
                if calls < 3 {
                    Ok(CreateOutcome::CodeExists)
                } else {
                    Ok(CreateOutcome::Created(Link::new(
                        code.to_string(),
                        target.to_string(),
                        now,
                    )))
                }
            },
        );

        let service = LinkService::new(Arc::new(store), CodeGenerator::seeded(7));
        let result = service
            .create_link("https://example.com".to_string(), None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn create_gives_up_after_retry_ceiling() {
        let mut store = MockLinkStore::new();
        store
            .expect_try_create()
            .times(MAX_ALLOC_ATTEMPTS)
            .returning(|_, _, _| Ok(CreateOutcome::CodeExists));

        let service = LinkService::new(Arc::new(store), CodeGenerator::seeded(2));
        let result = service
            .create_link("https://example.com".to_string(), None)
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::AllocationExhausted { .. }
        ));
    }

    #[tokio::test]
    async fn custom_code_is_used_verbatim() {
        let mut store = MockLinkStore::new();
        store
            .expect_try_create()
            .withf(|code, _, _| code == "MyCode12")
            .times(1)
            .returning(|code, target, now| {
                Ok(CreateOutcome::Created(Link::new(
                    code.to_string(),
                    target.to_string(),
                    now,
                )))
            });

        let service = LinkService::new(Arc::new(store), CodeGenerator::seeded(3));
        let link = service
            .create_link(
                "https://example.com".to_string(),
                Some("MyCode12".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(link.code, "MyCode12");
    }

    #[tokio::test]
    async fn taken_custom_code_is_terminal() {
        let mut store = MockLinkStore::new();
        // exactly one store call: a lost custom-code race is never retried
        store
            .expect_try_create()
            .times(1)
            .returning(|_, _, _| Ok(CreateOutcome::CodeExists));

        let service = LinkService::new(Arc::new(store), CodeGenerator::seeded(4));
        let result = service
            .create_link(
                "https://example.com".to_string(),
                Some("abc123".to_string()),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::CodeTaken { .. }));
    }

    #[tokio::test]
    async fn invalid_target_is_rejected_before_any_store_call() {
        let mut store = MockLinkStore::new();
        store.expect_try_create().times(0);

        let service = LinkService::new(Arc::new(store), CodeGenerator::seeded(5));

        for target in ["ftp://example.com", "not a url", ""] {
            let result = service.create_link(target.to_string(), None).await;
            assert!(matches!(result.unwrap_err(), AppError::InvalidTarget));
        }
    }

    #[tokio::test]
    async fn invalid_custom_code_is_rejected_before_any_store_call() {
        let mut store = MockLinkStore::new();
        store.expect_try_create().times(0);

        let service = LinkService::new(Arc::new(store), CodeGenerator::seeded(6));

        for code in ["abc12", "abc123456", "abc-12", "abc_12", "ab c12"] {
            let result = service
                .create_link(
                    "https://example.com".to_string(),
                    Some(code.to_string()),
                )
                .await;
            assert!(matches!(result.unwrap_err(), AppError::InvalidCode { .. }));
        }
    }

    #[tokio::test]
    async fn get_link_maps_missing_to_not_found() {
        let mut store = MockLinkStore::new();
        store.expect_get().times(1).returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(store), CodeGenerator::seeded(8));
        let result = service.get_link("nosuch1").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_link_maps_missing_to_not_found() {
        let mut store = MockLinkStore::new();
        store.expect_delete().times(1).returning(|_| Ok(false));

        let service = LinkService::new(Arc::new(store), CodeGenerator::seeded(9));
        let result = service.delete_link("nosuch1").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn list_links_passes_through() {
        let mut store = MockLinkStore::new();
        store.expect_list_all().times(1).returning(|| {
            Ok(vec![test_link("abc123", "https://example.com")])
        });

        let service = LinkService::new(Arc::new(store), CodeGenerator::seeded(10));
        let links = service.list_links().await.unwrap();

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].code, "abc123");
    }
}
