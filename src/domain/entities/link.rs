//! Link entity representing a short code to target URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL mapping with its visit counters.
///
/// The short `code` is the primary key; uniqueness is enforced by the
/// storage layer, not by application-level checks.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Link {
    pub code: String,
    pub target: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a fresh link with zero clicks and no recorded visit.
    pub fn new(code: String, target: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            target,
            clicks: 0,
            last_clicked: None,
            created_at,
        }
    }

    /// Returns true if the link has been visited at least once.
    pub fn visited(&self) -> bool {
        self.last_clicked.is_some()
    }
}
