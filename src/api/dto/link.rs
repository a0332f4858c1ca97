//! JSON representations of link records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request body for `POST /links`.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    pub target: String,
    /// Optional caller-chosen code; auto-generated when absent.
    #[serde(default)]
    pub code: Option<String>,
}

/// Wire form of a link record.
///
/// Field names are camelCase to match the published API surface.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub code: String,
    pub target: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            target: link.target,
            clicks: link.clicks,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
        }
    }
}

/// Response body for `DELETE /links/{code}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}
