//! Request and response DTOs.

pub mod health;
pub mod link;

pub use health::HealthResponse;
pub use link::{CreateLinkRequest, DeleteResponse, LinkResponse};
