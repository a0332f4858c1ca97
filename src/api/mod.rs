//! API layer: handlers, DTOs, and routing.

pub mod dto;
pub mod handlers;
pub mod routes;
