//! Domain layer: entities and the store contract.

pub mod entities;
pub mod store;

pub use entities::Link;
pub use store::{CreateOutcome, LinkStore};
