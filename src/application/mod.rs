//! Application layer: business logic over the store contract.

pub mod services;
