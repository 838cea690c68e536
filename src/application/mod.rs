//! Application layer orchestrating domain logic through services.

pub mod services;
