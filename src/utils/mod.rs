//! Utility functions shared across layers.
//!
//! - [`token`] - session token generation
//! - [`file_name`] - upload file name sanitization

pub mod file_name;
pub mod token;
