//! Business logic services for the application layer.

pub mod collection_service;
pub mod profile_service;
pub mod session_service;

pub use collection_service::CollectionService;
pub use profile_service::ProfileService;
pub use session_service::{Session, SessionService, hmac_hex, run_session_reaper};
