//! Repository trait definitions for the domain layer.
//!
//! These traits are the external collaborators of the application services:
//! a table-per-collection persistence interface and an object-storage
//! interface. Concrete implementations live in
//! `crate::infrastructure::persistence` and `crate::infrastructure::storage`.
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` under `cfg(test)`;
//! the controller unit tests drive every failure path through them.

pub mod collection_store;
pub mod file_store;
pub mod profile_store;

pub use collection_store::CollectionStore;
pub use file_store::{Bucket, FileStore, PendingUpload, UploadTarget};
pub use profile_store::ProfileStore;

#[cfg(test)]
pub use collection_store::MockCollectionStore;
#[cfg(test)]
pub use file_store::MockFileStore;
#[cfg(test)]
pub use profile_store::MockProfileStore;
