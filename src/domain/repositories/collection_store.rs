//! Persistence trait shared by every reorderable collection.

use async_trait::async_trait;

use crate::domain::collection::Orderable;
use crate::error::AppError;

/// Persistence interface for one ordered collection.
///
/// Generic over the entity `E` and its draft `D` so a single controller can
/// drive skills, projects, certificates, and social links through the same
/// contract. The remote store is the single arbiter of truth across client
/// sessions; callers must never assume they are the only writer.
///
/// # Implementations
///
/// - `Pg*Store` types in [`crate::infrastructure::persistence`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionStore<E, D>: Send + Sync
where
    E: Orderable,
    D: Send + Sync + 'static,
{
    /// Returns the full collection ordered by ascending `display_order`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn fetch_all(&self) -> Result<Vec<E>, AppError>;

    /// Persists a new record. The store assigns the id and an initial
    /// `display_order` appending the record at the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the store rejects the payload,
    /// [`AppError::Internal`] on database errors.
    async fn insert(&self, draft: D) -> Result<E, AppError>;

    /// Persists field changes for an existing record. Does not alter
    /// `display_order`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches `id`,
    /// [`AppError::Internal`] on database errors.
    async fn update(&self, id: &str, draft: D) -> Result<(), AppError>;

    /// Removes a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches `id`,
    /// [`AppError::Internal`] on database errors.
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// Persists new order values for every listed id in one shot.
    ///
    /// Expected to be all-or-nothing; the Postgres implementations run a
    /// single transaction. Callers roll back by refetching either way, so
    /// a store that cannot honor atomicity still converges.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if any id is unknown,
    /// [`AppError::Internal`] on database errors.
    async fn set_display_orders(&self, orders: &[(String, i32)]) -> Result<(), AppError>;
}
