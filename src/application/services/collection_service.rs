//! Generic controller for one user-orderable collection.
//!
//! One instance is created per collection (social links, skills, projects,
//! certificates); all four share this code instead of near-duplicated
//! per-entity handlers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::collection::{
    Orderable, assign_display_orders, ensure_stable_ids, move_entity, order_payload,
};
use crate::domain::repositories::{Bucket, CollectionStore, FileStore, PendingUpload, UploadTarget};
use crate::error::AppError;

/// Owns the in-memory ordered copy of one collection and keeps the remote
/// store consistent with what is displayed.
///
/// # Failure semantics
///
/// - `reorder` is optimistic-then-reconcile: the new sequence is published
///   before the bulk order update is sent; on failure the canonical
///   collection is refetched (never an inverse move, since other writers
///   may have changed the data in the meantime).
/// - `add` / `update_entry` / `remove` are pessimistic: the store must
///   confirm before the in-memory copy changes, and success triggers a full
///   refetch so server-assigned fields (id, timestamps, normalized
///   display_order) are authoritative.
///
/// # Concurrency
///
/// Operations from distinct gestures are not queued against each other.
/// Overlapping reorders are last-writer-wins on the in-memory copy; a
/// second reorder's optimistic base is whatever the first already
/// published. A `saving` flag rejects duplicate add/update submissions for
/// the same collection while one is in flight.
pub struct CollectionService<E, D>
where
    E: Orderable,
    D: Send + Sync + 'static,
{
    label: &'static str,
    store: Arc<dyn CollectionStore<E, D>>,
    files: Arc<dyn FileStore>,
    items: RwLock<Vec<E>>,
    saving: AtomicBool,
}

/// Clears the in-flight save flag when a save finishes, successful or not.
struct SaveGuard<'a>(&'a AtomicBool);

impl Drop for SaveGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<E, D> CollectionService<E, D>
where
    E: Orderable,
    D: UploadTarget + Send + Sync + 'static,
{
    /// Creates a controller for one collection.
    ///
    /// The collection starts empty and is populated by the first
    /// [`Self::refresh`].
    pub fn new(
        label: &'static str,
        store: Arc<dyn CollectionStore<E, D>>,
        files: Arc<dyn FileStore>,
    ) -> Self {
        Self {
            label,
            store,
            files,
            items: RwLock::new(Vec::new()),
            saving: AtomicBool::new(false),
        }
    }

    /// Returns a snapshot of the currently displayed sequence.
    pub async fn items(&self) -> Vec<E> {
        self.items.read().await.clone()
    }

    /// Fetches the canonical collection and replaces the in-memory copy.
    pub async fn refresh(&self) -> Result<Vec<E>, AppError> {
        let fetched = self.store.fetch_all().await?;
        let mut items = self.items.write().await;
        *items = fetched;
        Ok(items.clone())
    }

    /// Moves the entity at `source` to `target` and persists the new order.
    ///
    /// The displayed sequence is replaced before the bulk update is issued;
    /// every entity is assigned `display_order = index`. On persistence
    /// failure the collection is restored by refetching the canonical
    /// state, and the original error propagates.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] when an index is out of range
    /// - [`AppError::Internal`] when an entity lacks a stable id (checked
    ///   before anything is displayed or sent)
    /// - whatever the store returns on bulk-update failure
    pub async fn reorder(&self, source: usize, target: usize) -> Result<Vec<E>, AppError> {
        let (snapshot, payload) = {
            let mut items = self.items.write().await;
            if source == target && source < items.len() {
                return Ok(items.clone());
            }
            ensure_stable_ids(&items)?;
            move_entity(&mut items, source, target)?;
            assign_display_orders(&mut items);
            (items.clone(), order_payload(&items))
        };

        match self.store.set_display_orders(&payload).await {
            Ok(()) => {
                tracing::info!(collection = self.label, "display order updated");
                Ok(snapshot)
            }
            Err(err) => {
                tracing::warn!(
                    collection = self.label,
                    error = ?err,
                    "bulk order update failed, refetching canonical order"
                );
                if let Err(refetch_err) = self.refresh().await {
                    tracing::error!(
                        collection = self.label,
                        error = ?refetch_err,
                        "rollback refetch failed"
                    );
                }
                Err(err)
            }
        }
    }

    /// Creates a new entity, uploading a pending file first when present.
    ///
    /// An upload failure aborts the whole operation before the store is
    /// called. On success the collection is refetched (no local splicing)
    /// so the server-assigned id and display_order are authoritative. On
    /// failure the in-memory copy is untouched, so the caller can retain
    /// its form state.
    pub async fn add(
        &self,
        mut draft: D,
        pending: Option<(PendingUpload, Bucket)>,
    ) -> Result<Vec<E>, AppError> {
        let _guard = self.begin_save()?;
        self.resolve_upload(&mut draft, pending).await?;
        let created = self.store.insert(draft).await?;
        tracing::info!(collection = self.label, id = created.id(), "entity created");
        self.refresh().await
    }

    /// Updates an existing entity, uploading a pending file first when
    /// present. Same failure semantics as [`Self::add`].
    pub async fn update_entry(
        &self,
        id: &str,
        mut draft: D,
        pending: Option<(PendingUpload, Bucket)>,
    ) -> Result<Vec<E>, AppError> {
        let _guard = self.begin_save()?;
        self.resolve_upload(&mut draft, pending).await?;
        match self.store.update(id, draft).await {
            Ok(()) => {
                tracing::info!(collection = self.label, id, "entity updated");
                self.refresh().await
            }
            Err(err @ AppError::NotFound { .. }) => {
                self.resync_after_missing(id).await;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Deletes an entity. The caller must have obtained explicit user
    /// confirmation before this is invoked; without it no request is made.
    ///
    /// There is no optimistic removal: on failure the entity stays visible.
    pub async fn remove(&self, id: &str, confirmed: bool) -> Result<Vec<E>, AppError> {
        if !confirmed {
            return Err(AppError::bad_request(
                "Deletion requires confirmation",
                json!({ "collection": self.label, "id": id }),
            ));
        }

        match self.store.delete(id).await {
            Ok(()) => {
                tracing::info!(collection = self.label, id, "entity deleted");
                self.refresh().await
            }
            Err(err @ AppError::NotFound { .. }) => {
                self.resync_after_missing(id).await;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    async fn resolve_upload(
        &self,
        draft: &mut D,
        pending: Option<(PendingUpload, Bucket)>,
    ) -> Result<(), AppError> {
        if let Some((upload, bucket)) = pending {
            let url = self.files.put(upload, bucket).await?;
            draft.attach_upload(url);
        }
        Ok(())
    }

    /// The record vanished under us (deleted elsewhere); resync the
    /// displayed collection before the error is surfaced.
    async fn resync_after_missing(&self, id: &str) {
        tracing::warn!(collection = self.label, id, "record vanished, refetching");
        if let Err(err) = self.refresh().await {
            tracing::error!(collection = self.label, error = ?err, "resync refetch failed");
        }
    }

    fn begin_save(&self) -> Result<SaveGuard<'_>, AppError> {
        if self
            .saving
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AppError::conflict(
                "A save for this collection is already in progress",
                json!({ "collection": self.label }),
            ));
        }
        Ok(SaveGuard(&self.saving))
    }
}
