//! The `RecordStore` trait and paging parameters.
//!
//! The trait is implemented by storage backends (e.g.
//! `roster-store-sqlite`). Higher layers (`roster-api`, `roster-server`)
//! depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  Result,
  entity::Entity,
  faculty::Faculty,
  it_staff::ItStaff,
  patient::Patient,
  staff::Staff,
  student::Student,
};

// ─── Paging ──────────────────────────────────────────────────────────────────

/// Offset/limit window for [`RecordStore::list`].
///
/// Both values are unsigned, so non-negativity holds by construction. No
/// upper bound is enforced on `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
  pub offset: usize,
  pub limit:  usize,
}

impl Default for Page {
  fn default() -> Self { Self { offset: 0, limit: 100 } }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a roster storage backend for one category.
///
/// Uniqueness of the external code and email columns is enforced by the
/// backend as part of the write itself. Implementations must not substitute
/// a lookup-then-insert sequence: that races under concurrent writers, and
/// callers rely on the atomic failure signal.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RecordStore<E: Entity>: Send + Sync {
  /// Persist a new record built from a validated create payload.
  ///
  /// The store assigns the id and `created_at`; `updated_at` starts absent.
  /// Fails with [`Error::Duplicate`](crate::Error::Duplicate) when the
  /// external code or email is already taken in this category's table.
  fn create(
    &self,
    input: E::Create,
  ) -> impl Future<Output = Result<E>> + Send + '_;

  /// Retrieve a record by internal id. Returns `None` if not found.
  fn get(&self, id: i64) -> impl Future<Output = Result<Option<E>>> + Send + '_;

  /// Retrieve a record by its external code. Returns `None` if not found.
  ///
  /// Callers wanting to pre-check existence before a create should prefer
  /// calling [`create`](Self::create) directly and handling its duplicate
  /// failure; a probe-then-insert sequence is racy.
  fn get_by_code<'a>(
    &'a self,
    code: &'a str,
  ) -> impl Future<Output = Result<Option<E>>> + Send + 'a;

  /// Return a page of records in stable ascending-id order.
  fn list(&self, page: Page)
  -> impl Future<Output = Result<Vec<E>>> + Send + '_;

  /// Apply a partial update to the record with internal id `id`.
  ///
  /// Only fields explicitly present in `patch` change; `created_at` is
  /// never rewritten, and `updated_at` is set to the mutation time. Fails
  /// with `NotFound` when the id does not exist and `Duplicate` when a
  /// changed unique column collides with another record.
  fn update(
    &self,
    id: i64,
    patch: E::Update,
  ) -> impl Future<Output = Result<E>> + Send + '_;

  /// Remove a record permanently. Returns `false` when there was nothing
  /// to delete — deletion is idempotent in effect, not an error.
  fn delete(&self, id: i64) -> impl Future<Output = Result<bool>> + Send + '_;
}

/// A backend that stores every roster category.
pub trait RosterStore:
  RecordStore<Student>
  + RecordStore<Faculty>
  + RecordStore<ItStaff>
  + RecordStore<Staff>
  + RecordStore<Patient>
{
}

impl<S> RosterStore for S where
  S: RecordStore<Student>
    + RecordStore<Faculty>
    + RecordStore<ItStaff>
    + RecordStore<Staff>
    + RecordStore<Patient>
{
}
