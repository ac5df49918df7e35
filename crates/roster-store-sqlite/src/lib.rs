//! SQLite backend for the roster store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! thread without blocking the async runtime. A single generic
//! [`RecordStore`](roster_core::store::RecordStore) implementation serves
//! all five categories; the per-table differences live in the `record`
//! descriptors.

mod encode;
mod record;
mod schema;
mod store;

pub use store::SqliteStore;
