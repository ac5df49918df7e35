//! JSON REST API for the roster service.
//!
//! Exposes an axum [`Router`] backed by any
//! [`RosterStore`](roster_core::store::RosterStore). Transport, CORS, and
//! liveness endpoints are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! Router::new().merge(roster_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod records;

use std::sync::Arc;

use axum::{Router, routing::get};
use roster_core::{
  entity::Entity,
  faculty::Faculty,
  it_staff::ItStaff,
  patient::Patient,
  staff::Staff,
  store::{RecordStore, RosterStore},
  student::Student,
};

pub use error::ApiError;

#[cfg(test)]
mod tests;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be merged into any parent router
/// regardless of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RosterStore + 'static,
{
  Router::new()
    .merge(routes::<S, Student>("/students"))
    .merge(routes::<S, Faculty>("/faculty"))
    .merge(routes::<S, ItStaff>("/it-staff"))
    .merge(routes::<S, Staff>("/staff"))
    .merge(routes::<S, Patient>("/patients"))
    .with_state(store)
}

/// The five CRUD routes for one category.
fn routes<S, E>(base: &str) -> Router<Arc<S>>
where
  S: RecordStore<E> + 'static,
  E: Entity,
{
  Router::new()
    .route(
      base,
      get(records::list::<S, E>).post(records::create::<S, E>),
    )
    .route(
      &format!("{base}/{{id}}"),
      get(records::get_one::<S, E>)
        .put(records::update::<S, E>)
        .delete(records::delete_one::<S, E>),
    )
}
