//! Generic CRUD handlers, instantiated once per category by the router.
//!
//! | Method   | Path    | Outcome |
//! |----------|---------|---------|
//! | `POST`   | `/`     | 201 + record, 400 on validation/duplicate |
//! | `GET`    | `/`     | 200 + page (`?skip=&limit=`) |
//! | `GET`    | `/{id}` | 200 or 404 |
//! | `PUT`    | `/{id}` | 200 + updated record, 404, 400 |
//! | `DELETE` | `/{id}` | 204 or 404 |
//!
//! Handlers never probe for duplicates before writing; the store's atomic
//! insert failure is the single source of duplicate detection.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  entity::Entity,
  store::{Page, RecordStore},
  validate::Validate,
};
use serde::Deserialize;

use crate::error::ApiError;

/// `?skip=&limit=` query parameters for list endpoints.
#[derive(Debug, Deserialize)]
pub struct ListParams {
  #[serde(default)]
  pub skip:  usize,
  #[serde(default = "default_limit")]
  pub limit: usize,
}

fn default_limit() -> usize { 100 }

/// `POST /{entity}`
pub async fn create<S, E>(
  State(store): State<Arc<S>>,
  payload: Result<Json<E::Payload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore<E>,
  E: Entity,
{
  let Json(payload) = payload.map_err(bad_body)?;
  let input = payload.validate().map_err(ApiError::Validation)?;
  let record = store.create(input).await?;
  Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /{entity}?skip=0&limit=100`
pub async fn list<S, E>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<E>>, ApiError>
where
  S: RecordStore<E>,
  E: Entity,
{
  let page = Page { offset: params.skip, limit: params.limit };
  let records = store.list(page).await?;
  Ok(Json(records))
}

/// `GET /{entity}/{id}`
pub async fn get_one<S, E>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<E>, ApiError>
where
  S: RecordStore<E>,
  E: Entity,
{
  let record = store
    .get(id)
    .await?
    .ok_or_else(|| not_found::<E>(id))?;
  Ok(Json(record))
}

/// `PUT /{entity}/{id}`
pub async fn update<S, E>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  patch: Result<Json<E::Update>, JsonRejection>,
) -> Result<Json<E>, ApiError>
where
  S: RecordStore<E>,
  E: Entity,
{
  let Json(patch) = patch.map_err(bad_body)?;
  let patch = patch.validate().map_err(ApiError::Validation)?;
  let record = store.update(id, patch).await?;
  Ok(Json(record))
}

/// `DELETE /{entity}/{id}`
pub async fn delete_one<S, E>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: RecordStore<E>,
  E: Entity,
{
  if store.delete(id).await? {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(not_found::<E>(id))
  }
}

fn not_found<E: Entity>(id: i64) -> ApiError {
  ApiError::NotFound(format!("{} not found: {id}", E::NOUN))
}

fn bad_body(rejection: JsonRejection) -> ApiError {
  ApiError::BadRequest(rejection.body_text())
}
