//! Error types for `roster-core`.

use thiserror::Error;

use crate::validate::ValidationErrors;

#[derive(Debug, Error)]
pub enum Error {
  /// A payload failed holistic validation.
  #[error(transparent)]
  Validation(#[from] ValidationErrors),

  #[error("{entity} not found: {id}")]
  NotFound { entity: &'static str, id: i64 },

  /// A write collided with an existing row on one of the unique columns.
  #[error("{field} already exists")]
  Duplicate {
    entity: &'static str,
    field:  &'static str,
  },

  /// The backend reported a constraint failure it could not attribute to a
  /// specific column.
  #[error("constraint violation on {table}")]
  Constraint { table: &'static str },

  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
