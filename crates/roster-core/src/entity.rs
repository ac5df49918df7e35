//! The [`Entity`] trait — the per-category descriptor.
//!
//! The five roster categories are structurally near-identical; everything
//! that actually varies between them (table name, external-code column,
//! payload shapes, how a partial update lands on a record) is expressed
//! through this trait so stores and handlers are written once and
//! instantiated five times.

use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};

use crate::validate::Validate;

/// One roster category: a persisted record type plus its payload shapes.
pub trait Entity: Clone + Serialize + Send + Sync + 'static {
  /// Storage table name, e.g. `"students"`.
  const TABLE: &'static str;
  /// Field name of the external code column, e.g. `"student_id"`.
  const CODE_FIELD: &'static str;
  /// Singular noun used in error messages and logs.
  const NOUN: &'static str;

  /// Wire shape of a create request body.
  type Payload: Validate<Valid = Self::Create> + DeserializeOwned + Send + 'static;
  /// A create payload that passed validation, defaults applied.
  type Create: Send + 'static;
  /// Partial-update request body; every field is a
  /// [`Patch`](crate::patch::Patch).
  type Update: Validate<Valid = Self::Update> + DeserializeOwned + Send + 'static;

  fn id(&self) -> i64;

  /// The record's external code.
  fn code(&self) -> &str;

  /// Overwrite exactly the fields set in `patch`; absent fields are left
  /// untouched.
  fn apply(&mut self, patch: Self::Update);

  /// Record the time of a successful mutation.
  fn touch(&mut self, at: DateTime<Utc>);
}
