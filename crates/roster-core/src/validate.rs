//! Holistic payload validation.
//!
//! Validation never stops at the first bad field: every missing or
//! malformed field is collected into a [`ValidationErrors`] map in one
//! pass, so a caller sees the full list of problems at once.

use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use crate::patch::Patch;

/// A payload that can be checked and turned into its validated form.
pub trait Validate {
  /// The value produced when validation succeeds.
  type Valid;

  fn validate(self) -> Result<Self::Valid, ValidationErrors>;
}

// ─── ValidationErrors ────────────────────────────────────────────────────────

/// Field → problem map produced by a failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
  pub fn push(&mut self, field: &'static str, problem: impl Into<String>) {
    self.0.insert(field, problem.into());
  }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn get(&self, field: &str) -> Option<&str> {
    self.0.get(field).map(String::as_str)
  }

  pub fn contains(&self, field: &str) -> bool { self.0.contains_key(field) }

  pub fn len(&self) -> usize { self.0.len() }

  pub fn into_result(self) -> Result<(), Self> {
    if self.is_empty() { Ok(()) } else { Err(self) }
  }
}

impl fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let fields: Vec<&str> = self.0.keys().copied().collect();
    write!(f, "invalid fields: {}", fields.join(", "))
  }
}

impl std::error::Error for ValidationErrors {}

// ─── Field checks ────────────────────────────────────────────────────────────

/// Consume a required string field, recording a problem when it is missing
/// or blank.
pub fn required(
  errors: &mut ValidationErrors,
  field:  &'static str,
  value:  Option<String>,
) -> Option<String> {
  match value {
    Some(v) if !v.trim().is_empty() => Some(v),
    Some(_) => {
      errors.push(field, "must not be empty");
      None
    }
    None => {
      errors.push(field, "field is required");
      None
    }
  }
}

/// Consume a required email field; must be present and email-shaped.
pub fn required_email(
  errors: &mut ValidationErrors,
  field:  &'static str,
  value:  Option<String>,
) -> Option<String> {
  match required(errors, field, value) {
    Some(v) if is_email(&v) => Some(v),
    Some(_) => {
      errors.push(field, "must be a valid email address");
      None
    }
    None => None,
  }
}

/// Check a patch field that, when present, must be a non-empty string.
pub fn set_nonempty(
  errors: &mut ValidationErrors,
  field:  &'static str,
  patch:  &Patch<String>,
) {
  if let Patch::Set(v) = patch
    && v.trim().is_empty()
  {
    errors.push(field, "must not be empty");
  }
}

/// Check a patch field that, when present, must be email-shaped.
pub fn set_email(
  errors: &mut ValidationErrors,
  field:  &'static str,
  patch:  &Patch<String>,
) {
  match patch {
    Patch::Set(v) if v.trim().is_empty() => {
      errors.push(field, "must not be empty");
    }
    Patch::Set(v) if !is_email(v) => {
      errors.push(field, "must be a valid email address");
    }
    _ => {}
  }
}

/// Minimal structural email check: one `@`, a non-empty local part, a
/// dotted domain, no whitespace.
pub fn is_email(s: &str) -> bool {
  if s.chars().any(char::is_whitespace) {
    return false;
  }
  let Some((local, domain)) = s.split_once('@') else {
    return false;
  };
  !local.is_empty()
    && domain.contains('.')
    && !domain.starts_with('.')
    && !domain.ends_with('.')
    && !domain.contains('@')
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_ordinary_addresses() {
    assert!(is_email("a@x.com"));
    assert!(is_email("first.last+tag@sub.example.org"));
  }

  #[test]
  fn rejects_malformed_addresses() {
    assert!(!is_email("not-an-email"));
    assert!(!is_email("@x.com"));
    assert!(!is_email("a@nodot"));
    assert!(!is_email("a@.com"));
    assert!(!is_email("a@x.com "));
    assert!(!is_email("a@b@c.com"));
  }

  #[test]
  fn required_collects_missing_and_blank() {
    let mut errors = ValidationErrors::default();
    assert!(required(&mut errors, "first_name", None).is_none());
    assert!(required(&mut errors, "last_name", Some("  ".into())).is_none());
    assert_eq!(
      required(&mut errors, "email", Some("a@x.com".into())).as_deref(),
      Some("a@x.com"),
    );

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("first_name"), Some("field is required"));
    assert_eq!(errors.get("last_name"), Some("must not be empty"));
  }

  #[test]
  fn display_lists_fields() {
    let mut errors = ValidationErrors::default();
    errors.push("email", "must be a valid email address");
    errors.push("student_id", "field is required");
    assert_eq!(errors.to_string(), "invalid fields: email, student_id");
  }
}
