//! Student records and their payload shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  entity::Entity,
  patch::Patch,
  validate::{self, Validate, ValidationErrors},
};

/// A persisted student record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
  pub id:         i64,
  pub student_id: String,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub phone:      Option<String>,
  pub major:      Option<String>,
  pub year:       Option<i64>,
  pub gpa:        Option<String>,
  pub is_active:  bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: Option<DateTime<Utc>>,
}

/// Wire shape of `POST /students`.
///
/// Required fields are optional at this layer so validation can report
/// every missing or malformed field in one pass.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentCreate {
  #[serde(default)]
  pub student_id: Option<String>,
  #[serde(default)]
  pub first_name: Option<String>,
  #[serde(default)]
  pub last_name:  Option<String>,
  #[serde(default)]
  pub email:      Option<String>,
  #[serde(default)]
  pub phone:      Option<String>,
  #[serde(default)]
  pub major:      Option<String>,
  #[serde(default)]
  pub year:       Option<i64>,
  #[serde(default)]
  pub gpa:        Option<String>,
  #[serde(default)]
  pub is_active:  Option<bool>,
}

/// A validated create payload, defaults applied.
#[derive(Debug, Clone)]
pub struct NewStudent {
  pub student_id: String,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub phone:      Option<String>,
  pub major:      Option<String>,
  pub year:       Option<i64>,
  pub gpa:        Option<String>,
  pub is_active:  bool,
}

/// Partial update for `PUT /students/{id}`. Absent fields stay untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentUpdate {
  #[serde(default)]
  pub student_id: Patch<String>,
  #[serde(default)]
  pub first_name: Patch<String>,
  #[serde(default)]
  pub last_name:  Patch<String>,
  #[serde(default)]
  pub email:      Patch<String>,
  #[serde(default)]
  pub phone:      Patch<Option<String>>,
  #[serde(default)]
  pub major:      Patch<Option<String>>,
  #[serde(default)]
  pub year:       Patch<Option<i64>>,
  #[serde(default)]
  pub gpa:        Patch<Option<String>>,
  #[serde(default)]
  pub is_active:  Patch<bool>,
}

impl Validate for StudentCreate {
  type Valid = NewStudent;

  fn validate(self) -> Result<NewStudent, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let student_id = validate::required(&mut errors, "student_id", self.student_id);
    let first_name = validate::required(&mut errors, "first_name", self.first_name);
    let last_name = validate::required(&mut errors, "last_name", self.last_name);
    let email = validate::required_email(&mut errors, "email", self.email);

    match (student_id, first_name, last_name, email) {
      (Some(student_id), Some(first_name), Some(last_name), Some(email))
        if errors.is_empty() =>
      {
        Ok(NewStudent {
          student_id,
          first_name,
          last_name,
          email,
          phone: self.phone,
          major: self.major,
          year: self.year,
          gpa: self.gpa,
          is_active: self.is_active.unwrap_or(true),
        })
      }
      _ => Err(errors),
    }
  }
}

impl Validate for StudentUpdate {
  type Valid = Self;

  fn validate(self) -> Result<Self, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    validate::set_nonempty(&mut errors, "student_id", &self.student_id);
    validate::set_nonempty(&mut errors, "first_name", &self.first_name);
    validate::set_nonempty(&mut errors, "last_name", &self.last_name);
    validate::set_email(&mut errors, "email", &self.email);
    errors.into_result()?;
    Ok(self)
  }
}

impl Entity for Student {
  const CODE_FIELD: &'static str = "student_id";
  const NOUN: &'static str = "student";
  const TABLE: &'static str = "students";

  type Create = NewStudent;
  type Payload = StudentCreate;
  type Update = StudentUpdate;

  fn id(&self) -> i64 { self.id }

  fn code(&self) -> &str { &self.student_id }

  fn apply(&mut self, patch: StudentUpdate) {
    patch.student_id.apply_to(&mut self.student_id);
    patch.first_name.apply_to(&mut self.first_name);
    patch.last_name.apply_to(&mut self.last_name);
    patch.email.apply_to(&mut self.email);
    patch.phone.apply_to(&mut self.phone);
    patch.major.apply_to(&mut self.major);
    patch.year.apply_to(&mut self.year);
    patch.gpa.apply_to(&mut self.gpa);
    patch.is_active.apply_to(&mut self.is_active);
  }

  fn touch(&mut self, at: DateTime<Utc>) { self.updated_at = Some(at); }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn valid_create() -> StudentCreate {
    StudentCreate {
      student_id: Some("S1".into()),
      first_name: Some("Ann".into()),
      last_name: Some("Lee".into()),
      email: Some("a@x.com".into()),
      major: Some("CS".into()),
      ..StudentCreate::default()
    }
  }

  #[test]
  fn validate_applies_defaults() {
    let new = valid_create().validate().unwrap();
    assert!(new.is_active);
    assert_eq!(new.major.as_deref(), Some("CS"));
    assert!(new.phone.is_none());
  }

  #[test]
  fn validate_reports_every_problem_at_once() {
    let payload = StudentCreate {
      email: Some("not-an-email".into()),
      last_name: Some("Lee".into()),
      ..StudentCreate::default()
    };

    let errors = payload.validate().unwrap_err();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get("student_id"), Some("field is required"));
    assert_eq!(errors.get("first_name"), Some("field is required"));
    assert_eq!(errors.get("email"), Some("must be a valid email address"));
    assert!(!errors.contains("last_name"));
  }

  #[test]
  fn update_payload_distinguishes_absent_from_null() {
    let patch: StudentUpdate =
      serde_json::from_str(r#"{"major":null,"gpa":"3.9"}"#).unwrap();
    assert_eq!(patch.major, Patch::Set(None));
    assert_eq!(patch.gpa, Patch::Set(Some("3.9".into())));
    assert_eq!(patch.first_name, Patch::Keep);
  }

  #[test]
  fn apply_changes_only_supplied_fields() {
    let mut student = Student {
      id:         1,
      student_id: "S1".into(),
      first_name: "Ann".into(),
      last_name:  "Lee".into(),
      email:      "a@x.com".into(),
      phone:      Some("555-0100".into()),
      major:      Some("CS".into()),
      year:       Some(2),
      gpa:        None,
      is_active:  true,
      created_at: Utc::now(),
      updated_at: None,
    };

    student.apply(StudentUpdate {
      major: Patch::Set(Some("Math".into())),
      phone: Patch::Set(None),
      ..StudentUpdate::default()
    });

    assert_eq!(student.major.as_deref(), Some("Math"));
    assert!(student.phone.is_none());
    assert_eq!(student.first_name, "Ann");
    assert_eq!(student.year, Some(2));
  }

  #[test]
  fn update_validation_rejects_blank_required_fields() {
    let patch = StudentUpdate {
      first_name: Patch::Set("  ".into()),
      email: Patch::Set("bad".into()),
      ..StudentUpdate::default()
    };

    let errors = patch.validate().unwrap_err();
    assert!(errors.contains("first_name"));
    assert!(errors.contains("email"));
  }
}
