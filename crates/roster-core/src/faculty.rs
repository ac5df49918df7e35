//! Faculty records and their payload shapes.
//!
//! Unlike the other categories, `department` is required here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  entity::Entity,
  patch::Patch,
  validate::{self, Validate, ValidationErrors},
};

/// A persisted faculty record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
  pub id:              i64,
  pub faculty_id:      String,
  pub first_name:      String,
  pub last_name:       String,
  pub email:           String,
  pub phone:           Option<String>,
  pub department:      String,
  pub position:        Option<String>,
  pub office_location: Option<String>,
  pub specialization:  Option<String>,
  pub is_active:       bool,
  pub created_at:      DateTime<Utc>,
  pub updated_at:      Option<DateTime<Utc>>,
}

/// Wire shape of `POST /faculty`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FacultyCreate {
  #[serde(default)]
  pub faculty_id:      Option<String>,
  #[serde(default)]
  pub first_name:      Option<String>,
  #[serde(default)]
  pub last_name:       Option<String>,
  #[serde(default)]
  pub email:           Option<String>,
  #[serde(default)]
  pub phone:           Option<String>,
  #[serde(default)]
  pub department:      Option<String>,
  #[serde(default)]
  pub position:        Option<String>,
  #[serde(default)]
  pub office_location: Option<String>,
  #[serde(default)]
  pub specialization:  Option<String>,
  #[serde(default)]
  pub is_active:       Option<bool>,
}

/// A validated create payload.
#[derive(Debug, Clone)]
pub struct NewFaculty {
  pub faculty_id:      String,
  pub first_name:      String,
  pub last_name:       String,
  pub email:           String,
  pub phone:           Option<String>,
  pub department:      String,
  pub position:        Option<String>,
  pub office_location: Option<String>,
  pub specialization:  Option<String>,
  pub is_active:       bool,
}

/// Partial update for `PUT /faculty/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FacultyUpdate {
  #[serde(default)]
  pub faculty_id:      Patch<String>,
  #[serde(default)]
  pub first_name:      Patch<String>,
  #[serde(default)]
  pub last_name:       Patch<String>,
  #[serde(default)]
  pub email:           Patch<String>,
  #[serde(default)]
  pub phone:           Patch<Option<String>>,
  #[serde(default)]
  pub department:      Patch<String>,
  #[serde(default)]
  pub position:        Patch<Option<String>>,
  #[serde(default)]
  pub office_location: Patch<Option<String>>,
  #[serde(default)]
  pub specialization:  Patch<Option<String>>,
  #[serde(default)]
  pub is_active:       Patch<bool>,
}

impl Validate for FacultyCreate {
  type Valid = NewFaculty;

  fn validate(self) -> Result<NewFaculty, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let faculty_id = validate::required(&mut errors, "faculty_id", self.faculty_id);
    let first_name = validate::required(&mut errors, "first_name", self.first_name);
    let last_name = validate::required(&mut errors, "last_name", self.last_name);
    let email = validate::required_email(&mut errors, "email", self.email);
    let department = validate::required(&mut errors, "department", self.department);

    match (faculty_id, first_name, last_name, email, department) {
      (
        Some(faculty_id),
        Some(first_name),
        Some(last_name),
        Some(email),
        Some(department),
      ) if errors.is_empty() => Ok(NewFaculty {
        faculty_id,
        first_name,
        last_name,
        email,
        phone: self.phone,
        department,
        position: self.position,
        office_location: self.office_location,
        specialization: self.specialization,
        is_active: self.is_active.unwrap_or(true),
      }),
      _ => Err(errors),
    }
  }
}

impl Validate for FacultyUpdate {
  type Valid = Self;

  fn validate(self) -> Result<Self, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    validate::set_nonempty(&mut errors, "faculty_id", &self.faculty_id);
    validate::set_nonempty(&mut errors, "first_name", &self.first_name);
    validate::set_nonempty(&mut errors, "last_name", &self.last_name);
    validate::set_email(&mut errors, "email", &self.email);
    validate::set_nonempty(&mut errors, "department", &self.department);
    errors.into_result()?;
    Ok(self)
  }
}

impl Entity for Faculty {
  const CODE_FIELD: &'static str = "faculty_id";
  const NOUN: &'static str = "faculty member";
  const TABLE: &'static str = "faculty";

  type Create = NewFaculty;
  type Payload = FacultyCreate;
  type Update = FacultyUpdate;

  fn id(&self) -> i64 { self.id }

  fn code(&self) -> &str { &self.faculty_id }

  fn apply(&mut self, patch: FacultyUpdate) {
    patch.faculty_id.apply_to(&mut self.faculty_id);
    patch.first_name.apply_to(&mut self.first_name);
    patch.last_name.apply_to(&mut self.last_name);
    patch.email.apply_to(&mut self.email);
    patch.phone.apply_to(&mut self.phone);
    patch.department.apply_to(&mut self.department);
    patch.position.apply_to(&mut self.position);
    patch.office_location.apply_to(&mut self.office_location);
    patch.specialization.apply_to(&mut self.specialization);
    patch.is_active.apply_to(&mut self.is_active);
  }

  fn touch(&mut self, at: DateTime<Utc>) { self.updated_at = Some(at); }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn department_is_required() {
    let payload = FacultyCreate {
      faculty_id: Some("F1".into()),
      first_name: Some("May".into()),
      last_name: Some("Chen".into()),
      email: Some("may@x.edu".into()),
      ..FacultyCreate::default()
    };

    let errors = payload.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("department"), Some("field is required"));
  }
}
