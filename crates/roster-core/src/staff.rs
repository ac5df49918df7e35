//! Generic staff records and their payload shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  entity::Entity,
  patch::Patch,
  validate::{self, Validate, ValidationErrors},
};

/// A persisted staff record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
  pub id:         i64,
  pub staff_id:   String,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub phone:      Option<String>,
  pub department: Option<String>,
  pub role:       Option<String>,
  pub is_active:  bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: Option<DateTime<Utc>>,
}

/// Wire shape of `POST /staff`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaffCreate {
  #[serde(default)]
  pub staff_id:   Option<String>,
  #[serde(default)]
  pub first_name: Option<String>,
  #[serde(default)]
  pub last_name:  Option<String>,
  #[serde(default)]
  pub email:      Option<String>,
  #[serde(default)]
  pub phone:      Option<String>,
  #[serde(default)]
  pub department: Option<String>,
  #[serde(default)]
  pub role:       Option<String>,
  #[serde(default)]
  pub is_active:  Option<bool>,
}

/// A validated create payload.
#[derive(Debug, Clone)]
pub struct NewStaff {
  pub staff_id:   String,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub phone:      Option<String>,
  pub department: Option<String>,
  pub role:       Option<String>,
  pub is_active:  bool,
}

/// Partial update for `PUT /staff/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaffUpdate {
  #[serde(default)]
  pub staff_id:   Patch<String>,
  #[serde(default)]
  pub first_name: Patch<String>,
  #[serde(default)]
  pub last_name:  Patch<String>,
  #[serde(default)]
  pub email:      Patch<String>,
  #[serde(default)]
  pub phone:      Patch<Option<String>>,
  #[serde(default)]
  pub department: Patch<Option<String>>,
  #[serde(default)]
  pub role:       Patch<Option<String>>,
  #[serde(default)]
  pub is_active:  Patch<bool>,
}

impl Validate for StaffCreate {
  type Valid = NewStaff;

  fn validate(self) -> Result<NewStaff, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let staff_id = validate::required(&mut errors, "staff_id", self.staff_id);
    let first_name = validate::required(&mut errors, "first_name", self.first_name);
    let last_name = validate::required(&mut errors, "last_name", self.last_name);
    let email = validate::required_email(&mut errors, "email", self.email);

    match (staff_id, first_name, last_name, email) {
      (Some(staff_id), Some(first_name), Some(last_name), Some(email))
        if errors.is_empty() =>
      {
        Ok(NewStaff {
          staff_id,
          first_name,
          last_name,
          email,
          phone: self.phone,
          department: self.department,
          role: self.role,
          is_active: self.is_active.unwrap_or(true),
        })
      }
      _ => Err(errors),
    }
  }
}

impl Validate for StaffUpdate {
  type Valid = Self;

  fn validate(self) -> Result<Self, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    validate::set_nonempty(&mut errors, "staff_id", &self.staff_id);
    validate::set_nonempty(&mut errors, "first_name", &self.first_name);
    validate::set_nonempty(&mut errors, "last_name", &self.last_name);
    validate::set_email(&mut errors, "email", &self.email);
    errors.into_result()?;
    Ok(self)
  }
}

impl Entity for Staff {
  const CODE_FIELD: &'static str = "staff_id";
  const NOUN: &'static str = "staff member";
  const TABLE: &'static str = "staff";

  type Create = NewStaff;
  type Payload = StaffCreate;
  type Update = StaffUpdate;

  fn id(&self) -> i64 { self.id }

  fn code(&self) -> &str { &self.staff_id }

  fn apply(&mut self, patch: StaffUpdate) {
    patch.staff_id.apply_to(&mut self.staff_id);
    patch.first_name.apply_to(&mut self.first_name);
    patch.last_name.apply_to(&mut self.last_name);
    patch.email.apply_to(&mut self.email);
    patch.phone.apply_to(&mut self.phone);
    patch.department.apply_to(&mut self.department);
    patch.role.apply_to(&mut self.role);
    patch.is_active.apply_to(&mut self.is_active);
  }

  fn touch(&mut self, at: DateTime<Utc>) { self.updated_at = Some(at); }
}
