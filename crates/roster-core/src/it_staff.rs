//! IT staff records and their payload shapes.
//!
//! `role` is required; `department` and `access_level` take documented
//! defaults when omitted from a create payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  entity::Entity,
  patch::Patch,
  validate::{self, Validate, ValidationErrors},
};

pub const DEFAULT_DEPARTMENT: &str = "Information Technology";
pub const DEFAULT_ACCESS_LEVEL: &str = "standard";

/// A persisted IT staff record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItStaff {
  pub id:              i64,
  pub staff_id:        String,
  pub first_name:      String,
  pub last_name:       String,
  pub email:           String,
  pub phone:           Option<String>,
  pub department:      String,
  pub role:            String,
  pub access_level:    String,
  pub office_location: Option<String>,
  pub is_active:       bool,
  pub created_at:      DateTime<Utc>,
  pub updated_at:      Option<DateTime<Utc>>,
}

/// Wire shape of `POST /it-staff`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItStaffCreate {
  #[serde(default)]
  pub staff_id:        Option<String>,
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
  pub role:            Option<String>,
  #[serde(default)]
  pub access_level:    Option<String>,
  #[serde(default)]
  pub office_location: Option<String>,
  #[serde(default)]
  pub is_active:       Option<bool>,
}

/// A validated create payload, defaults applied.
#[derive(Debug, Clone)]
pub struct NewItStaff {
  pub staff_id:        String,
  pub first_name:      String,
  pub last_name:       String,
  pub email:           String,
  pub phone:           Option<String>,
  pub department:      String,
  pub role:            String,
  pub access_level:    String,
  pub office_location: Option<String>,
  pub is_active:       bool,
}

/// Partial update for `PUT /it-staff/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItStaffUpdate {
  #[serde(default)]
  pub staff_id:        Patch<String>,
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
  pub role:            Patch<String>,
  #[serde(default)]
  pub access_level:    Patch<String>,
  #[serde(default)]
  pub office_location: Patch<Option<String>>,
  #[serde(default)]
  pub is_active:       Patch<bool>,
}

impl Validate for ItStaffCreate {
  type Valid = NewItStaff;

  fn validate(self) -> Result<NewItStaff, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let staff_id = validate::required(&mut errors, "staff_id", self.staff_id);
    let first_name = validate::required(&mut errors, "first_name", self.first_name);
    let last_name = validate::required(&mut errors, "last_name", self.last_name);
    let email = validate::required_email(&mut errors, "email", self.email);
    let role = validate::required(&mut errors, "role", self.role);

    match (staff_id, first_name, last_name, email, role) {
      (Some(staff_id), Some(first_name), Some(last_name), Some(email), Some(role))
        if errors.is_empty() =>
      {
        Ok(NewItStaff {
          staff_id,
          first_name,
          last_name,
          email,
          phone: self.phone,
          department: self
            .department
            .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string()),
          role,
          access_level: self
            .access_level
            .unwrap_or_else(|| DEFAULT_ACCESS_LEVEL.to_string()),
          office_location: self.office_location,
          is_active: self.is_active.unwrap_or(true),
        })
      }
      _ => Err(errors),
    }
  }
}

impl Validate for ItStaffUpdate {
  type Valid = Self;

  fn validate(self) -> Result<Self, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    validate::set_nonempty(&mut errors, "staff_id", &self.staff_id);
    validate::set_nonempty(&mut errors, "first_name", &self.first_name);
    validate::set_nonempty(&mut errors, "last_name", &self.last_name);
    validate::set_email(&mut errors, "email", &self.email);
    validate::set_nonempty(&mut errors, "department", &self.department);
    validate::set_nonempty(&mut errors, "role", &self.role);
    validate::set_nonempty(&mut errors, "access_level", &self.access_level);
    errors.into_result()?;
    Ok(self)
  }
}

impl Entity for ItStaff {
  const CODE_FIELD: &'static str = "staff_id";
  const NOUN: &'static str = "IT staff member";
  const TABLE: &'static str = "it_staff";

  type Create = NewItStaff;
  type Payload = ItStaffCreate;
  type Update = ItStaffUpdate;

  fn id(&self) -> i64 { self.id }

  fn code(&self) -> &str { &self.staff_id }

  fn apply(&mut self, patch: ItStaffUpdate) {
    patch.staff_id.apply_to(&mut self.staff_id);
    patch.first_name.apply_to(&mut self.first_name);
    patch.last_name.apply_to(&mut self.last_name);
    patch.email.apply_to(&mut self.email);
    patch.phone.apply_to(&mut self.phone);
    patch.department.apply_to(&mut self.department);
    patch.role.apply_to(&mut self.role);
    patch.access_level.apply_to(&mut self.access_level);
    patch.office_location.apply_to(&mut self.office_location);
    patch.is_active.apply_to(&mut self.is_active);
  }

  fn touch(&mut self, at: DateTime<Utc>) { self.updated_at = Some(at); }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_are_applied_when_omitted() {
    let payload = ItStaffCreate {
      staff_id: Some("IT1".into()),
      first_name: Some("Sam".into()),
      last_name: Some("Ortiz".into()),
      email: Some("sam@x.com".into()),
      role: Some("System Admin".into()),
      ..ItStaffCreate::default()
    };

    let new = payload.validate().unwrap();
    assert_eq!(new.department, DEFAULT_DEPARTMENT);
    assert_eq!(new.access_level, DEFAULT_ACCESS_LEVEL);
  }

  #[test]
  fn explicit_values_beat_defaults() {
    let payload = ItStaffCreate {
      staff_id: Some("IT1".into()),
      first_name: Some("Sam".into()),
      last_name: Some("Ortiz".into()),
      email: Some("sam@x.com".into()),
      role: Some("Developer".into()),
      access_level: Some("admin".into()),
      ..ItStaffCreate::default()
    };

    assert_eq!(payload.validate().unwrap().access_level, "admin");
  }

  #[test]
  fn role_is_required() {
    let payload = ItStaffCreate {
      staff_id: Some("IT1".into()),
      first_name: Some("Sam".into()),
      last_name: Some("Ortiz".into()),
      email: Some("sam@x.com".into()),
      ..ItStaffCreate::default()
    };

    assert!(payload.validate().unwrap_err().contains("role"));
  }
}
