//! Patient records and their payload shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  entity::Entity,
  patch::Patch,
  validate::{self, Validate, ValidationErrors},
};

/// A persisted patient record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
  pub id:            i64,
  pub patient_id:    String,
  pub first_name:    String,
  pub last_name:     String,
  pub email:         String,
  pub phone:         Option<String>,
  pub address:       Option<String>,
  pub date_of_birth: Option<String>,
  pub is_active:     bool,
  pub created_at:    DateTime<Utc>,
  pub updated_at:    Option<DateTime<Utc>>,
}

/// Wire shape of `POST /patients`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientCreate {
  #[serde(default)]
  pub patient_id:    Option<String>,
  #[serde(default)]
  pub first_name:    Option<String>,
  #[serde(default)]
  pub last_name:     Option<String>,
  #[serde(default)]
  pub email:         Option<String>,
  #[serde(default)]
  pub phone:         Option<String>,
  #[serde(default)]
  pub address:       Option<String>,
  #[serde(default)]
  pub date_of_birth: Option<String>,
  #[serde(default)]
  pub is_active:     Option<bool>,
}

/// A validated create payload.
#[derive(Debug, Clone)]
pub struct NewPatient {
  pub patient_id:    String,
  pub first_name:    String,
  pub last_name:     String,
  pub email:         String,
  pub phone:         Option<String>,
  pub address:       Option<String>,
  pub date_of_birth: Option<String>,
  pub is_active:     bool,
}

/// Partial update for `PUT /patients/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientUpdate {
  #[serde(default)]
  pub patient_id:    Patch<String>,
  #[serde(default)]
  pub first_name:    Patch<String>,
  #[serde(default)]
  pub last_name:     Patch<String>,
  #[serde(default)]
  pub email:         Patch<String>,
  #[serde(default)]
  pub phone:         Patch<Option<String>>,
  #[serde(default)]
  pub address:       Patch<Option<String>>,
  #[serde(default)]
  pub date_of_birth: Patch<Option<String>>,
  #[serde(default)]
  pub is_active:     Patch<bool>,
}

impl Validate for PatientCreate {
  type Valid = NewPatient;

  fn validate(self) -> Result<NewPatient, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let patient_id = validate::required(&mut errors, "patient_id", self.patient_id);
    let first_name = validate::required(&mut errors, "first_name", self.first_name);
    let last_name = validate::required(&mut errors, "last_name", self.last_name);
    let email = validate::required_email(&mut errors, "email", self.email);

    match (patient_id, first_name, last_name, email) {
      (Some(patient_id), Some(first_name), Some(last_name), Some(email))
        if errors.is_empty() =>
      {
        Ok(NewPatient {
          patient_id,
          first_name,
          last_name,
          email,
          phone: self.phone,
          address: self.address,
          date_of_birth: self.date_of_birth,
          is_active: self.is_active.unwrap_or(true),
        })
      }
      _ => Err(errors),
    }
  }
}

impl Validate for PatientUpdate {
  type Valid = Self;

  fn validate(self) -> Result<Self, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    validate::set_nonempty(&mut errors, "patient_id", &self.patient_id);
    validate::set_nonempty(&mut errors, "first_name", &self.first_name);
    validate::set_nonempty(&mut errors, "last_name", &self.last_name);
    validate::set_email(&mut errors, "email", &self.email);
    errors.into_result()?;
    Ok(self)
  }
}

impl Entity for Patient {
  const CODE_FIELD: &'static str = "patient_id";
  const NOUN: &'static str = "patient";
  const TABLE: &'static str = "patients";

  type Create = NewPatient;
  type Payload = PatientCreate;
  type Update = PatientUpdate;

  fn id(&self) -> i64 { self.id }

  fn code(&self) -> &str { &self.patient_id }

  fn apply(&mut self, patch: PatientUpdate) {
    patch.patient_id.apply_to(&mut self.patient_id);
    patch.first_name.apply_to(&mut self.first_name);
    patch.last_name.apply_to(&mut self.last_name);
    patch.email.apply_to(&mut self.email);
    patch.phone.apply_to(&mut self.phone);
    patch.address.apply_to(&mut self.address);
    patch.date_of_birth.apply_to(&mut self.date_of_birth);
    patch.is_active.apply_to(&mut self.is_active);
  }

  fn touch(&mut self, at: DateTime<Utc>) { self.updated_at = Some(at); }
}
