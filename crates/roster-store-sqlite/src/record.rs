//! Row mapping between roster entities and their SQLite tables.
//!
//! [`SqlRecord`] is the per-category descriptor consumed by the generic
//! store implementation: the column list plus the conversions into and out
//! of a row. Column order is significant — `COLUMNS`, `column_values`, and
//! `from_row` must all agree, and `created_at`/`updated_at` come last so
//! the write-once `created_at` can be skipped by UPDATE statements.

use chrono::{DateTime, Utc};
use roster_core::{
  entity::Entity,
  faculty::{Faculty, NewFaculty},
  it_staff::{ItStaff, NewItStaff},
  patient::{NewPatient, Patient},
  staff::{NewStaff, Staff},
  student::{NewStudent, Student},
};
use rusqlite::{Row, types::Value};

use crate::encode::{dt_col, encode_dt, opt_dt_col};

/// Column list and row conversions for one category's table.
pub(crate) trait SqlRecord: Entity {
  /// Every column after `id`, in the exact order used by the generated
  /// INSERT, SELECT, and UPDATE statements.
  const COLUMNS: &'static [&'static str];

  /// Materialise a not-yet-persisted record from a validated create
  /// payload. The id is a placeholder until the row is inserted.
  fn build(input: Self::Create, created_at: DateTime<Utc>) -> Self;

  fn assign_id(&mut self, id: i64);

  /// Values for `COLUMNS`, in order.
  fn column_values(&self) -> Vec<Value>;

  /// Read a row shaped `SELECT id, {COLUMNS}`.
  fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

// ─── Student ─────────────────────────────────────────────────────────────────

impl SqlRecord for Student {
  const COLUMNS: &'static [&'static str] = &[
    "student_id",
    "first_name",
    "last_name",
    "email",
    "phone",
    "major",
    "year",
    "gpa",
    "is_active",
    "created_at",
    "updated_at",
  ];

  fn build(input: NewStudent, created_at: DateTime<Utc>) -> Self {
    Self {
      id: 0,
      student_id: input.student_id,
      first_name: input.first_name,
      last_name: input.last_name,
      email: input.email,
      phone: input.phone,
      major: input.major,
      year: input.year,
      gpa: input.gpa,
      is_active: input.is_active,
      created_at,
      updated_at: None,
    }
  }

  fn assign_id(&mut self, id: i64) { self.id = id; }

  fn column_values(&self) -> Vec<Value> {
    vec![
      self.student_id.clone().into(),
      self.first_name.clone().into(),
      self.last_name.clone().into(),
      self.email.clone().into(),
      self.phone.clone().into(),
      self.major.clone().into(),
      self.year.into(),
      self.gpa.clone().into(),
      self.is_active.into(),
      encode_dt(self.created_at).into(),
      self.updated_at.map(encode_dt).into(),
    ]
  }

  fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      student_id: row.get(1)?,
      first_name: row.get(2)?,
      last_name:  row.get(3)?,
      email:      row.get(4)?,
      phone:      row.get(5)?,
      major:      row.get(6)?,
      year:       row.get(7)?,
      gpa:        row.get(8)?,
      is_active:  row.get(9)?,
      created_at: dt_col(row, 10)?,
      updated_at: opt_dt_col(row, 11)?,
    })
  }
}

// ─── Faculty ─────────────────────────────────────────────────────────────────

impl SqlRecord for Faculty {
  const COLUMNS: &'static [&'static str] = &[
    "faculty_id",
    "first_name",
    "last_name",
    "email",
    "phone",
    "department",
    "position",
    "office_location",
    "specialization",
    "is_active",
    "created_at",
    "updated_at",
  ];

  fn build(input: NewFaculty, created_at: DateTime<Utc>) -> Self {
    Self {
      id: 0,
      faculty_id: input.faculty_id,
      first_name: input.first_name,
      last_name: input.last_name,
      email: input.email,
      phone: input.phone,
      department: input.department,
      position: input.position,
      office_location: input.office_location,
      specialization: input.specialization,
      is_active: input.is_active,
      created_at,
      updated_at: None,
    }
  }

  fn assign_id(&mut self, id: i64) { self.id = id; }

  fn column_values(&self) -> Vec<Value> {
    vec![
      self.faculty_id.clone().into(),
      self.first_name.clone().into(),
      self.last_name.clone().into(),
      self.email.clone().into(),
      self.phone.clone().into(),
      self.department.clone().into(),
      self.position.clone().into(),
      self.office_location.clone().into(),
      self.specialization.clone().into(),
      self.is_active.into(),
      encode_dt(self.created_at).into(),
      self.updated_at.map(encode_dt).into(),
    ]
  }

  fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:              row.get(0)?,
      faculty_id:      row.get(1)?,
      first_name:      row.get(2)?,
      last_name:       row.get(3)?,
      email:           row.get(4)?,
      phone:           row.get(5)?,
      department:      row.get(6)?,
      position:        row.get(7)?,
      office_location: row.get(8)?,
      specialization:  row.get(9)?,
      is_active:       row.get(10)?,
      created_at:      dt_col(row, 11)?,
      updated_at:      opt_dt_col(row, 12)?,
    })
  }
}

// ─── IT staff ────────────────────────────────────────────────────────────────

impl SqlRecord for ItStaff {
  const COLUMNS: &'static [&'static str] = &[
    "staff_id",
    "first_name",
    "last_name",
    "email",
    "phone",
    "department",
    "role",
    "access_level",
    "office_location",
    "is_active",
    "created_at",
    "updated_at",
  ];

  fn build(input: NewItStaff, created_at: DateTime<Utc>) -> Self {
    Self {
      id: 0,
      staff_id: input.staff_id,
      first_name: input.first_name,
      last_name: input.last_name,
      email: input.email,
      phone: input.phone,
      department: input.department,
      role: input.role,
      access_level: input.access_level,
      office_location: input.office_location,
      is_active: input.is_active,
      created_at,
      updated_at: None,
    }
  }

  fn assign_id(&mut self, id: i64) { self.id = id; }

  fn column_values(&self) -> Vec<Value> {
    vec![
      self.staff_id.clone().into(),
      self.first_name.clone().into(),
      self.last_name.clone().into(),
      self.email.clone().into(),
      self.phone.clone().into(),
      self.department.clone().into(),
      self.role.clone().into(),
      self.access_level.clone().into(),
      self.office_location.clone().into(),
      self.is_active.into(),
      encode_dt(self.created_at).into(),
      self.updated_at.map(encode_dt).into(),
    ]
  }

  fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:              row.get(0)?,
      staff_id:        row.get(1)?,
      first_name:      row.get(2)?,
      last_name:       row.get(3)?,
      email:           row.get(4)?,
      phone:           row.get(5)?,
      department:      row.get(6)?,
      role:            row.get(7)?,
      access_level:    row.get(8)?,
      office_location: row.get(9)?,
      is_active:       row.get(10)?,
      created_at:      dt_col(row, 11)?,
      updated_at:      opt_dt_col(row, 12)?,
    })
  }
}

// ─── Staff ───────────────────────────────────────────────────────────────────

impl SqlRecord for Staff {
  const COLUMNS: &'static [&'static str] = &[
    "staff_id",
    "first_name",
    "last_name",
    "email",
    "phone",
    "department",
    "role",
    "is_active",
    "created_at",
    "updated_at",
  ];

  fn build(input: NewStaff, created_at: DateTime<Utc>) -> Self {
    Self {
      id: 0,
      staff_id: input.staff_id,
      first_name: input.first_name,
      last_name: input.last_name,
      email: input.email,
      phone: input.phone,
      department: input.department,
      role: input.role,
      is_active: input.is_active,
      created_at,
      updated_at: None,
    }
  }

  fn assign_id(&mut self, id: i64) { self.id = id; }

  fn column_values(&self) -> Vec<Value> {
    vec![
      self.staff_id.clone().into(),
      self.first_name.clone().into(),
      self.last_name.clone().into(),
      self.email.clone().into(),
      self.phone.clone().into(),
      self.department.clone().into(),
      self.role.clone().into(),
      self.is_active.into(),
      encode_dt(self.created_at).into(),
      self.updated_at.map(encode_dt).into(),
    ]
  }

  fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      staff_id:   row.get(1)?,
      first_name: row.get(2)?,
      last_name:  row.get(3)?,
      email:      row.get(4)?,
      phone:      row.get(5)?,
      department: row.get(6)?,
      role:       row.get(7)?,
      is_active:  row.get(8)?,
      created_at: dt_col(row, 9)?,
      updated_at: opt_dt_col(row, 10)?,
    })
  }
}

// ─── Patient ─────────────────────────────────────────────────────────────────

impl SqlRecord for Patient {
  const COLUMNS: &'static [&'static str] = &[
    "patient_id",
    "first_name",
    "last_name",
    "email",
    "phone",
    "address",
    "date_of_birth",
    "is_active",
    "created_at",
    "updated_at",
  ];

  fn build(input: NewPatient, created_at: DateTime<Utc>) -> Self {
    Self {
      id: 0,
      patient_id: input.patient_id,
      first_name: input.first_name,
      last_name: input.last_name,
      email: input.email,
      phone: input.phone,
      address: input.address,
      date_of_birth: input.date_of_birth,
      is_active: input.is_active,
      created_at,
      updated_at: None,
    }
  }

  fn assign_id(&mut self, id: i64) { self.id = id; }

  fn column_values(&self) -> Vec<Value> {
    vec![
      self.patient_id.clone().into(),
      self.first_name.clone().into(),
      self.last_name.clone().into(),
      self.email.clone().into(),
      self.phone.clone().into(),
      self.address.clone().into(),
      self.date_of_birth.clone().into(),
      self.is_active.into(),
      encode_dt(self.created_at).into(),
      self.updated_at.map(encode_dt).into(),
    ]
  }

  fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:            row.get(0)?,
      patient_id:    row.get(1)?,
      first_name:    row.get(2)?,
      last_name:     row.get(3)?,
      email:         row.get(4)?,
      phone:         row.get(5)?,
      address:       row.get(6)?,
      date_of_birth: row.get(7)?,
      is_active:     row.get(8)?,
      created_at:    dt_col(row, 9)?,
      updated_at:    opt_dt_col(row, 10)?,
    })
  }
}
