//! Core types and trait definitions for the roster service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod entity;
pub mod error;
pub mod faculty;
pub mod it_staff;
pub mod patch;
pub mod patient;
pub mod staff;
pub mod store;
pub mod student;
pub mod validate;

pub use error::{Error, Result};
