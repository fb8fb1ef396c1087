//! # roll-core
//!
//! Core types shared across all Rollcall crates:
//! - Entity structs for every backend record type (students, teachers,
//!   members, grades, announcements, attendance)
//! - The dynamic `FieldValue`/`FieldMap` model the generic table and form
//!   engine operate on
//! - Role and session-user types
//! - Wire envelope types for the backend's REST responses
//! - Lenient date parsing helpers for wire values

pub mod dates;
pub mod entities;
pub mod me;
pub mod responses;
pub mod role;
pub mod value;

pub use me::Me;
pub use role::Role;
pub use value::{FieldMap, FieldValue};

/// A backend record with a unique string id.
pub trait Entity {
    fn id(&self) -> &str;
}
