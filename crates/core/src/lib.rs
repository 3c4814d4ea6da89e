//! Domain rules for the survey backend.
//!
//! Everything in this crate is pure: enumerations shared by the database and
//! HTTP layers, the error taxonomy, capability checks, and the validation
//! rules applied before a survey response is persisted.

pub mod admin;
pub mod error;
pub mod pagination;
pub mod question;
pub mod respondent;
pub mod roles;
pub mod survey;
pub mod types;
