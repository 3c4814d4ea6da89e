//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! Survey entities are immutable once written, so there are no update DTOs.

pub mod question;
pub mod respondent;
pub mod survey_response;
