//! Respondent roles and the capability checks built on them.
//!
//! Role labels are stored verbatim in `respondents.role` and must match the
//! `CHECK` constraint in `20260301000001_create_respondents.sql`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_STUDENT: &str = "Student";
pub const ROLE_TEACHER_RESEARCHER: &str = "Teacher/Researcher";
pub const ROLE_ADMINISTRATOR: &str = "Administrator";
pub const ROLE_OTHER: &str = "Other";

/// All valid role labels.
pub const VALID_ROLES: &[&str] = &[
    ROLE_STUDENT,
    ROLE_TEACHER_RESEARCHER,
    ROLE_ADMINISTRATOR,
    ROLE_OTHER,
];

/// The role a respondent declares at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Student")]
    Student,
    #[serde(rename = "Teacher/Researcher")]
    TeacherResearcher,
    #[serde(rename = "Administrator")]
    Administrator,
    #[default]
    #[serde(rename = "Other")]
    Other,
}

impl Role {
    /// Parse a role label as stored in the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            ROLE_STUDENT => Ok(Self::Student),
            ROLE_TEACHER_RESEARCHER => Ok(Self::TeacherResearcher),
            ROLE_ADMINISTRATOR => Ok(Self::Administrator),
            ROLE_OTHER => Ok(Self::Other),
            _ => Err(CoreError::Validation(format!(
                "Invalid role '{s}'. Must be one of: {}",
                VALID_ROLES.join(", ")
            ))),
        }
    }

    /// Convert to the label stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => ROLE_STUDENT,
            Self::TeacherResearcher => ROLE_TEACHER_RESEARCHER,
            Self::Administrator => ROLE_ADMINISTRATOR,
            Self::Other => ROLE_OTHER,
        }
    }
}

/// Capability check for administrator-only operations.
pub fn require_admin(role: Role) -> Result<(), CoreError> {
    if role == Role::Administrator {
        Ok(())
    } else {
        Err(CoreError::Forbidden("Administrator role required".into()))
    }
}
