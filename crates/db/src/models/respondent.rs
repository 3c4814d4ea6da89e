//! Respondent entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use survey_core::error::CoreError;
use survey_core::respondent::{
    TimeInSeedbed, MAX_EMAIL_LEN, MAX_FULL_NAME_LEN, MAX_OTHER_ROLE_LEN,
};
use survey_core::roles::Role;
use survey_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `respondents` table.
///
/// `role` and `time_in_seedbed` hold the display labels defined in
/// `survey_core`; use [`Respondent::parsed_role`] for capability checks.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Respondent {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub other_role: Option<String>,
    pub is_seedling: bool,
    pub time_in_seedbed: Option<String>,
    pub created_at: Timestamp,
}

impl Respondent {
    pub fn parsed_role(&self) -> Result<Role, CoreError> {
        Role::from_str_db(&self.role)
    }
}

/// DTO for registering a new respondent.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRespondent {
    #[validate(length(
        min = 1,
        max = MAX_FULL_NAME_LEN,
        message = "full_name must be 1-150 characters"
    ))]
    pub full_name: String,
    #[validate(
        email(message = "email must be a valid address"),
        length(max = MAX_EMAIL_LEN, message = "email must be at most 100 characters")
    )]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[validate(length(
        max = MAX_OTHER_ROLE_LEN,
        message = "other_role must be at most 100 characters"
    ))]
    pub other_role: Option<String>,
    #[serde(default)]
    pub is_seedling: bool,
    pub time_in_seedbed: Option<TimeInSeedbed>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(email: &str) -> CreateRespondent {
        CreateRespondent {
            full_name: "Ada Lovelace".to_string(),
            email: email.to_string(),
            role: Role::Student,
            other_role: None,
            is_seedling: false,
            time_in_seedbed: None,
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(input("ada@example.com").validate().is_ok());
    }

    #[test]
    fn test_malformed_email_fails() {
        assert!(input("not-an-email").validate().is_err());
    }

    #[test]
    fn test_empty_name_fails() {
        let mut bad = input("ada@example.com");
        bad.full_name.clear();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_name_length_limit_is_inclusive() {
        let mut at_limit = input("ada@example.com");
        at_limit.full_name = "a".repeat(MAX_FULL_NAME_LEN as usize);
        assert!(at_limit.validate().is_ok());

        at_limit.full_name.push('a');
        assert!(at_limit.validate().is_err());
    }

    #[test]
    fn test_long_other_role_fails() {
        let mut bad = input("ada@example.com");
        bad.other_role = Some("x".repeat(MAX_OTHER_ROLE_LEN as usize + 1));
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_defaults_when_fields_omitted() {
        let json = r#"{"full_name": "Bo", "email": "bo@example.com"}"#;
        let parsed: CreateRespondent = serde_json::from_str(json).expect("valid json");
        assert_eq!(parsed.role, Role::Other);
        assert!(!parsed.is_seedling);
        assert!(parsed.other_role.is_none());
        assert!(parsed.time_in_seedbed.is_none());
    }
}
