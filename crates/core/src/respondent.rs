//! Respondent profile enumerations and field limits.

use serde::{Deserialize, Serialize};

/// Column widths from the `respondents` table.
pub const MAX_FULL_NAME_LEN: u64 = 150;
pub const MAX_EMAIL_LEN: u64 = 100;
pub const MAX_OTHER_ROLE_LEN: u64 = 100;

/// How long a respondent has been part of the seedbed programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInSeedbed {
    #[serde(rename = "Less than one year")]
    LessThanOneYear,
    #[serde(rename = "One to two years")]
    OneToTwoYears,
    #[serde(rename = "More than two years")]
    MoreThanTwoYears,
}

impl TimeInSeedbed {
    /// Label stored in `respondents.time_in_seedbed`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LessThanOneYear => "Less than one year",
            Self::OneToTwoYears => "One to two years",
            Self::MoreThanTwoYears => "More than two years",
        }
    }
}
