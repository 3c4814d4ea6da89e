//! Question types and question/option field rules.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const TYPE_UNIQUE_SELECTION: &str = "Unique selection";
pub const TYPE_MULTIPLE_SELECTION: &str = "Multiple selection";
pub const TYPE_FREE_TEXT: &str = "Free text";

/// Maximum length of a response option label (`VARCHAR(255)`).
pub const MAX_OPTION_TEXT_LEN: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "Unique selection")]
    UniqueSelection,
    #[serde(rename = "Multiple selection")]
    MultipleSelection,
    #[serde(rename = "Free text")]
    FreeText,
}

impl QuestionType {
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            TYPE_UNIQUE_SELECTION => Ok(Self::UniqueSelection),
            TYPE_MULTIPLE_SELECTION => Ok(Self::MultipleSelection),
            TYPE_FREE_TEXT => Ok(Self::FreeText),
            _ => Err(CoreError::Validation(format!(
                "Invalid question type '{s}'. Must be one of: \
                 {TYPE_UNIQUE_SELECTION}, {TYPE_MULTIPLE_SELECTION}, {TYPE_FREE_TEXT}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UniqueSelection => TYPE_UNIQUE_SELECTION,
            Self::MultipleSelection => TYPE_MULTIPLE_SELECTION,
            Self::FreeText => TYPE_FREE_TEXT,
        }
    }

    /// Whether questions of this type carry response options.
    pub fn has_options(&self) -> bool {
        !matches!(self, Self::FreeText)
    }
}

/// Validate the body of a new question and the labels of its options.
pub fn validate_question_input(text: &str, option_texts: &[&str]) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation("Question text must not be empty".into()));
    }
    for (idx, label) in option_texts.iter().enumerate() {
        if label.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Option {idx} text must not be empty"
            )));
        }
        if label.chars().count() > MAX_OPTION_TEXT_LEN {
            return Err(CoreError::Validation(format!(
                "Option {idx} text exceeds {MAX_OPTION_TEXT_LEN} characters"
            )));
        }
    }
    Ok(())
}
