//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods. Reads and
//! single-statement writes accept `&PgPool`; lookups that also run inside a
//! transaction accept any [`sqlx::PgExecutor`] so callers can pass either the
//! pool or `&mut *tx`.

pub mod question_repo;
pub mod respondent_repo;
pub mod response_option_repo;
pub mod survey_response_repo;

pub use question_repo::QuestionRepo;
pub use respondent_repo::RespondentRepo;
pub use response_option_repo::ResponseOptionRepo;
pub use survey_response_repo::SurveyResponseRepo;
