pub mod auth;
pub mod questions;
pub mod respondents;
pub mod survey_responses;
