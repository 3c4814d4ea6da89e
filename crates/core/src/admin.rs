//! Admin allow-list gating registration of Administrator respondents.
//!
//! The list is parsed once from configuration and handed to the handlers as
//! immutable data; nothing here reads the environment.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::roles::Role;

/// Emails allowed to register with the Administrator role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminAllowList {
    emails: HashSet<String>,
}

impl AdminAllowList {
    /// Parse a comma-separated list. Entries are trimmed and blanks dropped.
    pub fn parse(raw: &str) -> Self {
        let emails = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self { emails }
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, email: &str) -> bool {
        self.emails.contains(email)
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AdminAllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            emails: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Check whether `email` may register with `role`.
///
/// Only the Administrator role is gated; every other role is open.
pub fn authorize_registration(
    role: Role,
    email: &str,
    allow_list: &AdminAllowList,
) -> Result<(), CoreError> {
    if role == Role::Administrator && !allow_list.contains(email) {
        return Err(CoreError::Forbidden(
            "Email is not authorized to register as Administrator".into(),
        ));
    }
    Ok(())
}
