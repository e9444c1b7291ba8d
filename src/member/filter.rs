/// Filter predicates: compile the role/status patterns once, match many.
use regex::Regex;

use super::errors::{FilterField, MemberError};
use crate::types::Member;

/// The two compiled filter predicates applied to every member.
///
/// Both patterns are compiled once per run and reused across the whole
/// snapshot. A member is included only when its role matches the role pattern
/// **and** its status matches the status pattern.
#[derive(Debug)]
pub struct MemberFilter {
    role: Regex,
    status: Regex,
}

impl MemberFilter {
    /// Compile both filter strings.
    ///
    /// The defaults (`".*"`) match everything, so an unfiltered run still goes
    /// through the same code path.
    ///
    /// # Errors
    ///
    /// Returns [`MemberError::PatternCompile`] tagged with the offending
    /// filter when either string is not a valid regular expression. The role
    /// pattern is compiled first, so when both are invalid the role one is
    /// reported.
    pub fn compile(role: &str, status: &str) -> Result<Self, MemberError> {
        let role = Regex::new(role).map_err(|source| MemberError::PatternCompile {
            field: FilterField::Role,
            source,
        })?;
        let status = Regex::new(status).map_err(|source| MemberError::PatternCompile {
            field: FilterField::Status,
            source,
        })?;
        Ok(Self { role, status })
    }

    /// Whether a member satisfies both predicates.
    #[must_use]
    pub fn matches(&self, member: &Member) -> bool {
        self.role.is_match(&member.role) && self.status.is_match(&member.status)
    }
}
