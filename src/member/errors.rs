/// Errors from the member domain layer.
use std::fmt;

use thiserror::Error;

use crate::rpc::RpcError;

/// Which filter option a bad pattern came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Role,
    Status,
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Role => f.write_str("role"),
            Self::Status => f.write_str("status"),
        }
    }
}

/// Errors that can abort a run after option parsing.
///
/// Each variant maps to one pipeline stage; whichever fires first is terminal
/// and nothing downstream of it runs.
#[derive(Debug, Error)]
pub enum MemberError {
    /// A filter string is not a valid regular expression.
    #[error("failed to compile {field} regexp: {source}")]
    PatternCompile {
        /// Which filter option held the bad pattern.
        field: FilterField,
        /// The regex engine's diagnostic.
        source: regex::Error,
    },

    /// An underlying RPC failure (connect, transport, or agent rejection).
    #[error(transparent)]
    Rpc(#[from] RpcError),
}

impl MemberError {
    /// Return the CLI exit code for this error.
    ///
    /// Every failure of this command exits 1; success (including an empty
    /// member list) exits 0.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PatternCompile { .. } | Self::Rpc(_) => 1,
        }
    }
}
