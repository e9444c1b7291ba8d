/// Errors from the agent RPC layer.
use std::io;

use thiserror::Error;

/// Typed errors from the single request/response exchange with the agent.
///
/// `Connect` is the only pre-request failure; every other variant means the
/// connection was established and the exchange itself went wrong. None are
/// retried — the whole run aborts on the first one.
#[derive(Debug, Error)]
pub enum RpcError {
    /// Could not establish a connection to the agent.
    #[error("failed to connect to membership agent at {addr}: {source}")]
    Connect {
        /// The `host:port` that was dialed.
        addr: String,
        /// The underlying socket error.
        source: io::Error,
    },

    /// The request could not be encoded.
    #[error("failed to encode request: {source}")]
    Encode {
        /// The serializer's diagnostic.
        source: serde_json::Error,
    },

    /// The transport failed mid-exchange.
    #[error("failed to retrieve members ({context}): {source}")]
    Io {
        /// Which half of the exchange failed.
        context: &'static str,
        /// The underlying socket error.
        source: io::Error,
    },

    /// The agent answered but refused the request.
    #[error("membership agent rejected the request: {reason}")]
    Rejected {
        /// The agent's own error message.
        reason: String,
    },

    /// The agent's response did not decode as a members response.
    #[error("unparseable response from membership agent: {reason}")]
    Malformed {
        /// What was wrong with the response.
        reason: String,
    },
}
