/// Shared serializable types for the agent's RPC boundary.
///
/// `Member` records arrive inside the agent's `members` response and are
/// read-only for the duration of one invocation. They are `Serialize` as well
/// so tests can run a loopback mock agent against the same definitions.
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// One participant node in the cluster, as reported by the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique node name.
    pub name: String,
    /// Gossip host address.
    pub addr: IpAddr,
    /// Gossip port.
    pub port: u16,
    /// Free-form role tag describing the member's function.
    pub role: String,
    /// Lifecycle state (e.g. "alive", "leaving", "left", "failed").
    /// Opaque text here; the agent owns the vocabulary.
    pub status: String,
    /// Gossip protocol version the member currently speaks.
    pub protocol_cur: u8,
    /// Lowest protocol version the member can speak.
    pub protocol_min: u8,
    /// Highest protocol version the member can speak.
    pub protocol_max: u8,
}
