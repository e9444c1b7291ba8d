/// Wire envelope for the agent protocol: newline-delimited JSON over TCP.
///
/// Each exchange is one request line followed by one response line. The only
/// request this client ever sends is `{"command":"members"}`.
use serde::{Deserialize, Serialize};

use crate::types::Member;

/// A request line to the agent, tagged by its `command` field.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Request {
    /// Ask for the current membership snapshot.
    Members,
}

/// A response line from the agent.
///
/// `ok: true` carries the member snapshot; `ok: false` carries the agent's
/// error message. The same envelope shape the agent uses for every command.
#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    /// Whether the agent accepted the request.
    pub ok: bool,
    /// The membership snapshot, present when `ok` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Member>>,
    /// The agent's error message, present when `ok` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let line = serde_json::to_string(&Request::Members).unwrap();
        assert_eq!(line, r#"{"command":"members"}"#);
    }

    #[test]
    fn test_ok_response_decodes_members() {
        let line = r#"{"ok":true,"members":[{"name":"node1","addr":"10.0.0.1","port":7946,"role":"web","status":"alive","protocol_cur":2,"protocol_min":1,"protocol_max":3}]}"#;
        let resp: Response = serde_json::from_str(line).unwrap();
        assert!(resp.ok);
        let members = resp.members.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "node1");
        assert_eq!(members[0].port, 7946);
    }

    #[test]
    fn test_error_response_decodes_reason() {
        let line = r#"{"ok":false,"error":"agent is shutting down"}"#;
        let resp: Response = serde_json::from_str(line).unwrap();
        assert!(!resp.ok);
        assert_eq!(resp.error.as_deref(), Some("agent is shutting down"));
        assert!(resp.members.is_none());
    }
}
