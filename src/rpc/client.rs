/// The membership agent client: connect, ask for members once, hang up.
use std::io::{BufRead, BufReader, Write};
use std::net::{Shutdown, TcpStream};

use super::errors::RpcError;
use super::proto::{Request, Response};
use crate::types::Member;

/// A connection to the membership agent, good for exactly one call.
///
/// The stream is owned exclusively by this struct and is never handed out.
/// [`RpcClient::members`] consumes the client, so the socket is closed on
/// every exit path — success or failure — when the stream drops.
#[derive(Debug)]
pub struct RpcClient {
    stream: TcpStream,
}

impl RpcClient {
    /// Dial the agent at `addr` (`host:port`).
    ///
    /// Blocking, no retry; any timeout is the transport's business.
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::Connect`] when the connection cannot be
    /// established.
    pub fn connect(addr: &str) -> Result<Self, RpcError> {
        let stream = TcpStream::connect(addr).map_err(|source| RpcError::Connect {
            addr: addr.to_owned(),
            source,
        })?;
        Ok(Self { stream })
    }

    /// Issue the single `members` request and await the response.
    ///
    /// # Errors
    ///
    /// - [`RpcError::Io`] — the transport failed while sending or receiving.
    /// - [`RpcError::Rejected`] — the agent answered `ok: false`.
    /// - [`RpcError::Malformed`] — the response did not decode, or the agent
    ///   hung up without answering.
    pub fn members(mut self) -> Result<Vec<Member>, RpcError> {
        let mut line =
            serde_json::to_string(&Request::Members).map_err(|source| RpcError::Encode { source })?;
        line.push('\n');
        self.stream
            .write_all(line.as_bytes())
            .map_err(|source| RpcError::Io {
                context: "sending request",
                source,
            })?;

        let mut reader = BufReader::new(&self.stream);
        let mut buf = String::new();
        let n = reader.read_line(&mut buf).map_err(|source| RpcError::Io {
            context: "reading response",
            source,
        })?;
        if n == 0 {
            return Err(RpcError::Malformed {
                reason: "connection closed before a response arrived".to_owned(),
            });
        }

        let response: Response =
            serde_json::from_str(buf.trim_end()).map_err(|err| RpcError::Malformed {
                reason: err.to_string(),
            })?;

        // Exchange done either way; close eagerly rather than waiting for drop.
        let _ = self.stream.shutdown(Shutdown::Both);

        if !response.ok {
            return Err(RpcError::Rejected {
                reason: response
                    .error
                    .unwrap_or_else(|| "no reason given".to_owned()),
            });
        }
        response.members.ok_or_else(|| RpcError::Malformed {
            reason: "ok response carried no members field".to_owned(),
        })
    }
}
