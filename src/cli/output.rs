/// Output formatting for member listings, plus stderr debug timers.
use std::fmt::Write as _;
use std::net::SocketAddr;

use crate::types::Member;

/// Render members as display text, one block per member, in input order.
///
/// Each member produces one summary line with four-space-separated fields:
///
/// ```text
/// name    address:port    status    role
/// ```
///
/// When `detailed` is set, two indented lines follow reporting the current
/// protocol version and the supported protocol-version range. The endpoint
/// goes through [`SocketAddr`] so IPv6 addresses come out bracketed.
///
/// This is a pure transformation over already-validated data; it cannot fail.
/// Filtering is the caller's job — every member passed in is rendered.
#[must_use]
pub fn render_members<'a, I>(members: I, detailed: bool) -> String
where
    I: IntoIterator<Item = &'a Member>,
{
    let mut out = String::new();
    for member in members {
        let endpoint = SocketAddr::new(member.addr, member.port);
        let _ = writeln!(
            out,
            "{}    {endpoint}    {}    {}",
            member.name, member.status, member.role
        );
        if detailed {
            let _ = writeln!(out, "    Protocol Version: {}", member.protocol_cur);
            let _ = writeln!(
                out,
                "    Available Protocol Range: [{}, {}]",
                member.protocol_min, member.protocol_max
            );
        }
    }
    out
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    pub fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}
