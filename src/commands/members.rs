/// `members` command: query the agent, filter the snapshot, print it.
use crate::cli::args::Cli;
use crate::cli::output::{DebugTimer, render_members};
use crate::member::{MemberError, MemberFilter};
use crate::rpc::RpcClient;
use crate::types::Member;

/// Run `membercli`.
///
/// Stages run strictly in order and the first failure aborts the run: both
/// patterns are compiled before any network activity, the snapshot is fetched
/// over one connection, and only then does any output happen. An empty match
/// set is a success.
///
/// # Errors
///
/// Returns `MemberError` on a bad filter pattern, a connection failure, or a
/// failed exchange with the agent.
pub fn run(cli: &Cli) -> Result<(), MemberError> {
    let filter = MemberFilter::compile(&cli.role, &cli.status)?;

    let _t_fetch = DebugTimer::new("fetch_members", cli.debug);
    let client = RpcClient::connect(&cli.rpc_addr)?;
    let members = client.members()?;
    drop(_t_fetch);

    let _t_render = DebugTimer::new("filter_and_render", cli.debug);
    print!("{}", filter_and_render(&members, &filter, cli.detailed));
    Ok(())
}

/// One linear pass over the snapshot: keep members matching both predicates,
/// in source order, and render them. Pure; shared by `run` and the tests.
fn filter_and_render(members: &[Member], filter: &MemberFilter, detailed: bool) -> String {
    render_members(members.iter().filter(|m| filter.matches(m)), detailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Vec<Member> {
        vec![
            Member {
                name: "node1".to_owned(),
                addr: "10.0.0.1".parse().unwrap(),
                port: 7946,
                role: "web".to_owned(),
                status: "alive".to_owned(),
                protocol_cur: 2,
                protocol_min: 1,
                protocol_max: 3,
            },
            Member {
                name: "node2".to_owned(),
                addr: "10.0.0.2".parse().unwrap(),
                port: 7946,
                role: "db".to_owned(),
                status: "failed".to_owned(),
                protocol_cur: 2,
                protocol_min: 1,
                protocol_max: 3,
            },
        ]
    }

    #[test]
    fn test_role_filter_keeps_only_matching_member() {
        let filter = MemberFilter::compile("web", ".*").unwrap();
        let out = filter_and_render(&snapshot(), &filter, false);
        assert_eq!(out, "node1    10.0.0.1:7946    alive    web\n");
    }

    #[test]
    fn test_role_filter_with_detail() {
        let filter = MemberFilter::compile("web", ".*").unwrap();
        let out = filter_and_render(&snapshot(), &filter, true);
        assert_eq!(
            out,
            concat!(
                "node1    10.0.0.1:7946    alive    web\n",
                "    Protocol Version: 2\n",
                "    Available Protocol Range: [1, 3]\n"
            )
        );
    }

    #[test]
    fn test_default_filters_render_every_member_once() {
        let filter = MemberFilter::compile(".*", ".*").unwrap();
        let out = filter_and_render(&snapshot(), &filter, false);
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("node1"));
        assert!(out.contains("node2"));
    }

    #[test]
    fn test_excluded_members_emit_nothing_even_detailed() {
        let filter = MemberFilter::compile("web", ".*").unwrap();
        let out = filter_and_render(&snapshot(), &filter, true);
        assert!(!out.contains("node2"));
        // Exactly one summary line plus two detail lines.
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_conjunction_can_exclude_everything() {
        let filter = MemberFilter::compile("web", "failed").unwrap();
        let out = filter_and_render(&snapshot(), &filter, true);
        assert!(out.is_empty());
    }
}
