/// CLI argument definitions via clap derive.
use clap::Parser;

/// Default RPC endpoint of a locally running agent.
pub const DEFAULT_RPC_ADDR: &str = "127.0.0.1:7373";

/// membercli — query the members of a running cluster-membership agent.
#[derive(Debug, Parser)]
#[command(
    name = "membercli",
    about = "Outputs the members of a running cluster-membership agent",
    version
)]
pub struct Cli {
    /// Show additional information such as protocol versions.
    #[arg(long)]
    pub detailed: bool,

    /// Only output members whose role matches this regular expression.
    #[arg(long, value_name = "REGEXP", default_value = ".*")]
    pub role: String,

    /// Only output members whose status matches this regular expression.
    #[arg(long, value_name = "REGEXP", default_value = ".*")]
    pub status: String,

    /// RPC address of the membership agent.
    #[arg(long, value_name = "HOST:PORT", default_value = DEFAULT_RPC_ADDR)]
    pub rpc_addr: String,

    /// Print stage timing to stderr for debugging.
    #[arg(long)]
    pub debug: bool,
}
