#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! membercli — query the members of a running cluster-membership agent.

mod cli;
mod commands;
mod member;
mod rpc;
mod types;

use clap::Parser;
use clap::error::ErrorKind;

use cli::Cli;

fn main() {
    // clap exits 2 on bad options by default; every failure here must exit 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    match commands::members::run(&cli) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
