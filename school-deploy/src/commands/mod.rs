// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

use crate::error::SchoolDeployResult;

mod networks;
mod plan;
mod resolve;
mod verification;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// List configured networks
    #[clap(visible_alias = "n")]
    Networks(networks::Args),
    /// Print the deployment plan for the SchoolManagement module
    #[clap(visible_alias = "p")]
    Plan(plan::Args),
    /// Resolve a network profile against the secret store
    #[clap(visible_alias = "r")]
    Resolve(resolve::Args),
    /// Show the verification profile for a network
    #[clap(visible_alias = "v")]
    Verification(verification::Args),
}

pub fn exec(cmd: Command) -> SchoolDeployResult {
    match cmd {
        Command::Networks(args) => networks::exec(args),
        Command::Plan(args) => plan::exec(args),
        Command::Resolve(args) => resolve::exec(args),
        Command::Verification(args) => verification::exec(args),
    }
}
