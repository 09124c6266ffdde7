// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

use crate::{common_args::ConfigArgs, error::SchoolDeployResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    config: ConfigArgs,
}

pub fn exec(args: Args) -> SchoolDeployResult {
    let config = args.config.config()?;
    let mut names: Vec<_> = config.networks.keys().collect();
    names.sort();
    for name in names {
        let network = &config.networks[name];
        let marker = if *name == config.default_network {
            " (default)"
        } else {
            ""
        };
        println!(
            "{name}{marker}: {} (chain id {})",
            network.url, network.chain_id
        );
    }
    Ok(())
}
