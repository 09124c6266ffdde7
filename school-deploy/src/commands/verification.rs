// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

use crate::{
    common_args::{ConfigArgs, SecretsArgs},
    error::SchoolDeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    config: ConfigArgs,
    #[command(flatten)]
    secrets: SecretsArgs,
}

pub fn exec(args: Args) -> SchoolDeployResult {
    let config = args.config.config()?;
    let secrets = args.secrets.secrets()?;
    let network = args.config.network(&config);
    let profile = config.verification_profile(network, &secrets)?;

    println!("network: {}", profile.chain.network);
    println!("chain id: {}", profile.chain.chain_id);
    println!("api url: {}", profile.chain.api_url);
    println!("browser url: {}", profile.chain.browser_url);
    // Presence only. The key itself stays out of terminal output.
    println!("api key: configured");
    Ok(())
}
