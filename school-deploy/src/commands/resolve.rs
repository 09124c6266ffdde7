// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

use school_tools::core::secrets::PRIVATE_KEY;

use crate::{
    common_args::{ConfigArgs, SecretsArgs},
    error::SchoolDeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Print the resolved profile as JSON. This includes the raw accounts.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
    #[command(flatten)]
    secrets: SecretsArgs,
}

pub fn exec(args: Args) -> SchoolDeployResult {
    let config = args.config.config()?;
    let secrets = args.secrets.secrets()?;
    let network = args.config.network(&config);
    let profile = config.network_profile(network, &secrets)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!("network: {}", profile.name);
    println!("url: {}", profile.url);
    println!("chain id: {}", profile.chain_id);
    match profile.accounts.len() {
        0 => println!("signers: none configured (set {PRIVATE_KEY})"),
        n => println!("signers: {n} configured"),
    }
    Ok(())
}
