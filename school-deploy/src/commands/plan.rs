// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

use school_tools::modules;

use crate::error::SchoolDeployResult;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Print the plan as JSON.
    #[arg(long)]
    json: bool,
}

pub fn exec(args: Args) -> SchoolDeployResult {
    let module = modules::school_management_module();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&module)?);
        return Ok(());
    }

    println!("module: {}", module.name());
    for (position, contract) in module.contracts().iter().enumerate() {
        println!(
            "  {}. {} ({} constructor args)",
            position + 1,
            contract.contract_name,
            contract.constructor_args.len()
        );
    }
    for contract_id in module.handles().keys() {
        println!("exports: {contract_id}");
    }
    Ok(())
}
