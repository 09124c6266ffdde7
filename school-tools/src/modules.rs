// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

//! Deployment modules for the SchoolManagement project.

use crate::core::deployment::{DeploymentModule, ModuleBuilder};

/// Name of the module deploying the SchoolManagement contract.
pub const SCHOOL_MANAGEMENT_MODULE: &str = "SchoolManagementModule";

/// Module instantiating a single SchoolManagement contract with no
/// constructor arguments. Downstream consumers look the instance up under
/// the `schoolManagement` handle.
pub fn school_management_module() -> DeploymentModule {
    let mut builder = ModuleBuilder::new(SCHOOL_MANAGEMENT_MODULE);
    builder
        .add_contract_instance("SchoolManagement", Vec::new())
        .expect("empty module cannot hold a duplicate id");
    builder.build()
}
