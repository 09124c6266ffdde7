// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

//! Tools for configuring and planning SchoolManagement contract deployments.
//!
//! The configuration surface mirrors the project's `Deploy.toml`: a compiler
//! version, a set of network profiles, and the bindings for the contract
//! verification service. Deployment itself is declarative; a
//! [`DeploymentModule`](core::deployment::DeploymentModule) only records
//! which contracts to instantiate, and an external engine executes it.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod modules;
pub mod utils;

pub use error::{Error, Result};
