// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

pub mod config;
pub mod deployment;
pub mod manifest;
pub mod network;
pub mod secrets;
pub mod solidity;
pub mod verification;
