// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

//! Contract verification service configuration.

use std::collections::HashMap;

use serde::Serialize;

/// Explorer binding for one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomChain {
    pub network: String,
    pub chain_id: u64,
    pub api_url: String,
    pub browser_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationConfig {
    /// Api keys by network name. Placeholder values are expected here; real
    /// keys come through the secret store.
    pub api_keys: HashMap<String, String>,
    pub custom_chains: Vec<CustomChain>,
}

impl VerificationConfig {
    /// Custom chain registered for `chain_id`, if any.
    pub fn chain(&self, chain_id: u64) -> Option<&CustomChain> {
        self.custom_chains.iter().find(|c| c.chain_id == chain_id)
    }

    pub fn api_key(&self, network: &str) -> Option<&str> {
        self.api_keys.get(network).map(String::as_str)
    }
}

/// Verification parameters resolved for one network.
///
/// The chain id always matches the bound network profile's chain id; the
/// resolver rejects mismatched registrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationProfile {
    pub api_key: String,
    pub chain: CustomChain,
}
