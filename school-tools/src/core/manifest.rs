// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

//! Deploy.toml manifest files.
//!
//! These structs are the raw TOML surface; [`crate::core::config`] turns
//! them into resolved configuration types.

use std::{collections::HashMap, fs, path::Path};

use serde::{de::DeserializeOwned, Deserialize};

use crate::core::solidity;

/// Filename for deployment manifests.
pub const FILENAME: &str = "Deploy.toml";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("missing Deploy.toml")]
    Missing,
}

pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ManifestError> {
    if !path.as_ref().exists() {
        return Err(ManifestError::Missing);
    }

    let contents = fs::read_to_string(path)?;
    let manifest = toml::from_str(&contents)?;
    Ok(manifest)
}

#[derive(Debug, Deserialize)]
pub struct ProjectManifest {
    pub default_network: String,
    #[serde(default)]
    pub solidity: TomlSolidity,
    pub networks: HashMap<String, TomlNetwork>,
    #[serde(default)]
    pub verification: TomlVerification,
}

#[derive(Debug, Deserialize)]
pub struct TomlSolidity {
    pub version: String,
}

impl Default for TomlSolidity {
    fn default() -> Self {
        Self {
            version: solidity::DEFAULT_VERSION.to_owned(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TomlNetwork {
    pub url: String,
    pub chain_id: u64,
    /// Secret store variable holding the deployment key. Defaults to
    /// `PRIVATE_KEY`.
    pub private_key_var: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TomlVerification {
    #[serde(default)]
    pub api_keys: HashMap<String, String>,
    #[serde(default)]
    pub custom_chains: Vec<TomlCustomChain>,
}

#[derive(Debug, Deserialize)]
pub struct TomlCustomChain {
    pub network: String,
    pub chain_id: u64,
    pub api_url: String,
    pub browser_url: String,
}
