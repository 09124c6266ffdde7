// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

use std::{fs, path::PathBuf};

use eyre::Context;
use school_tools::core::{
    config::ProjectConfig,
    manifest,
    secrets::{SecretStore, PRIVATE_KEY},
};

#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// Path to the deployment manifest.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Network to operate on. Defaults to the manifest's default network.
    #[arg(long)]
    network: Option<String>,
}

impl ConfigArgs {
    /// Loads the manifest. Without `--config`, a `Deploy.toml` in the
    /// current directory wins; otherwise the built-in Lisk Sepolia profile
    /// is used.
    pub fn config(&self) -> eyre::Result<ProjectConfig> {
        match &self.config {
            Some(path) => Ok(ProjectConfig::load(path)?),
            None => {
                let default_path = PathBuf::from(manifest::FILENAME);
                if default_path.exists() {
                    Ok(ProjectConfig::load(default_path)?)
                } else {
                    Ok(ProjectConfig::lisk_sepolia())
                }
            }
        }
    }

    /// Network selected on the command line, or the configured default.
    pub fn network<'a>(&'a self, config: &'a ProjectConfig) -> &'a str {
        self.network.as_deref().unwrap_or(&config.default_network)
    }
}

#[derive(Debug, clap::Args)]
pub struct SecretsArgs {
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
}

impl SecretsArgs {
    /// Secret store backed by the process environment, with command-line
    /// overrides taking precedence.
    pub fn secrets(&self) -> eyre::Result<SecretStore> {
        let mut secrets = SecretStore::from_env();
        if let Some(key) = &self.private_key {
            secrets = secrets.with_secret(PRIVATE_KEY, key);
        } else if let Some(path) = &self.private_key_path {
            let key = fs::read_to_string(path).wrap_err("could not open private key file")?;
            secrets = secrets.with_secret(PRIVATE_KEY, key.trim());
        }
        Ok(secrets)
    }
}
