// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

//! Project configuration and resolution.
//!
//! [`ProjectConfig`] is the immutable merge of compiler settings, network
//! declarations and verification bindings. It is constructed once, either
//! from a `Deploy.toml` manifest or from the built-in
//! [`ProjectConfig::lisk_sepolia`] profile, and resolved synchronously in a
//! single pass against an explicit [`SecretStore`].

use std::{collections::HashMap, path::Path};

use crate::core::{
    manifest::{self, ProjectManifest},
    network::NetworkProfile,
    secrets::{SecretStore, PRIVATE_KEY, VERIFICATION_API_KEY},
    solidity::{SolidityConfig, SolidityError},
    verification::{CustomChain, VerificationConfig, VerificationProfile},
};

/// Declared connection parameters for one network, credential unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    pub url: String,
    pub chain_id: u64,
    /// Secret store variable holding the deployment key.
    pub private_key_var: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub solidity: SolidityConfig,
    pub default_network: String,
    pub networks: HashMap<String, NetworkConfig>,
    pub verification: VerificationConfig,
}

impl ProjectConfig {
    /// Loads and validates a `Deploy.toml` manifest.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let manifest: ProjectManifest = manifest::load(&path)?;
        let config = Self::try_from(manifest)?;
        info!(@grey, "loaded deployment manifest from {}", path.as_ref().display());
        Ok(config)
    }

    /// Built-in profile matching the shipped `Deploy.toml`: the Lisk
    /// Sepolia testnet with its Blockscout verification binding.
    pub fn lisk_sepolia() -> Self {
        Self {
            solidity: SolidityConfig::default(),
            default_network: "liskSepolia".to_owned(),
            networks: HashMap::from([(
                "liskSepolia".to_owned(),
                NetworkConfig {
                    url: "https://rpc.sepolia-api.lisk.com".to_owned(),
                    chain_id: 4202,
                    private_key_var: PRIVATE_KEY.to_owned(),
                },
            )]),
            verification: VerificationConfig {
                // Placeholder key; real keys come through the secret store.
                api_keys: HashMap::from([("liskSepolia".to_owned(), "abc".to_owned())]),
                custom_chains: vec![CustomChain {
                    network: "liskSepolia".to_owned(),
                    chain_id: 4202,
                    api_url: "https://sepolia-blockscout.lisk.com/api".to_owned(),
                    browser_url: "https://sepolia-blockscout.lisk.com/".to_owned(),
                }],
            },
        }
    }

    /// Network declaration for `name`. There is no fallback network.
    pub fn select_network(&self, name: &str) -> Result<&NetworkConfig, ConfigError> {
        self.networks.get(name).ok_or_else(|| ConfigError::UnknownNetwork {
            name: name.to_owned(),
        })
    }

    /// Resolves the network declaration into a connectable profile.
    ///
    /// An unregistered credential resolves to an empty account list; the
    /// failure surfaces downstream when a wallet is requested, not here.
    pub fn network_profile(
        &self,
        name: &str,
        secrets: &SecretStore,
    ) -> Result<NetworkProfile, ConfigError> {
        let network = self.select_network(name)?;
        let accounts = match secrets.get(&network.private_key_var) {
            Some(key) => vec![key.to_owned()],
            None => Vec::new(),
        };
        debug!(@grey, "resolved network {name} with {} account(s)", accounts.len());
        Ok(NetworkProfile {
            name: name.to_owned(),
            url: network.url.clone(),
            chain_id: network.chain_id,
            accounts,
        })
    }

    /// Resolves the configured default network.
    pub fn default_network_profile(
        &self,
        secrets: &SecretStore,
    ) -> Result<NetworkProfile, ConfigError> {
        self.network_profile(&self.default_network, secrets)
    }

    /// Custom verification chain registered for `chain_id`.
    pub fn select_verification_chain(&self, chain_id: u64) -> Result<&CustomChain, ConfigError> {
        self.verification
            .chain(chain_id)
            .ok_or(ConfigError::UnknownVerificationChain { chain_id })
    }

    /// Joins the network declaration with its verification binding.
    pub fn verification_profile(
        &self,
        name: &str,
        secrets: &SecretStore,
    ) -> Result<VerificationProfile, ConfigError> {
        let network = self.select_network(name)?;
        let chain = self
            .verification
            .custom_chains
            .iter()
            .find(|chain| chain.network == name)
            .ok_or(ConfigError::UnknownVerificationChain {
                chain_id: network.chain_id,
            })?;
        if chain.chain_id != network.chain_id {
            return Err(ConfigError::ChainIdMismatch {
                network: name.to_owned(),
                network_chain_id: network.chain_id,
                verification_chain_id: chain.chain_id,
            });
        }
        let api_key = secrets
            .get(VERIFICATION_API_KEY)
            .or_else(|| self.verification.api_key(name))
            .ok_or_else(|| ConfigError::MissingApiKey {
                network: name.to_owned(),
            })?;
        Ok(VerificationProfile {
            api_key: api_key.to_owned(),
            chain: chain.clone(),
        })
    }
}

impl TryFrom<ProjectManifest> for ProjectConfig {
    type Error = SolidityError;

    fn try_from(manifest: ProjectManifest) -> Result<Self, SolidityError> {
        let solidity = SolidityConfig::parse(manifest.solidity.version)?;
        let networks = manifest
            .networks
            .into_iter()
            .map(|(name, network)| {
                let network = NetworkConfig {
                    url: network.url,
                    chain_id: network.chain_id,
                    private_key_var: network
                        .private_key_var
                        .unwrap_or_else(|| PRIVATE_KEY.to_owned()),
                };
                (name, network)
            })
            .collect();
        let custom_chains = manifest
            .verification
            .custom_chains
            .into_iter()
            .map(|chain| CustomChain {
                network: chain.network,
                chain_id: chain.chain_id,
                api_url: chain.api_url,
                browser_url: chain.browser_url,
            })
            .collect();
        Ok(Self {
            solidity,
            default_network: manifest.default_network,
            networks,
            verification: VerificationConfig {
                api_keys: manifest.verification.api_keys,
                custom_chains,
            },
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("network {name} is not registered")]
    UnknownNetwork { name: String },
    #[error("no verification chain registered for chain id {chain_id}")]
    UnknownVerificationChain { chain_id: u64 },
    #[error(
        "verification chain id {verification_chain_id} does not match \
         network {network} (chain id {network_chain_id})"
    )]
    ChainIdMismatch {
        network: String,
        network_chain_id: u64,
        verification_chain_id: u64,
    },
    #[error("no verification api key configured for network {network}")]
    MissingApiKey { network: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_manifest_matches_builtin_profile() {
        let contents = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../Deploy.toml"));
        let manifest: ProjectManifest = toml::from_str(contents).unwrap();
        let config = ProjectConfig::try_from(manifest).unwrap();
        assert_eq!(config, ProjectConfig::lisk_sepolia());
    }

    #[test]
    fn load_wraps_manifest_errors() {
        let err = ProjectConfig::load("/does/not/exist/Deploy.toml").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Manifest(manifest::ManifestError::Missing)
        ));
    }

    #[test]
    fn chain_ids_are_cross_consistent() {
        let config = ProjectConfig::lisk_sepolia();
        let network = config.select_network("liskSepolia").unwrap();
        let chain = config.select_verification_chain(4202).unwrap();
        assert_eq!(network.chain_id, 4202);
        assert_eq!(chain.chain_id, network.chain_id);
    }

    #[test]
    fn missing_credential_resolves_to_empty_accounts() {
        let config = ProjectConfig::lisk_sepolia();
        let profile = config
            .network_profile("liskSepolia", &SecretStore::new())
            .unwrap();
        assert_eq!(profile.accounts, Vec::<String>::new());
    }

    #[test]
    fn registered_credential_resolves_end_to_end() {
        let config = ProjectConfig::lisk_sepolia();
        let secrets = SecretStore::new().with_secret(PRIVATE_KEY, "0xabc...123");
        let profile = config.default_network_profile(&secrets).unwrap();
        assert_eq!(
            profile,
            NetworkProfile {
                name: "liskSepolia".to_owned(),
                url: "https://rpc.sepolia-api.lisk.com".to_owned(),
                chain_id: 4202,
                accounts: vec!["0xabc...123".to_owned()],
            }
        );
    }

    #[test]
    fn unknown_network_has_no_fallback() {
        let config = ProjectConfig::lisk_sepolia();
        let err = config.select_network("sepolia").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownNetwork { name } if name == "sepolia"));
    }

    #[test]
    fn unknown_verification_chain_is_rejected() {
        let config = ProjectConfig::lisk_sepolia();
        let err = config.select_verification_chain(1).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownVerificationChain { chain_id: 1 }
        ));
    }

    #[test]
    fn verification_profile_joins_network_and_chain() {
        let config = ProjectConfig::lisk_sepolia();
        let profile = config
            .verification_profile("liskSepolia", &SecretStore::new())
            .unwrap();
        assert_eq!(profile.chain.chain_id, 4202);
        assert_eq!(
            profile.chain.api_url,
            "https://sepolia-blockscout.lisk.com/api"
        );
        assert_eq!(profile.api_key, "abc");
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let mut config = ProjectConfig::lisk_sepolia();
        config.verification.api_keys.clear();
        let err = config
            .verification_profile("liskSepolia", &SecretStore::new())
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey { network } if network == "liskSepolia"));
    }

    #[test]
    fn secret_store_overrides_manifest_api_key() {
        let config = ProjectConfig::lisk_sepolia();
        let secrets = SecretStore::new().with_secret(VERIFICATION_API_KEY, "real-key");
        let profile = config.verification_profile("liskSepolia", &secrets).unwrap();
        assert_eq!(profile.api_key, "real-key");
    }

    #[test]
    fn mismatched_verification_chain_id_is_rejected() {
        let mut config = ProjectConfig::lisk_sepolia();
        config.verification.custom_chains[0].chain_id = 4203;
        let err = config
            .verification_profile("liskSepolia", &SecretStore::new())
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ChainIdMismatch {
                network_chain_id: 4202,
                verification_chain_id: 4203,
                ..
            }
        ));
    }

    #[test]
    fn custom_private_key_var_is_honored() {
        let mut config = ProjectConfig::lisk_sepolia();
        config
            .networks
            .get_mut("liskSepolia")
            .unwrap()
            .private_key_var = "LISK_DEPLOY_KEY".to_owned();
        let secrets = SecretStore::new()
            .with_secret(PRIVATE_KEY, "0xignored")
            .with_secret("LISK_DEPLOY_KEY", "0xused");
        let profile = config
            .network_profile("liskSepolia", &secrets)
            .unwrap();
        assert_eq!(profile.accounts, vec!["0xused".to_owned()]);
    }
}
