// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

//! Resolved network profiles.

use alloy::{
    network::EthereumWallet,
    primitives::FixedBytes,
    signers::{local::PrivateKeySigner, Signer},
};
use serde::Serialize;

use crate::utils::decode0x;

/// Connection parameters for one network target.
///
/// `accounts` holds the raw credential strings resolved from the secret
/// store. It is empty when no credential is registered; building a wallet
/// then fails with [`NetworkError::NoSigners`], which is the downstream
/// "no signer available" condition rather than a resolution failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkProfile {
    pub name: String,
    pub url: String,
    pub chain_id: u64,
    pub accounts: Vec<String>,
}

impl NetworkProfile {
    /// Parses each account into a signer bound to this chain.
    pub fn signers(&self) -> Result<Vec<PrivateKeySigner>, NetworkError> {
        self.accounts.iter().map(|key| self.signer(key)).collect()
    }

    /// Wallet over all configured signers.
    pub fn wallet(&self) -> Result<EthereumWallet, NetworkError> {
        let mut signers = self.signers()?.into_iter();
        let Some(first) = signers.next() else {
            return Err(NetworkError::NoSigners {
                network: self.name.clone(),
            });
        };
        let mut wallet = EthereumWallet::new(first);
        for signer in signers {
            wallet.register_signer(signer);
        }
        Ok(wallet)
    }

    fn signer(&self, key: &str) -> Result<PrivateKeySigner, NetworkError> {
        let bytes = decode0x(key).map_err(|_| NetworkError::InvalidPrivateKey)?;
        if bytes.len() != 32 {
            return Err(NetworkError::InvalidPrivateKey);
        }
        let bytes: FixedBytes<32> = FixedBytes::from_slice(&bytes);
        let signer = PrivateKeySigner::from_bytes(&bytes)
            .map_err(|_| NetworkError::InvalidPrivateKey)?
            .with_chain_id(Some(self.chain_id));
        Ok(signer)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("account is not a hex-encoded 32 byte private key")]
    InvalidPrivateKey,
    #[error("no signers configured for network {network}")]
    NoSigners { network: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY: &str = "0x0000000000000000000000000000000000000000000000000000000000000001";

    fn profile(accounts: Vec<String>) -> NetworkProfile {
        NetworkProfile {
            name: "liskSepolia".to_owned(),
            url: "https://rpc.sepolia-api.lisk.com".to_owned(),
            chain_id: 4202,
            accounts,
        }
    }

    #[test]
    fn wallet_requires_a_signer() {
        let err = profile(Vec::new()).wallet().unwrap_err();
        assert!(matches!(err, NetworkError::NoSigners { network } if network == "liskSepolia"));
    }

    #[test]
    fn signers_are_bound_to_the_chain() {
        let signers = profile(vec![TEST_KEY.to_owned()]).signers().unwrap();
        assert_eq!(signers.len(), 1);
        assert_eq!(signers[0].chain_id(), Some(4202));
        assert!(profile(vec![TEST_KEY.to_owned()]).wallet().is_ok());
    }

    #[test]
    fn malformed_keys_are_rejected() {
        for key in ["0xabc", "not hex", ""] {
            let err = profile(vec![key.to_owned()]).signers().unwrap_err();
            assert!(matches!(err, NetworkError::InvalidPrivateKey));
        }
    }
}
