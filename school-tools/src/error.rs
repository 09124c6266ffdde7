// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Manifest(#[from] crate::core::manifest::ManifestError),
    #[error("{0}")]
    Config(#[from] crate::core::config::ConfigError),
    #[error("{0}")]
    Network(#[from] crate::core::network::NetworkError),
    #[error("{0}")]
    Module(#[from] crate::core::deployment::ModuleError),
    #[error("{0}")]
    Solidity(#[from] crate::core::solidity::SolidityError),
}
