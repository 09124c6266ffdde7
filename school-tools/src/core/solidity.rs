// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

//! Solidity compiler settings.

/// Compiler version expected by the SchoolManagement sources.
pub const DEFAULT_VERSION: &str = "0.8.28";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolidityConfig {
    pub version: String,
}

impl SolidityConfig {
    /// Validates a `major.minor.patch` version string.
    pub fn parse(version: impl Into<String>) -> Result<Self, SolidityError> {
        let version = version.into();
        let mut parts = version.split('.');
        let numeric = |part: Option<&str>| {
            part.is_some_and(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
        };
        if numeric(parts.next()) && numeric(parts.next()) && numeric(parts.next()) && parts.next().is_none() {
            Ok(Self { version })
        } else {
            Err(SolidityError::InvalidVersion(version))
        }
    }
}

impl Default for SolidityConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_owned(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SolidityError {
    #[error("invalid solc version: {0}")]
    InvalidVersion(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_release_versions() {
        assert_eq!(SolidityConfig::parse("0.8.28").unwrap().version, "0.8.28");
        assert_eq!(SolidityConfig::default().version, DEFAULT_VERSION);
    }

    #[test]
    fn parse_rejects_malformed_versions() {
        for version in ["", "0.8", "0.8.28.1", "v0.8.28", "0.8.x", "0..28"] {
            assert!(
                matches!(
                    SolidityConfig::parse(version),
                    Err(SolidityError::InvalidVersion(_))
                ),
                "{version:?} should be rejected"
            );
        }
    }
}
