// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

//! Secret store passed into configuration resolution.
//!
//! The store is populated before resolution starts and read-only afterward.
//! Passing it explicitly keeps resolution deterministic; nothing in this
//! crate reads the process environment behind the caller's back.

use std::collections::HashMap;

/// Variable holding the default deployment credential.
pub const PRIVATE_KEY: &str = "PRIVATE_KEY";

/// Variable overriding the verification service api key.
pub const VERIFICATION_API_KEY: &str = "VERIFICATION_API_KEY";

/// Read-only key/value lookup for credentials.
#[derive(Debug, Clone, Default)]
pub struct SecretStore {
    vars: HashMap<String, String>,
}

impl SecretStore {
    /// Empty store. Any credential lookup resolves to "not configured".
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the process environment.
    pub fn from_env() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn with_secret(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn has(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_has_nothing() {
        let secrets = SecretStore::new();
        assert!(!secrets.has(PRIVATE_KEY));
        assert_eq!(secrets.get(PRIVATE_KEY), None);
    }

    #[test]
    fn registered_secret_is_returned() {
        let secrets = SecretStore::new().with_secret(PRIVATE_KEY, "0xabc");
        assert!(secrets.has(PRIVATE_KEY));
        assert_eq!(secrets.get(PRIVATE_KEY), Some("0xabc"));
    }

    #[test]
    fn from_env_sees_process_variables() {
        // PATH is set in any reasonable test environment.
        let secrets = SecretStore::from_env();
        assert!(secrets.has("PATH"));
    }
}
