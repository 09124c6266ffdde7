// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

use std::fmt;
use std::process::ExitCode;

pub type SchoolDeployResult = Result<(), SchoolDeployError>;

#[derive(Debug)]
pub struct SchoolDeployError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl SchoolDeployError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for SchoolDeployError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<eyre::Error> for SchoolDeployError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<serde_json::Error> for SchoolDeployError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<school_tools::core::config::ConfigError> for SchoolDeployError {
    fn from(err: school_tools::core::config::ConfigError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
