use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gatekeeper::RedirectGatekeeper;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RedirectConfigError {
    #[error("invalid redirect configuration: {0}")]
    InvalidConfig(String),
}

/// Static table configuration for the gatekeeper.
///
/// The tables are fixed at construction time; there is no dynamic reload.
/// The struct is deserializable so an embedding proxy can carry it inside its
/// own configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RedirectConfig {
    /// Hostname -> replacement hostname.
    #[serde(default)]
    pub rewrite: BTreeMap<String, String>,
    /// Hostnames permitted without rewriting.
    #[serde(default)]
    pub allow: BTreeSet<String>,
}

impl RedirectConfig {
    pub fn validate(&self) -> Result<(), RedirectConfigError> {
        for (host, target) in &self.rewrite {
            validate_hostname(host, "rewrite source")?;
            validate_hostname(target, "rewrite target")?;
            if host == target {
                return Err(RedirectConfigError::InvalidConfig(format!(
                    "rewrite entry maps host '{host}' to itself"
                )));
            }
        }
        for host in &self.allow {
            validate_hostname(host, "allow entry")?;
        }
        Ok(())
    }

    /// Validate and construct the gatekeeper with the two immutable tables.
    pub fn build(self) -> Result<RedirectGatekeeper, RedirectConfigError> {
        self.validate()?;
        Ok(RedirectGatekeeper::new(
            self.rewrite.into_iter().collect(),
            self.allow.into_iter().collect(),
        ))
    }
}

fn validate_hostname(host: &str, role: &str) -> Result<(), RedirectConfigError> {
    if host.is_empty() {
        return Err(RedirectConfigError::InvalidConfig(format!(
            "{role} must not be empty"
        )));
    }
    if host.chars().any(char::is_whitespace) || host.contains('/') {
        return Err(RedirectConfigError::InvalidConfig(format!(
            "{role} '{host}' must be a bare hostname"
        )));
    }
    Ok(())
}
