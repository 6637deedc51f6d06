// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Validated field types shared by the environment and Auth0 records.

use std::fmt;

use url::Url;

use crate::error::ConfigError;

/// A URL field that has been checked to be absolute `http`/`https` with a host.
///
/// Keeps the configured text as-is: `url::Url` normalises
/// `http://127.0.0.1:5000` to `http://127.0.0.1:5000/`, but consumers that
/// concatenate paths onto the base expect the value they configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigUrl {
    raw: String,
    parsed: Url,
}

impl ConfigUrl {
    /// Validate `value` as the URL field named `field`.
    pub fn parse(field: &'static str, value: &str) -> Result<Self, ConfigError> {
        let raw = non_empty(field, value)?;

        let parsed = Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl {
            field,
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::UnsupportedScheme {
                    field,
                    scheme: other.to_string(),
                })
            }
        }

        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(ConfigError::InvalidUrl {
                field,
                reason: "missing host".to_string(),
            });
        }

        Ok(Self { raw, parsed })
    }

    /// The URL exactly as configured (trimmed).
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed URL.
    pub fn url(&self) -> &Url {
        &self.parsed
    }
}

impl fmt::Display for ConfigUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Trim `value` and reject it if nothing is left.
pub fn non_empty(field: &'static str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

/// Validate an Auth0 tenant domain prefix such as `as12production` or
/// `my-tenant.eu`.
pub fn domain_prefix(value: &str) -> Result<String, ConfigError> {
    let prefix = non_empty("auth0.url", value)?;

    // Each dot-separated label is a DNS label: alphanumerics and inner hyphens.
    let label_ok = |label: &str| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    };

    if !prefix.split('.').all(label_ok) {
        return Err(ConfigError::InvalidDomainPrefix { value: prefix });
    }

    Ok(prefix)
}
