// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Configuration errors.
//!
//! Every variant is fatal: a frontend environment that fails to load must
//! stop startup rather than run with a partial configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Error raised while building, loading or installing an [`Environment`].
///
/// Field names use the frontend key path (`apiServerUrl`, `auth0.clientId`)
/// so the message points at the value to fix.
///
/// [`Environment`]: crate::environment::Environment
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("environment variable {var} is required")]
    MissingVar { var: &'static str },

    /// An environment variable is set but is not valid UTF-8.
    #[error("environment variable {var} is not valid UTF-8")]
    NotUnicode { var: &'static str },

    /// A string field is empty or whitespace.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// A URL field does not parse as an absolute URL with a host.
    #[error("{field} is not a valid URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    /// A URL field uses a scheme other than http or https.
    #[error("{field} must use http or https, got {scheme:?}")]
    UnsupportedScheme { field: &'static str, scheme: String },

    /// The Auth0 domain prefix contains characters a tenant name cannot have.
    #[error("auth0.url must be a tenant domain prefix, got {value:?}")]
    InvalidDomainPrefix { value: String },

    /// A boolean variable holds something other than true/false.
    #[error("environment variable {var} must be a boolean, got {value:?}")]
    InvalidBool { var: &'static str, value: String },

    /// A backend route could not be resolved under the API base URL.
    #[error("invalid API endpoint {path:?}: {reason}")]
    InvalidEndpoint { path: String, reason: String },

    /// JSON input does not have the environment object shape.
    #[error("malformed environment JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An environment file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process-wide environment was already installed.
    #[error("environment is already installed")]
    AlreadyInstalled,

    /// The process-wide environment was read before installation.
    #[error("environment has not been installed")]
    NotInstalled,

    /// The tracing subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Telemetry(String),
}
