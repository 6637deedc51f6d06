// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Process-wide environment.
//!
//! The environment is installed once during startup and read from anywhere
//! afterwards. There is no way to replace or mutate it.

use std::sync::OnceLock;

use tracing::info;

use crate::environment::Environment;
use crate::error::ConfigError;

static ENVIRONMENT: OnceLock<Environment> = OnceLock::new();

/// Install the process-wide environment.
///
/// Fails with [`ConfigError::AlreadyInstalled`] on every call after the first.
pub fn install(env: Environment) -> Result<&'static Environment, ConfigError> {
    ENVIRONMENT
        .set(env)
        .map_err(|_| ConfigError::AlreadyInstalled)?;
    let installed = current()?;
    info!(production = installed.production(), "Environment installed");
    Ok(installed)
}

/// The installed environment.
pub fn current() -> Result<&'static Environment, ConfigError> {
    ENVIRONMENT.get().ok_or(ConfigError::NotInstalled)
}

/// Load from process environment variables and install the result.
pub fn init_from_env() -> Result<&'static Environment, ConfigError> {
    install(Environment::from_env()?)
}
