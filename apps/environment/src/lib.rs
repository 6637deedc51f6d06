// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Coffee Shop - Frontend Environment
//!
//! This crate provides the environment record of the Coffee Shop frontend:
//! the production flag, the backend API base URL and the Auth0 settings.
//!
//! ## Modules
//!
//! - `environment` - The validated environment record and its loaders
//! - `auth` - Auth0 settings and derived tenant URLs
//! - `state` - Install-once, process-wide environment
//! - `config` - Environment variable names
//! - `telemetry` - Tracing subscriber setup
//!
//! ## Usage
//!
//! ```rust,no_run
//! use coffee_shop_environment::{state, telemetry};
//!
//! # fn main() -> Result<(), coffee_shop_environment::ConfigError> {
//! telemetry::init_tracing(telemetry::LogFormat::from_env())?;
//! let env = state::init_from_env()?;
//! let drinks = env.api_endpoint("drinks")?;
//! let login = env.auth0().authorize_url()?;
//! # let _ = (drinks, login);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod environment;
pub mod error;
pub mod fields;
pub mod state;
pub mod telemetry;

pub use auth::Auth0Config;
pub use environment::{Environment, DEVELOPMENT};
pub use error::ConfigError;
