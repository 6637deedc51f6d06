// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Environment Variable Names
//!
//! This module defines the environment variable names read by
//! [`Environment::from_env`](crate::environment::Environment::from_env) and
//! by the logging setup.
//!
//! ## Environment Variables
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `PRODUCTION` | `production` | `false` |
//! | `API_SERVER_URL` | `apiServerUrl` | `http://127.0.0.1:5000` |
//! | `AUTH0_DOMAIN_PREFIX` | `auth0.url` | `as12production` |
//! | `AUTH0_AUDIENCE` | `auth0.audience` | `CoffeeFS` |
//! | `AUTH0_CLIENT_ID` | `auth0.clientId` | development client id |
//! | `AUTH0_CALLBACK_URL` | `auth0.callbackURL` | `http://localhost:8100` |
//! | `LOG_FORMAT` | logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | log level filter | `info` |
//!
//! When `PRODUCTION` is true the defaults do not apply: every `API_*` and
//! `AUTH0_*` variable must be set.

/// Whether this is a production build.
pub const PRODUCTION_ENV: &str = "PRODUCTION";

/// Base address of the backend HTTP API.
pub const API_SERVER_URL_ENV: &str = "API_SERVER_URL";

/// Auth0 tenant domain prefix (the `as12production` in
/// `as12production.auth0.com`).
pub const AUTH0_DOMAIN_PREFIX_ENV: &str = "AUTH0_DOMAIN_PREFIX";

/// Audience of the protected API.
pub const AUTH0_AUDIENCE_ENV: &str = "AUTH0_AUDIENCE";

/// Public client id of the frontend application.
pub const AUTH0_CLIENT_ID_ENV: &str = "AUTH0_CLIENT_ID";

/// Redirect target after login.
pub const AUTH0_CALLBACK_URL_ENV: &str = "AUTH0_CALLBACK_URL";

/// Logging format selector.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";
