// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Settings
//!
//! Auth0 settings consumed by the frontend's authentication library.
//!
//! ## Auth Flow
//!
//! 1. Frontend opens [`Auth0Config::authorize_url`]
//! 2. Auth0 authenticates the user and redirects to `callbackURL` with an
//!    access token for `audience`
//! 3. Frontend sends `Authorization: Bearer <token>` to `apiServerUrl`
//! 4. Backend verifies the token against [`Auth0Config::jwks_url`] and
//!    [`Auth0Config::issuer`]
//!
//! Nothing here performs network I/O; all values are derived from the
//! configured fields.

pub mod auth0;

pub use auth0::Auth0Config;
