// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Auth0 application settings and the URLs derived from them.

use url::Url;

use crate::error::ConfigError;
use crate::fields::{domain_prefix, non_empty, ConfigUrl};

/// Hosted Auth0 domain suffix appended to the tenant prefix.
const AUTH0_DOMAIN_SUFFIX: &str = "auth0.com";

/// Token type requested from the authorize endpoint (implicit flow).
const RESPONSE_TYPE: &str = "token";

/// Auth0 configuration for the frontend application.
///
/// Mirrors the `auth0` block of the frontend environment:
///
/// | Key | Accessor |
/// |-----|----------|
/// | `url` | [`url`](Self::url) |
/// | `audience` | [`audience`](Self::audience) |
/// | `clientId` | [`client_id`](Self::client_id) |
/// | `callbackURL` | [`callback_url`](Self::callback_url) |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth0Config {
    /// Tenant domain prefix
    url: String,
    /// API audience the issued token is meant for
    audience: String,
    /// Public client id of the registered application
    client_id: String,
    /// Redirect target after login
    callback_url: ConfigUrl,
}

impl Auth0Config {
    /// Validate and build the Auth0 settings.
    pub fn new(
        url: &str,
        audience: &str,
        client_id: &str,
        callback_url: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            url: domain_prefix(url)?,
            audience: non_empty("auth0.audience", audience)?,
            client_id: non_empty("auth0.clientId", client_id)?,
            callback_url: ConfigUrl::parse("auth0.callbackURL", callback_url)?,
        })
    }

    /// Tenant domain prefix (`auth0.url`).
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Callback URL exactly as configured.
    pub fn callback_url(&self) -> &str {
        self.callback_url.as_str()
    }

    /// Parsed callback URL.
    pub fn callback(&self) -> &Url {
        self.callback_url.url()
    }

    /// Full tenant domain, e.g. `as12production.auth0.com`.
    pub fn domain(&self) -> String {
        format!("{}.{AUTH0_DOMAIN_SUFFIX}", self.url)
    }

    /// Expected `iss` claim of tokens issued by this tenant.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain())
    }

    /// JWKS endpoint holding the tenant's signing keys.
    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.domain())
    }

    /// Login link for the implicit flow.
    ///
    /// Opening it sends the user to Auth0, which redirects back to the
    /// callback URL with an access token for the configured audience.
    pub fn authorize_url(&self) -> Result<Url, ConfigError> {
        let mut url = self.tenant_url("authorize")?;
        url.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", RESPONSE_TYPE)
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", self.callback_url.as_str());
        Ok(url)
    }

    /// Logout link that returns the user to the callback URL.
    pub fn logout_url(&self) -> Result<Url, ConfigError> {
        let mut url = self.tenant_url("v2/logout")?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("returnTo", self.callback_url.as_str());
        Ok(url)
    }

    fn tenant_url(&self, path: &str) -> Result<Url, ConfigError> {
        Url::parse(&format!("https://{}/{path}", self.domain())).map_err(|e| {
            ConfigError::InvalidUrl {
                field: "auth0.url",
                reason: e.to_string(),
            }
        })
    }
}
