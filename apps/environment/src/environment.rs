// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Frontend Environment
//!
//! The environment record read by the frontend at build/startup time:
//!
//! ```json
//! {
//!   "production": false,
//!   "apiServerUrl": "http://127.0.0.1:5000",
//!   "auth0": {
//!     "url": "as12production",
//!     "audience": "CoffeeFS",
//!     "clientId": "PMbEc8o0HhZVUXLyAKB1HwM87oYokChM",
//!     "callbackURL": "http://localhost:8100"
//!   }
//! }
//! ```
//!
//! An [`Environment`] only exists after validation, so holding one means
//! every field is present and well formed. It has no setters.

use std::env::VarError;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::auth::Auth0Config;
use crate::config::{
    API_SERVER_URL_ENV, AUTH0_AUDIENCE_ENV, AUTH0_CALLBACK_URL_ENV, AUTH0_CLIENT_ID_ENV,
    AUTH0_DOMAIN_PREFIX_ENV, PRODUCTION_ENV,
};
use crate::error::ConfigError;
use crate::fields::ConfigUrl;

/// Committed development environment.
pub const DEVELOPMENT: EnvironmentLiteral = EnvironmentLiteral {
    production: false,
    api_server_url: "http://127.0.0.1:5000",
    auth0: Auth0Literal {
        url: "as12production",
        audience: "CoffeeFS",
        client_id: "PMbEc8o0HhZVUXLyAKB1HwM87oYokChM",
        callback_url: "http://localhost:8100",
    },
};

/// Environment written as a compile-time literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentLiteral {
    pub production: bool,
    pub api_server_url: &'static str,
    pub auth0: Auth0Literal,
}

/// `auth0` block of an [`EnvironmentLiteral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Auth0Literal {
    pub url: &'static str,
    pub audience: &'static str,
    pub client_id: &'static str,
    pub callback_url: &'static str,
}

/// Unvalidated environment in the frontend object shape.
///
/// This is the serde form of [`Environment`]; convert with `TryFrom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawEnvironment {
    pub production: bool,
    pub api_server_url: String,
    pub auth0: RawAuth0,
}

/// Unvalidated `auth0` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawAuth0 {
    pub url: String,
    pub audience: String,
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

impl From<&EnvironmentLiteral> for RawEnvironment {
    fn from(literal: &EnvironmentLiteral) -> Self {
        Self {
            production: literal.production,
            api_server_url: literal.api_server_url.to_string(),
            auth0: RawAuth0 {
                url: literal.auth0.url.to_string(),
                audience: literal.auth0.audience.to_string(),
                client_id: literal.auth0.client_id.to_string(),
                callback_url: literal.auth0.callback_url.to_string(),
            },
        }
    }
}

/// Validated frontend environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEnvironment", into = "RawEnvironment")]
pub struct Environment {
    production: bool,
    api_server_url: ConfigUrl,
    auth0: Auth0Config,
}

impl TryFrom<RawEnvironment> for Environment {
    type Error = ConfigError;

    fn try_from(raw: RawEnvironment) -> Result<Self, Self::Error> {
        Ok(Self {
            production: raw.production,
            api_server_url: ConfigUrl::parse("apiServerUrl", &raw.api_server_url)?,
            auth0: Auth0Config::new(
                &raw.auth0.url,
                &raw.auth0.audience,
                &raw.auth0.client_id,
                &raw.auth0.callback_url,
            )?,
        })
    }
}

impl From<Environment> for RawEnvironment {
    fn from(env: Environment) -> Self {
        Self {
            production: env.production,
            api_server_url: env.api_server_url.as_str().to_string(),
            auth0: RawAuth0 {
                url: env.auth0.url().to_string(),
                audience: env.auth0.audience().to_string(),
                client_id: env.auth0.client_id().to_string(),
                callback_url: env.auth0.callback_url().to_string(),
            },
        }
    }
}

impl Environment {
    /// Validate the committed [`DEVELOPMENT`] literal.
    pub fn development() -> Result<Self, ConfigError> {
        Self::from_literal(&DEVELOPMENT)
    }

    /// Validate a compile-time literal.
    pub fn from_literal(literal: &EnvironmentLiteral) -> Result<Self, ConfigError> {
        let env = Self::try_from(RawEnvironment::from(literal))?;
        env.log_loaded("literal");
        Ok(env)
    }

    /// Parse and validate JSON in the frontend object shape.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawEnvironment = serde_json::from_str(json)?;
        let env = Self::try_from(raw)?;
        env.log_loaded("json");
        Ok(env)
    }

    /// Read, parse and validate a JSON environment file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load from process environment variables.
    ///
    /// See [`from_lookup`](Self::from_lookup) for the rules. A variable
    /// holding non-UTF-8 bytes is an error, never treated as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| match std::env::var(var) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var }),
        })
    }

    /// Load from variables resolved by `lookup`.
    ///
    /// Variables that are set override the [`DEVELOPMENT`] literal. When
    /// `PRODUCTION` is true there is no fallback: every variable must be set,
    /// so committed identifiers never reach a production build. A variable
    /// set to an empty string is a validation error, not a fallback.
    /// `lookup` returns `Ok(None)` only for variables that are not set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<Option<String>, ConfigError>,
    {
        let production = match lookup(PRODUCTION_ENV)? {
            Some(value) => parse_bool(PRODUCTION_ENV, &value)?,
            None => DEVELOPMENT.production,
        };

        let field = |var: &'static str, fallback: &'static str| -> Result<String, ConfigError> {
            match lookup(var)? {
                Some(value) => {
                    debug!(var, "Environment variable overrides committed value");
                    Ok(value)
                }
                None if production => Err(ConfigError::MissingVar { var }),
                None => Ok(fallback.to_string()),
            }
        };

        let raw = RawEnvironment {
            production,
            api_server_url: field(API_SERVER_URL_ENV, DEVELOPMENT.api_server_url)?,
            auth0: RawAuth0 {
                url: field(AUTH0_DOMAIN_PREFIX_ENV, DEVELOPMENT.auth0.url)?,
                audience: field(AUTH0_AUDIENCE_ENV, DEVELOPMENT.auth0.audience)?,
                client_id: field(AUTH0_CLIENT_ID_ENV, DEVELOPMENT.auth0.client_id)?,
                callback_url: field(AUTH0_CALLBACK_URL_ENV, DEVELOPMENT.auth0.callback_url)?,
            },
        };

        let env = Self::try_from(raw)?;
        env.log_loaded("env");
        Ok(env)
    }

    /// Whether this is a production build.
    pub fn production(&self) -> bool {
        self.production
    }

    /// Backend API base address exactly as configured.
    pub fn api_server_url(&self) -> &str {
        self.api_server_url.as_str()
    }

    /// Parsed backend API base address.
    pub fn api_server(&self) -> &Url {
        self.api_server_url.url()
    }

    pub fn auth0(&self) -> &Auth0Config {
        &self.auth0
    }

    /// Resolve a backend route under the API base URL.
    ///
    /// Leading/trailing slashes in `path` are ignored and any path prefix of
    /// the base is kept, so `drinks/3` under `https://host/api` becomes
    /// `https://host/api/drinks/3`.
    pub fn api_endpoint(&self, path: &str) -> Result<Url, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidEndpoint {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        if path.contains(['?', '#']) {
            return Err(invalid("query strings and fragments are not allowed"));
        }

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return Err(invalid("path is empty"));
        }
        if segments.iter().any(|s| *s == "." || *s == "..") {
            return Err(invalid("relative segments are not allowed"));
        }

        let mut url = self.api_server_url.url().clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| invalid("API base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    fn log_loaded(&self, source: &str) {
        info!(
            source,
            production = self.production,
            api_server_url = self.api_server_url(),
            auth0_domain = %self.auth0.domain(),
            "Environment loaded"
        );
    }
}

/// Parse a boolean variable (`true/false/1/0/yes/no`, any case).
fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    const COFFEE_SHOP_JSON: &str = r#"{
        "production": false,
        "apiServerUrl": "http://127.0.0.1:5000",
        "auth0": {
            "url": "as12production",
            "audience": "CoffeeFS",
            "clientId": "PMbEc8o0HhZVUXLyAKB1HwM87oYokChM",
            "callbackURL": "http://localhost:8100"
        }
    }"#;

    fn lookup_from(
        vars: &[(&str, &str)],
    ) -> impl Fn(&'static str) -> Result<Option<String>, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| Ok(vars.get(key).cloned())
    }

    fn production_vars() -> Vec<(&'static str, &'static str)> {
        vec![
            (PRODUCTION_ENV, "true"),
            (API_SERVER_URL_ENV, "https://api.coffee.example.com"),
            (AUTH0_DOMAIN_PREFIX_ENV, "coffee-prod"),
            (AUTH0_AUDIENCE_ENV, "CoffeeFS"),
            (AUTH0_CLIENT_ID_ENV, "prod-client-id"),
            (AUTH0_CALLBACK_URL_ENV, "https://coffee.example.com"),
        ]
    }

    #[test]
    fn development_literal_exposes_exact_values() {
        let env = Environment::development().unwrap();
        assert!(!env.production());
        assert_eq!(env.api_server_url(), "http://127.0.0.1:5000");
        assert_eq!(env.auth0().url(), "as12production");
        assert_eq!(env.auth0().audience(), "CoffeeFS");
        assert_eq!(env.auth0().client_id(), "PMbEc8o0HhZVUXLyAKB1HwM87oYokChM");
        assert_eq!(env.auth0().callback_url(), "http://localhost:8100");
    }

    #[test]
    fn url_fields_parse() {
        let env = Environment::development().unwrap();
        assert_eq!(env.api_server().host_str(), Some("127.0.0.1"));
        assert_eq!(env.api_server().port(), Some(5000));
        assert_eq!(env.auth0().callback().host_str(), Some("localhost"));
    }

    #[test]
    fn repeated_reads_are_equal() {
        let first = Environment::development().unwrap();
        let second = Environment::development().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.api_server_url(), first.api_server_url());
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn literal_load_is_logged() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            Environment::development().unwrap();
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Environment loaded"), "{output}");
        assert!(output.contains("literal"), "{output}");
        assert!(output.contains("as12production.auth0.com"), "{output}");
    }

    #[test]
    fn rejects_empty_api_server_url() {
        let mut literal = DEVELOPMENT;
        literal.api_server_url = "";
        let err = Environment::from_literal(&literal).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyField { field: "apiServerUrl" }));
    }

    #[test]
    fn json_in_frontend_shape_matches_literal() {
        let env = Environment::from_json_str(COFFEE_SHOP_JSON).unwrap();
        assert_eq!(env, Environment::development().unwrap());
    }

    #[test]
    fn json_missing_field_is_an_error() {
        let json = r#"{
            "production": false,
            "apiServerUrl": "http://127.0.0.1:5000",
            "auth0": { "url": "as12production", "audience": "CoffeeFS", "clientId": "x" }
        }"#;
        let err = Environment::from_json_str(json).unwrap_err();
        match err {
            ConfigError::Json(e) => assert!(e.to_string().contains("callbackURL")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn json_unknown_field_is_an_error() {
        let json = COFFEE_SHOP_JSON.replace("\"production\"", "\"prod\": true, \"production\"");
        assert!(matches!(
            Environment::from_json_str(&json).unwrap_err(),
            ConfigError::Json(_)
        ));
    }

    #[test]
    fn json_invalid_value_fails_validation() {
        let json = COFFEE_SHOP_JSON.replace("http://localhost:8100", "localhost");
        let err = Environment::from_json_str(&json).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { field: "auth0.callbackURL", .. }));
    }

    #[test]
    fn deserializing_environment_directly_validates() {
        let json = COFFEE_SHOP_JSON.replace("CoffeeFS", "  ");
        let err = serde_json::from_str::<Environment>(&json).unwrap_err();
        assert!(err.to_string().contains("auth0.audience must not be empty"));
    }

    #[test]
    fn serializes_back_to_frontend_shape() {
        let env = Environment::development().unwrap();
        let value = serde_json::to_value(&env).unwrap();
        let expected: serde_json::Value = serde_json::from_str(COFFEE_SHOP_JSON).unwrap();
        assert_eq!(value, expected);
    }

    #[test]
    fn json_file_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(COFFEE_SHOP_JSON.as_bytes()).unwrap();

        let env = Environment::from_json_file(file.path()).unwrap();
        assert_eq!(env.api_server_url(), "http://127.0.0.1:5000");
    }

    #[test]
    fn missing_json_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("environment.json");
        match Environment::from_json_file(&path).unwrap_err() {
            ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn lookup_without_variables_uses_development() {
        let env = Environment::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(env, Environment::development().unwrap());
    }

    #[test]
    fn lookup_overrides_single_field() {
        let env = Environment::from_lookup(lookup_from(&[(
            API_SERVER_URL_ENV,
            "http://10.0.0.5:8080",
        )]))
        .unwrap();
        assert_eq!(env.api_server_url(), "http://10.0.0.5:8080");
        assert_eq!(env.auth0().client_id(), DEVELOPMENT.auth0.client_id);
    }

    #[test]
    fn production_lookup_requires_every_variable() {
        let env = Environment::from_lookup(lookup_from(&production_vars())).unwrap();
        assert!(env.production());
        assert_eq!(env.auth0().domain(), "coffee-prod.auth0.com");
        assert_eq!(env.auth0().client_id(), "prod-client-id");

        let partial: Vec<_> = production_vars()
            .into_iter()
            .filter(|(k, _)| *k != AUTH0_CLIENT_ID_ENV)
            .collect();
        let err = Environment::from_lookup(lookup_from(&partial)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingVar {
                var: AUTH0_CLIENT_ID_ENV
            }
        ));
    }

    #[test]
    fn blank_variable_is_not_a_fallback() {
        let err = Environment::from_lookup(lookup_from(&[(AUTH0_AUDIENCE_ENV, "")])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyField { field: "auth0.audience" }));
    }

    #[test]
    fn lookup_errors_are_fatal() {
        let err = Environment::from_lookup(|var| match var {
            PRODUCTION_ENV => Err(ConfigError::NotUnicode { var }),
            _ => Ok(None),
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::NotUnicode { var: PRODUCTION_ENV }));

        let err = Environment::from_lookup(|var| match var {
            AUTH0_CLIENT_ID_ENV => Err(ConfigError::NotUnicode { var }),
            _ => Ok(None),
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotUnicode {
                var: AUTH0_CLIENT_ID_ENV
            }
        ));
    }

    #[test]
    fn production_flag_parsing() {
        assert!(parse_bool(PRODUCTION_ENV, "TRUE").unwrap());
        assert!(parse_bool(PRODUCTION_ENV, " yes ").unwrap());
        assert!(parse_bool(PRODUCTION_ENV, "1").unwrap());
        assert!(!parse_bool(PRODUCTION_ENV, "False").unwrap());
        assert!(!parse_bool(PRODUCTION_ENV, "no").unwrap());

        let err = Environment::from_lookup(lookup_from(&[(PRODUCTION_ENV, "maybe")])).unwrap_err();
        match err {
            ConfigError::InvalidBool { var, value } => {
                assert_eq!(var, PRODUCTION_ENV);
                assert_eq!(value, "maybe");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn api_endpoint_joins_routes() {
        let env = Environment::development().unwrap();
        assert_eq!(
            env.api_endpoint("drinks").unwrap().as_str(),
            "http://127.0.0.1:5000/drinks"
        );
        assert_eq!(
            env.api_endpoint("/drinks-detail").unwrap().as_str(),
            "http://127.0.0.1:5000/drinks-detail"
        );
        assert_eq!(
            env.api_endpoint("drinks/3/").unwrap().as_str(),
            "http://127.0.0.1:5000/drinks/3"
        );
    }

    #[test]
    fn api_endpoint_keeps_base_prefix() {
        for base in ["https://coffee.example.com/api", "https://coffee.example.com/api/"] {
            let env = Environment::from_lookup(lookup_from(&[(API_SERVER_URL_ENV, base)])).unwrap();
            assert_eq!(
                env.api_endpoint("drinks").unwrap().as_str(),
                "https://coffee.example.com/api/drinks"
            );
        }
    }

    #[test]
    fn api_endpoint_rejects_bad_paths() {
        let env = Environment::development().unwrap();
        for path in ["", "/", "drinks?id=1", "drinks#top", "../admin", "drinks/./1"] {
            let err = env.api_endpoint(path).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidEndpoint { .. }),
                "{path:?} should be rejected"
            );
        }
    }

    #[test]
    fn environment_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Environment>();
    }
}
