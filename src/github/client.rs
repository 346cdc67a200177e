// SPDX-License-Identifier: Apache-2.0

use std::env;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};

use super::error::GhError;

/// Public API host used when GITHUB_API_ENDPOINT is unset.
pub const DEFAULT_API_HOST: &str = "api.github.com";

/// Accept header GitHub's v3 surface expects.
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// Which wire binding the unlocker should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockTransport {
    /// Plain DELETE against the migrations REST endpoint.
    Rest,
    /// The unlockImportedRepositories mutation on /graphql.
    GraphQl,
}

/// Configuration assembled once at startup and injected into every call.
///
/// Read-only for the process lifetime. Nothing below this layer touches the
/// environment.
#[derive(Debug, Clone)]
pub struct GhConfig {
    pub token: String,
    /// Base URL without a trailing slash, e.g. `https://api.github.com`.
    pub api_base: String,
    pub transport: UnlockTransport,
}

impl GhConfig {
    /// Read GITHUB_TOKEN (required) and GITHUB_API_ENDPOINT (optional) from
    /// the environment. An empty token counts as missing.
    pub fn from_env(transport: UnlockTransport) -> Result<Self, GhError> {
        let token = env::var("GITHUB_TOKEN").map_err(|_| GhError::MissingToken)?;
        if token.is_empty() {
            return Err(GhError::MissingToken);
        }

        let host =
            env::var("GITHUB_API_ENDPOINT").unwrap_or_else(|_| DEFAULT_API_HOST.to_string());

        Ok(Self::new(token, &host, transport))
    }

    /// Build a config from explicit values. `host` may be a bare hostname
    /// (https is assumed) or a full base URL, which tests use to point the
    /// client at a mock server.
    pub fn new(token: String, host: &str, transport: UnlockTransport) -> Self {
        let host = host.trim_end_matches('/');
        let api_base = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{host}")
        };

        GhConfig {
            token,
            api_base,
            transport,
        }
    }
}

/// A configured HTTP client plus the settings both API calls share.
pub struct GhClient {
    config: GhConfig,
    http: Client,
}

impl GhClient {
    pub fn new(config: GhConfig) -> Result<Self, GhError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));

        let http = Client::builder()
            .user_agent("unlatch")
            .default_headers(headers)
            .build()
            .map_err(|source| GhError::ClientBuild { source })?;

        Ok(GhClient { config, http })
    }

    pub fn config(&self) -> &GhConfig {
        &self.config
    }

    /// Absolute URL for a path under the configured API base.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base, path)
    }

    /// Start a bearer-authenticated request.
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.config.token)
    }
}
