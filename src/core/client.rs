//! Public client surface + builder.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::core::endpoint::{ApiHost, Endpoint};
use crate::core::query::{self, Params};
use crate::core::{CcError, net};

/// The user agent the original service tooling identifies itself with.
pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; U; Intel Mac OS X 10.4; en-US; rv:1.9.2.2) Gecko/20100316 Firefox/3.6.2";

/// Base URL for min-api operations (price, history, top lists).
pub(crate) const DEFAULT_BASE_MIN: &str = "https://min-api.cryptocompare.com/data/";

/// Base URL for the legacy site operations (snapshots, social stats,
/// mining equipment). Slated for retirement by the service.
pub(crate) const DEFAULT_BASE_SITE: &str = "https://www.cryptocompare.com/api/data/";

/// Asynchronous CryptoCompare client.
///
/// Cheap to clone and safe to share across tasks: it holds no mutable state,
/// and the underlying `reqwest::Client` is an `Arc` internally. Each call is
/// one independent GET; nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct CcClient {
    http: reqwest::Client,
    base_min: Url,
    base_site: Url,
}

impl Default for CcClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl CcClient {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> CcClientBuilder {
        CcClientBuilder::default()
    }

    pub(crate) fn base_for(&self, host: ApiHost) -> &Url {
        match host {
            ApiHost::Min => &self.base_min,
            ApiHost::Site => &self.base_site,
        }
    }

    /// The single generic path every operation goes through: build the URL
    /// from the endpoint descriptor, fetch, resolve.
    ///
    /// `required` values zip positionally with the descriptor's required
    /// parameter names; the per-operation methods keep the two in sync.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, err, fields(endpoint = ep.name))
    )]
    pub(crate) async fn call(
        &self,
        ep: &Endpoint,
        required: &[&str],
        params: &Params,
    ) -> Result<Value, CcError> {
        debug_assert_eq!(ep.required.len(), required.len());

        let pairs: Vec<(&str, &str)> = ep
            .required
            .iter()
            .copied()
            .zip(required.iter().copied())
            .collect();
        let url = query::build_url(self.base_for(ep.host), ep.path, &pairs, params);

        net::fetch_json(&self.http, &url).await
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`CcClient`].
#[derive(Debug, Default)]
pub struct CcClientBuilder {
    user_agent: Option<String>,
    base_min: Option<Url>,
    base_site: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl CcClientBuilder {
    /// Override the User-Agent header sent with every request.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the min-api base (e.g. `https://min-api.cryptocompare.com/data/`).
    /// Must end with `/`. Mostly useful for pointing tests at a mock server.
    #[must_use]
    pub fn base_min(mut self, url: Url) -> Self {
        self.base_min = Some(url);
        self
    }

    /// Override the legacy site base (e.g. `https://www.cryptocompare.com/api/data/`).
    /// Must end with `/`.
    #[must_use]
    pub fn base_site(mut self, url: Url) -> Self {
        self.base_site = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `CcError::Url` if a default base constant fails to parse, or
    /// `CcError::Http` if the underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<CcClient, CcError> {
        let base_min = match self.base_min {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_MIN)?,
        };
        let base_site = match self.base_site {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_SITE)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(CcClient {
            http,
            base_min,
            base_site,
        })
    }
}
