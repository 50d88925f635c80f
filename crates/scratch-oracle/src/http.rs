//! Typed HTTP client for the remote version endpoint.
//!
//! Default URL: `https://api.o2.sk/version`

use std::time::Duration;

use scratch_core::{CardCode, Version};
use serde::Deserialize;

use crate::config::OracleConfig;
use crate::error::OracleError;
use crate::retry::RetryPolicy;
use crate::VersionOracle;

// -- Types matching the version endpoint schema ---------------------------------

/// Body returned by the version endpoint. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionResponse {
    /// Version used to gate activation.
    pub android: i64,
}

// -- Client -------------------------------------------------------------------

/// Version oracle backed by an HTTP `GET`.
#[derive(Debug, Clone)]
pub struct HttpVersionOracle {
    http: reqwest::Client,
    url: url::Url,
    retry: RetryPolicy,
}

impl HttpVersionOracle {
    /// Build the client from configuration.
    pub fn new(config: OracleConfig) -> Result<Self, OracleError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OracleError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;
        Ok(Self {
            http,
            url: config.url,
            retry: config.retry,
        })
    }

    /// The endpoint this client queries.
    pub fn url(&self) -> &url::Url {
        &self.url
    }
}

impl VersionOracle for HttpVersionOracle {
    /// Calls `GET {url}?code={code}`.
    async fn get_version(&self, code: &CardCode) -> Result<Version, OracleError> {
        let endpoint = "GET /version";

        let resp = self
            .retry
            .run(code.as_str(), || {
                self.http
                    .get(self.url.clone())
                    .query(&[("code", code.as_str())])
                    .send()
            })
            .await
            .map_err(|e| OracleError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(OracleError::Api {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        let body: VersionResponse =
            resp.json().await.map_err(|e| OracleError::Deserialization {
                endpoint: endpoint.into(),
                source: e,
            })?;

        tracing::debug!(code = %code, version = body.android, "received version");
        Ok(Version(body.android))
    }
}
