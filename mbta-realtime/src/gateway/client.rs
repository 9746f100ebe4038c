//! Request gateway HTTP client.
//!
//! Every query object goes through [`Gateway`]. It owns the API key and the
//! `reqwest` connection pool; cloning it is cheap and shares the pool.

use reqwest::{StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::MbtaError;

use super::params::{Endpoint, Params, build_url};

/// Request gateway for the realtime v2 API.
#[derive(Debug, Clone)]
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Gateway {
    /// Create a new gateway with the given configuration.
    ///
    /// No request is made here; a bad key only shows up as a non-200
    /// response later.
    pub fn new(config: Config) -> Result<Self, MbtaError> {
        Url::parse(&config.base_url).map_err(|e| {
            MbtaError::Config(format!("invalid base URL {:?}: {e}", config.base_url))
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// The URL a request for `endpoint` with `params` would hit.
    pub fn url_for(&self, endpoint: Endpoint, params: &Params) -> Result<Url, MbtaError> {
        build_url(&self.base_url, &self.api_key, endpoint, params)
    }

    /// Fetch `endpoint` and parse the body as JSON.
    ///
    /// Anything but HTTP 200 is an [`MbtaError::Api`].
    pub async fn fetch(&self, endpoint: Endpoint, params: &Params) -> Result<Value, MbtaError> {
        let url = self.url_for(endpoint, params)?;

        debug!(%endpoint, params = params.len(), "sending request");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(MbtaError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| MbtaError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }

    /// Fetch `endpoint`, returning `None` on any failure.
    ///
    /// The failure is logged at `warn` and otherwise dropped.
    pub async fn request(&self, endpoint: Endpoint, params: &Params) -> Option<Value> {
        match self.fetch(endpoint, params).await {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%endpoint, error = %e, "request failed, treating as no data");
                None
            }
        }
    }
}
