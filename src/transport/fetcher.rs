use crate::transport::error::TransportError;
use crate::utils::join_url;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const GEO_JSON: &str = "application/geo+json";

/// Issues GET requests against the weather API and decodes JSON bodies.
///
/// Every request carries `Accept: application/geo+json` and the configured
/// `User-Agent`. Nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct JsonFetcher {
    base_url: String,
    client: Client,
}

impl JsonFetcher {
    pub fn new(
        base_url: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static(GEO_JSON));

        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(default_headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches `resource` (an absolute path such as `/gridpoints/TOP/31,80/forecast`)
    /// with `headers` added to the defaults, and decodes the body as `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        headers: &HeaderMap,
    ) -> Result<T, TransportError> {
        let url = join_url(&self.base_url, resource);
        debug!("Requesting {}", url);

        let response = self
            .client
            .get(&url)
            .headers(headers.clone())
            .send()
            .await
            .map_err(|e| TransportError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    TransportError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    TransportError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::ResponseBody(url.clone(), e))?;

        serde_json::from_slice::<T>(&body).map_err(|source| {
            warn!("Unexpected response shape from {}: {}", url, source);
            TransportError::JsonParse { url, source }
        })
    }
}
