use crate::config::ClientConfig;
use crate::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use tracing::debug;

/// A single configured HTTP client bound to a base URL.
///
/// The bearer token and JSON content type are installed as default headers, so no
/// operation handles credentials itself. The transport holds only immutable
/// configuration and is safe to share across concurrent calls.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| Error::configuration(format!("API key is not a valid header value: {}", e)))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body and return the response once its headers have arrived.
    ///
    /// The body is left unread; non-success statuses are turned into [`Error::Api`].
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        accept: &'static str,
    ) -> Result<reqwest::Response> {
        debug!(method = "POST", path, "dispatching request");
        let response = self
            .client
            .post(self.url(path))
            .header(ACCEPT, accept)
            .json(body)
            .send()
            .await
            .map_err(TransportError::Http)?;
        Self::ensure_success(response).await
    }

    /// GET a JSON document.
    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value> {
        debug!(method = "GET", path, "dispatching request");
        let response = self
            .client
            .get(self.url(path))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(TransportError::Http)?;
        let response = Self::ensure_success(response).await?;
        let body = response.bytes().await.map_err(TransportError::Http)?;
        serde_json::from_slice(&body).map_err(|e| {
            Error::format_with_context(
                format!("response body is not valid JSON: {}", e),
                crate::ErrorContext::new().with_source(path.to_string()),
            )
        })
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        // Keep the status even when the body cannot be read.
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!(status = status.as_u16(), error = %e, "failed to read error body");
                String::new()
            }
        };
        Err(Error::api(status.as_u16(), body))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
