use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub enum TransportError {
    InvalidUrl(String),
    Network(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::InvalidUrl(e) => write!(f, "invalid URL: {}", e),
            TransportError::Network(e) => write!(f, "network error: {}", e),
            TransportError::Status(code) => write!(f, "HTTP error! status: {}", code),
            TransportError::Decode(e) => write!(f, "invalid JSON response: {}", e),
        }
    }
}

impl std::error::Error for TransportError {}

/// Joins `endpoint` onto `base` and appends each query pair in order.
pub fn build_url(
    base: &Url,
    endpoint: &str,
    params: &[(&str, &str)],
) -> Result<Url, TransportError> {
    let mut url = base
        .join(endpoint)
        .map_err(|e| TransportError::InvalidUrl(format!("{}: {}", endpoint, e)))?;
    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: Url) -> Result<Value, TransportError>;
    async fn post(&self, url: Url, body: &Value) -> Result<Value, TransportError>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, TransportError> {
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: Url) -> Result<Value, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Self::read_json(response).await
    }

    async fn post(&self, url: Url, body: &Value) -> Result<Value, TransportError> {
        // `.json()` sets Content-Type: application/json
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Self::read_json(response).await
    }
}
