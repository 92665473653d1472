//! Authenticated HTTP client for the Twist API
//!
//! Wraps reqwest::Client with bearer token injection and one place where
//! responses are classified. The resource modules add their operations as
//! `impl TwistClient` blocks on top of the primitives here.

use reqwest::multipart::Form;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{classify_failure, ApiError};

pub const DEFAULT_BASE_URL: &str = "https://api.twist.com/api/v3";

/// Query string parameters for a read endpoint.
pub(crate) type Query<'a> = [(&'a str, String)];

/// Client bound to one token and one base URL for its whole lifetime.
pub struct TwistClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl TwistClient {
    /// Build a client against the public API endpoint.
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Build a client against a custom endpoint (self-hosted proxies, tests).
    pub fn with_base_url(token: impl Into<String>, base_url: &str) -> Result<Self, ApiError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ApiError::Validation("API token cannot be empty".into()));
        }

        let parsed = url::Url::parse(base_url).map_err(|e| {
            ApiError::Validation(format!("invalid API base URL {}: {}", base_url, e))
        })?;
        if parsed.scheme() != "https" && parsed.scheme() != "http" {
            return Err(ApiError::Validation(format!(
                "API base URL must be http(s), got {}",
                base_url
            )));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a read endpoint and decode its JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query<'_>,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let body = self.execute(self.http.get(&url).query(query), &url).await?;
        decode(&body, &url)
    }

    /// POST a JSON payload and decode the returned record.
    pub(crate) async fn post<B, T>(&self, path: &str, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!("POST {}", url);

        let body = self.execute(self.http.post(&url).json(payload), &url).await?;
        decode(&body, &url)
    }

    /// POST a JSON payload to an action endpoint whose body carries nothing we use.
    pub(crate) async fn post_action<B>(&self, path: &str, payload: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!("POST {}", url);

        self.execute(self.http.post(&url).json(payload), &url)
            .await
            .map(|_| ())
    }

    /// POST a multipart form and decode the returned record.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("POST (multipart) {}", url);

        let body = self.execute(self.http.post(&url).multipart(form), &url).await?;
        decode(&body, &url)
    }

    /// GET an absolute URL without the bearer token (signed download links).
    ///
    /// Returns the live response so the caller can stream the body.
    pub(crate) async fn fetch_unauthenticated(
        &self,
        url: &str,
    ) -> Result<reqwest::Response, ApiError> {
        tracing::debug!("GET (unauthenticated) {}", url);

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Connection {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.map_err(|source| ApiError::Connection {
                url: url.to_string(),
                source,
            })?;
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp)
    }

    /// Attach the token, send, and classify the outcome.
    async fn execute(&self, req: RequestBuilder, url: &str) -> Result<Vec<u8>, ApiError> {
        let connection_err = |source| ApiError::Connection {
            url: url.to_string(),
            source,
        };

        let resp = req
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(connection_err)?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(connection_err)?;

        if status != StatusCode::OK {
            tracing::debug!("{} answered HTTP {}", url, status.as_u16());
            return Err(classify_failure(status.as_u16(), &body));
        }

        Ok(body.to_vec())
    }
}

fn decode<T: DeserializeOwned>(body: &[u8], url: &str) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}
