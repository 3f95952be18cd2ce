//! The HTTP client for the funds REST API.

use reqwest::{
    Client, Method, RequestBuilder, StatusCode, Url,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when calling the funds API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The base URL is not an absolute HTTP URL, e.g. "localhost:8000".
    #[error("invalid base URL {0:?}")]
    InvalidBaseUrl(String),

    /// The request could not be sent or the response could not be read,
    /// e.g. the server is unreachable.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    ///
    /// `body` holds the response body when it is valid JSON. The funds API
    /// reports errors as `{"detail": "<message>"}`.
    #[error("the server responded with status {status}")]
    Status {
        status: StatusCode,
        body: Option<Value>,
    },

    /// The server answered with a 2xx status code, but the body did not have
    /// the expected shape.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    /// The status code of the failed response, if the server sent one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(error) => error.status(),
            ApiError::Parse(_) | ApiError::InvalidBaseUrl(_) => None,
        }
    }

    /// The JSON body of the failed response, if the server sent one.
    pub fn body(&self) -> Option<&Value> {
        match self {
            ApiError::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// The error message supplied by the server in the `detail` field.
    pub fn detail(&self) -> Option<&str> {
        self.body()?.get("detail")?.as_str()
    }
}

/// A request client bound to the base URL of the funds API.
///
/// Every request carries a `Content-Type: application/json` header. There are
/// no retries and no timeouts: a failed request is reported once.
///
/// Paths are given as segments, e.g. `&["fondos", fund_id]`. Each segment is
/// percent-encoded, so an ID containing `/` or `?` stays a single segment.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the API served at `base_url`, e.g. "http://localhost:8000".
    ///
    /// # Errors
    /// Returns:
    /// - [ApiError::InvalidBaseUrl] if `base_url` is not an absolute HTTP URL.
    /// - [ApiError::Http] if the underlying HTTP client cannot be built,
    ///   e.g. if the TLS backend fails to initialize.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        let parsed = Url::parse(&base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or(ApiError::InvalidBaseUrl(base_url))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// The base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub(crate) async fn get<R: DeserializeOwned>(&self, path: &[&str]) -> Result<R, ApiError> {
        self.send(self.request(Method::GET, path)).await
    }

    pub(crate) async fn get_with_query<Q, R>(
        &self,
        path: &[&str],
        query: &Q,
    ) -> Result<R, ApiError>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.request(Method::GET, path).query(query);

        self.send(request).await
    }

    pub(crate) async fn post<B, R>(&self, path: &[&str], body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub(crate) async fn patch<B, R>(&self, path: &[&str], body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(self.request(Method::PATCH, path).json(body)).await
    }

    pub(crate) async fn delete<R: DeserializeOwned>(&self, path: &[&str]) -> Result<R, ApiError> {
        self.send(self.request(Method::DELETE, path)).await
    }

    fn request(&self, method: Method, path: &[&str]) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!("{method} {url}");

        self.client.request(method, url)
    }

    fn url(&self, path: &[&str]) -> Url {
        let mut url = self.base_url.clone();

        // `new` rejects URLs that cannot be a base, so this always succeeds.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(path);
        }

        url
    }

    async fn send<R: DeserializeOwned>(&self, request: RequestBuilder) -> Result<R, ApiError> {
        let response = request
            .send()
            .await
            .inspect_err(|error| tracing::warn!("request to the funds API failed: {error}"))?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            tracing::warn!(
                "funds API responded with {status}: {}",
                String::from_utf8_lossy(&bytes)
            );

            return Err(ApiError::Status {
                status,
                body: serde_json::from_slice(&bytes).ok(),
            });
        }

        serde_json::from_slice(&bytes).map_err(|error| {
            tracing::warn!("could not parse the funds API response: {error}");
            ApiError::Parse(error.to_string())
        })
    }
}
