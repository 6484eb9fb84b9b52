/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::config::RestApiConfig;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Response, Url};
use serde::Serialize;
use tracing::{debug, error};

/// HTTP session bound to a single base URL
///
/// Every request carries `Content-Type: application/json` and the crate user
/// agent. The underlying connection pool is reused across calls. There are
/// no retries and no timeouts: a request waits for the server to answer and
/// any non-2xx status is returned as [`AppError::Unexpected`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: Client,
    base_url: String,
}

impl HttpClient {
    /// Creates a session for the configured REST API
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Session ready to use
    /// * `Err(AppError::InvalidInput)` - If the base URL does not parse
    /// * `Err(AppError::Network)` - If the reqwest client cannot be built
    pub fn new(config: &RestApiConfig) -> Result<Self, AppError> {
        Url::parse(&config.base_url)
            .map_err(|e| AppError::InvalidInput(format!("base url {}: {e}", config.base_url)))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
        })
    }

    /// Base URL this session talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` onto the base URL with exactly one `/` between them
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Makes a GET request and returns the raw body
    pub async fn get(&self, path: &str) -> Result<String, AppError> {
        self.request(Method::GET, path, None::<()>).await
    }

    /// Makes a POST request with a JSON body and returns the raw body
    pub async fn post<B: Serialize>(&self, path: &str, body: B) -> Result<String, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a DELETE request and returns the raw body
    pub async fn delete(&self, path: &str) -> Result<String, AppError> {
        self.request(Method::DELETE, path, None::<()>).await
    }

    /// Makes a request and reads the successful response as text
    pub async fn request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<String, AppError> {
        let url = self.url(path);
        let response = make_http_request(&self.http_client, method, &url, &body).await?;
        Ok(response.text().await?)
    }
}

/// Joins a base URL and a relative path
///
/// Trailing slashes of `base` and leading slashes of `path` are collapsed, so
/// `("http://h:1/", "")` gives `http://h:1/` and `("http://h:1", "/order")`
/// gives `http://h:1/order`.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Sends a single HTTP request and checks its status
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `body` - Optional request body, serialized to JSON
///
/// # Returns
///
/// * `Ok(Response)` - Response with a 2xx status
/// * `Err(AppError::Unexpected)` - Any other status; the body is logged first
/// * `Err(AppError::Network)` - Transport failure
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    body: &Option<B>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);
    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!("Request failed with status {}: {}", status, body);
    Err(AppError::Unexpected(status))
}
