use crate::errors::BatchError;
use crate::http_request::{HeaderSet, RequestDescriptor};
use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// Holds the one client every request of a batch goes through.
pub struct ExecutionContext {
    pub client: reqwest::blocking::Client,
}

impl ExecutionContext {
    pub fn new() -> Result<ExecutionContext> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .context("while building the http client")?;
        return Ok(ExecutionContext { client });
    }
}

impl RequestDescriptor {
    pub fn name(&self) -> String {
        return format!("{} {}", self.resolved_method_name(), self.url);
    }

    fn resolved_method_name(&self) -> &str {
        return if self.method.is_empty() { "GET" } else { self.method.as_str() };
    }

    /// The descriptor's method verbatim, GET when none is given.
    pub fn method(&self) -> Result<reqwest::Method, BatchError> {
        return reqwest::Method::from_bytes(self.resolved_method_name().as_bytes())
            .map_err(|e| BatchError::construction(&self.url, e));
    }

    pub fn uri(&self) -> Result<reqwest::Url, BatchError> {
        return self
            .url
            .parse::<reqwest::Url>()
            .map_err(|e| BatchError::construction(&self.url, e));
    }
}

impl HeaderSet {
    /// Header map for the non-empty values of this set.
    pub fn header_map(&self, url: &str) -> Result<HeaderMap, BatchError> {
        let mut map = HeaderMap::new();
        if !self.content_type.is_empty() {
            let value = HeaderValue::from_str(&self.content_type)
                .map_err(|e| BatchError::construction(url, format!("Content-Type: {}", e)))?;
            map.insert(CONTENT_TYPE, value);
        }
        if !self.authorization.is_empty() {
            let mut value = HeaderValue::from_str(&self.authorization)
                .map_err(|e| BatchError::construction(url, format!("Authorization: {}", e)))?;
            value.set_sensitive(true);
            map.insert(AUTHORIZATION, value);
        }
        return Ok(map);
    }
}

/// Sends one request and returns the whole response body, bytes untouched.
/// The status code is not checked.
pub fn execute_http_request(
    request: &RequestDescriptor,
    headers: &HeaderSet,
    context: &ExecutionContext,
) -> Result<Vec<u8>, BatchError> {
    if !request.headers.is_empty() {
        tracing::warn!("{}: per-request headers are ignored, only common headers are sent", request.name());
    }

    let req = context
        .client
        .request(request.method()?, request.uri()?)
        .headers(headers.header_map(&request.url)?);

    let res = req.send().map_err(|source| BatchError::Transport {
        url: request.url.clone(),
        source,
    })?;
    let status = res.status();

    let body = res.bytes().map_err(|source| BatchError::BodyRead {
        url: request.url.clone(),
        source,
    })?;
    tracing::info!("{} -> {} ({} bytes)", request.name(), status, body.len());
    return Ok(body.to_vec());
}

/// Executes all requests in order. The first failure ends the batch.
pub fn run_requests(
    requests: &[RequestDescriptor],
    headers: &HeaderSet,
    context: &ExecutionContext,
) -> Result<Vec<Vec<u8>>> {
    let mut results = Vec::with_capacity(requests.len());
    for (index, request) in requests.iter().enumerate() {
        let body = execute_http_request(request, headers, context)
            .with_context(|| format!("while executing request #{} ({})", index + 1, request.name()))?;
        results.push(body);
    }
    return Ok(results);
}
