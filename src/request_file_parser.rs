use crate::errors::BatchError;
use crate::http_request::{HeaderSet, RequestDescriptor};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

fn parse_json_file<T: DeserializeOwned>(path: &Path, kind: &'static str) -> Result<T, BatchError> {
    let content = fs::read(path).map_err(|source| BatchError::ReadFile {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    return serde_json::from_slice(&content).map_err(|source| BatchError::Parse {
        kind,
        path: path.to_path_buf(),
        source,
    });
}

/// Reads the requests file, a JSON array of request descriptors. Order is kept.
pub fn load_requests(path: &Path) -> Result<Vec<RequestDescriptor>, BatchError> {
    // a `null` document is an empty list
    let requests: Vec<RequestDescriptor> =
        parse_json_file::<Option<Vec<RequestDescriptor>>>(path, "requests")?.unwrap_or_default();
    tracing::debug!("loaded {} requests from {}", requests.len(), path.display());
    return Ok(requests);
}

/// Reads the common headers file. Without a path no headers are applied.
pub fn load_headers(path: Option<&Path>) -> Result<HeaderSet, BatchError> {
    return match path {
        None => Ok(HeaderSet::default()),
        Some(path) => Ok(parse_json_file::<Option<HeaderSet>>(path, "headers")?.unwrap_or_default()),
    };
}
