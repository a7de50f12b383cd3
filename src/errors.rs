use std::path::PathBuf;
use thiserror::Error;

/// Every way a batch run can fail. Each variant names the stage it came from.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("there is no {0} file")]
    MissingArgument(&'static str),

    #[error("error reading {kind} file {}: {source}", .path.display())]
    ReadFile {
        kind: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error unwrapping {kind} json in {}: {source}", .path.display())]
    Parse {
        kind: &'static str,
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("client: could not create request for '{url}': {reason}")]
    RequestConstruction { url: String, reason: String },

    #[error("client: error making http request to '{url}': {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("client: could not read response body from '{url}': {source}")]
    BodyRead { url: String, source: reqwest::Error },
}

impl BatchError {
    pub fn construction(url: &str, reason: impl ToString) -> BatchError {
        return BatchError::RequestConstruction {
            url: url.to_string(),
            reason: reason.to_string(),
        };
    }
}
