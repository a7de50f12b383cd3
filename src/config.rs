use crate::errors::BatchError;
use std::path::PathBuf;

/// Paths for one batch run, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub requests_path: PathBuf,
    pub headers_path: Option<PathBuf>,
    pub output_path: PathBuf,
}

impl Config {
    /// Empty required paths are rejected, an empty headers path means no headers file.
    pub fn new(requests: &str, headers: Option<&str>, output: &str) -> Result<Config, BatchError> {
        if requests.is_empty() {
            return Err(BatchError::MissingArgument("input"));
        }
        if output.is_empty() {
            return Err(BatchError::MissingArgument("output"));
        }
        return Ok(Config {
            requests_path: PathBuf::from(requests),
            headers_path: headers.filter(|h| !h.is_empty()).map(PathBuf::from),
            output_path: PathBuf::from(output),
        });
    }
}
