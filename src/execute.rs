use crate::config::Config;
use crate::http_request_executor::{run_requests, ExecutionContext};
use crate::output_writer::{join_bodies, write_output};
use crate::request_file_parser::{load_headers, load_requests};
use anyhow::Result;

/// Runs one batch. Nothing is sent unless both input files load, and the
/// output file is only written once every request has succeeded.
pub fn execute_batch(config: &Config) -> Result<()> {
    let requests = load_requests(&config.requests_path)?;
    let headers = load_headers(config.headers_path.as_deref())?;
    let context = ExecutionContext::new()?;

    let results = run_requests(&requests, &headers, &context)?;

    write_output(&config.output_path, &join_bodies(&results));
    tracing::info!("{} responses written to {}", results.len(), config.output_path.display());
    return Ok(());
}
