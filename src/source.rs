//! Loading the raw address list from a URL or a local file

use crate::config::Source;
use crate::error::{PipelineError, Result};
use reqwest::StatusCode;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Fetch the address list body over HTTP.
///
/// Anything other than `200 OK` is an error.
pub fn fetch_address_list(url: &str, timeout: Duration) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .connect_timeout(timeout)
        .timeout(timeout)
        .build()
        .map_err(|e| PipelineError::Fetch(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| PipelineError::Fetch(e.to_string()))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(PipelineError::Status(status.as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| PipelineError::Fetch(e.to_string()))?;
    debug!("Fetched {} bytes from {url}", body.len());

    Ok(body)
}

/// Read the address list body from a file.
pub fn read_address_list(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| PipelineError::Read {
        path: path.display().to_string(),
        details: e.to_string(),
    })
}

/// Decode a JSON array of strings.
pub fn parse_address_list(json: &str) -> Result<Vec<String>> {
    serde_json::from_str(json).map_err(|e| PipelineError::Decode(e.to_string()))
}

/// Load and decode the address list from the configured source.
pub fn load_addresses(source: &Source, timeout: Duration) -> Result<Vec<String>> {
    let body = match source {
        Source::Url(url) => {
            info!("Fetching JSON from {url}");
            fetch_address_list(url, timeout)?
        }
        Source::File(path) => {
            info!("Reading JSON from {}", path.display());
            read_address_list(path)?
        }
    };

    info!("Parsing JSON array");
    let addresses = parse_address_list(&body)?;
    info!("Found {} email addresses", addresses.len());

    Ok(addresses)
}
