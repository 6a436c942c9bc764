//! Load analysis requests from JSON

use super::AnalysisRequest;
use crate::error::RequestError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a request from a JSON file
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<AnalysisRequest, RequestError> {
    let file = File::open(path)?;
    load_request_from_reader(BufReader::new(file))
}

/// Load a request from any reader (e.g., stdin, string buffer)
pub fn load_request_from_reader<R: std::io::Read>(reader: R) -> Result<AnalysisRequest, RequestError> {
    let request: AnalysisRequest = serde_json::from_reader(reader)?;
    Ok(request)
}
