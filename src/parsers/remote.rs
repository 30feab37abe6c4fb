//! Fetching API descriptions over HTTP.

use super::{ParseError, MAX_DOCUMENT_FILE_SIZE};
use crate::error::{ErrorContext, FetchErrorKind, Result, ScorerError};
use reqwest::blocking::Client;
use std::io::Read;
use std::time::Duration;

/// Helper to convert reqwest errors to fetch errors
fn network_error(url: &str, err: &reqwest::Error) -> ScorerError {
    ScorerError::fetch(url, FetchErrorKind::NetworkError(err.to_string()))
}

/// Download a document's text.
///
/// Bodies larger than [`MAX_DOCUMENT_FILE_SIZE`] are rejected from the
/// `Content-Length` header when present, and never read past the limit
/// otherwise.
pub fn fetch_text(url: &str, timeout: Duration) -> Result<String> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!("api-scorer/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| network_error(url, &e))?;

    tracing::debug!(url, timeout_secs = timeout.as_secs(), "Fetching API description");

    let response = client.get(url).send().map_err(|e| {
        if e.is_builder() {
            ScorerError::fetch(url, FetchErrorKind::InvalidUrl(e.to_string()))
        } else {
            network_error(url, &e)
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScorerError::fetch(
            url,
            FetchErrorKind::HttpStatus {
                status: status.as_u16(),
            },
        ));
    }

    if let Some(size) = response
        .content_length()
        .filter(|&len| len > MAX_DOCUMENT_FILE_SIZE)
    {
        return Err(ParseError::TooLarge {
            size,
            limit: MAX_DOCUMENT_FILE_SIZE,
        })
        .with_context(|| format!("fetching {url}"));
    }

    read_limited(response, MAX_DOCUMENT_FILE_SIZE).with_context(|| format!("fetching {url}"))
}

/// Read UTF-8 text, stopping one byte past `limit` so an oversized body is
/// detected without buffering all of it.
pub(crate) fn read_limited(reader: impl Read, limit: u64) -> Result<String> {
    let mut bytes = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut bytes)?;

    let size = bytes.len() as u64;
    if size > limit {
        return Err(ParseError::TooLarge { size, limit }.into());
    }
    String::from_utf8(bytes)
        .map_err(|e| ParseError::IoError(format!("body is not valid UTF-8: {e}")).into())
}
