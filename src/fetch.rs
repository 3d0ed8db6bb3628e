//! HTTP retrieval of feed documents.
//!
//! One request, one result: the URL is parsed before any network activity,
//! the response body is handed verbatim to the decoder, and every failure
//! mode comes back as a typed [`FetchError`]. The client is caller-owned
//! so timeouts, proxies, and connection pooling stay under the caller's
//! control; this module never retries.

use thiserror::Error;
use url::Url;

use crate::codec::{self, DecodeError};
use crate::model::Feed;

/// Errors that can occur while fetching and decoding a remote feed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL string could not be parsed; no request was issued.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// The response body was not a decodable feed document.
    #[error("Decode failed: {0}")]
    Decode(#[from] DecodeError),
}

/// Fetches a feed document from `url` and decodes it.
///
/// Any 2xx status is treated as success; anything else is
/// [`FetchError::HttpStatus`]. Decode failures from the response body
/// propagate unchanged as [`FetchError::Decode`].
pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<Feed, FetchError> {
    let url = Url::parse(url)?;

    tracing::debug!(%url, "fetching feed");
    let response = client.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%url, status = status.as_u16(), "feed request returned error status");
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let bytes = response.bytes().await?;
    Ok(codec::from_slice(&bytes)?)
}
