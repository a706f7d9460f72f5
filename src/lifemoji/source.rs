//! HTTP access to the remote lifemoji vocabulary.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::JournalError;

/// Timeout for establishing a connection.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for the entire request including response.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Somewhere the raw vocabulary JSON can be downloaded from.
///
/// The cache only needs the response body. Tests substitute a scripted
/// source; the binary uses [`HttpLifemojiSource`].
pub trait LifemojiSource {
    /// Performs a single GET and returns the body text.
    ///
    /// Any transport failure or non-success status is reported as
    /// `NetworkUnavailable`.
    fn fetch_raw(&self) -> Result<String, JournalError>;
}

/// Blocking `reqwest` client for the vocabulary URL.
pub struct HttpLifemojiSource {
    client: Client,
    url: String,
}

impl HttpLifemojiSource {
    /// Creates a source for the given URL.
    pub fn new(url: &str) -> Result<Self, JournalError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| JournalError::NetworkUnavailable(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl LifemojiSource for HttpLifemojiSource {
    fn fetch_raw(&self) -> Result<String, JournalError> {
        tracing::debug!(url = %self.url, "Downloading lifemojis");

        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| JournalError::NetworkUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(JournalError::NetworkUnavailable(format!(
                "server returned {}",
                status.as_u16()
            )));
        }

        response
            .text()
            .map_err(|e| JournalError::NetworkUnavailable(e.to_string()))
    }
}
