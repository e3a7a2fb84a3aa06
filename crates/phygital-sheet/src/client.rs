//! HTTP client for published spreadsheet CSV exports.

use std::time::Duration;

use reqwest::Client;

use crate::error::SheetError;

/// Fetches the raw CSV text of a published spreadsheet.
///
/// A single GET per call. Failures surface immediately as [`SheetError`];
/// there is no retry and no partial-result handling.
pub struct SheetClient {
    client: Client,
}

impl SheetClient {
    /// Creates a `SheetClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, SheetError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Downloads the CSV body at `url`.
    ///
    /// # Errors
    ///
    /// - [`SheetError::InvalidSourceUrl`]: `url` is not an absolute http(s) URL.
    /// - [`SheetError::UnexpectedStatus`]: any non-2xx response.
    /// - [`SheetError::Http`]: network or TLS failure.
    pub async fn fetch_csv(&self, url: &str) -> Result<String, SheetError> {
        let url = Self::source_url(url)?;

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "text/csv,text/plain;q=0.9,*/*;q=0.8")
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), "downloaded sheet export");
        Ok(body)
    }

    /// Validates the configured export URL.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::InvalidSourceUrl`] if the URL does not parse or
    /// uses a scheme other than `http`/`https`.
    fn source_url(raw: &str) -> Result<reqwest::Url, SheetError> {
        let url = reqwest::Url::parse(raw.trim()).map_err(|e| SheetError::InvalidSourceUrl {
            url: raw.to_owned(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(SheetError::InvalidSourceUrl {
                url: raw.to_owned(),
                reason: format!("unsupported scheme \"{other}\""),
            }),
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
