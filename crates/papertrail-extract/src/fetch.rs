//! Page retrieval
//!
//! One blocking GET per extraction, bounded by the configured timeout.
//! Nothing is retried; failures go straight back to the caller.

use crate::config::ExtractorConfig;
use crate::error::{FetchError, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// Something that can turn a URL into page source
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP fetcher using reqwest
pub struct HttpFetcher {
    client: Client,
    config: ExtractorConfig,
}

impl HttpFetcher {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    fn map_send_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.config.timeout_secs)
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let parsed = validate_url(url)?;

        tracing::info!("Fetching {}", parsed);
        let response = self
            .client
            .get(parsed.as_str())
            .send()
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        check_declared_length(response.content_length(), self.config.max_body_bytes)?;
        let body = response.text().map_err(|e| self.map_send_error(e))?;
        check_body(url, body, self.config.max_body_bytes)
    }
}

/// Accept only absolute http(s) URLs
pub fn validate_url(url: &str) -> Result<url::Url> {
    let parsed = url::Url::parse(url.trim())?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::InvalidUrl(format!(
            "unsupported scheme '{}' in {}",
            other, url
        ))),
    }
}

/// Reject before reading when the server announces an oversized body
fn check_declared_length(content_length: Option<u64>, max: usize) -> Result<()> {
    match content_length {
        Some(size) if size > max as u64 => Err(FetchError::BodyTooLarge {
            size: size as usize,
            max,
        }),
        _ => Ok(()),
    }
}

// Chunked responses carry no length, so the decoded body is checked too
fn check_body(url: &str, body: String, max: usize) -> Result<String> {
    if body.len() > max {
        return Err(FetchError::BodyTooLarge {
            size: body.len(),
            max,
        });
    }
    if body.trim().is_empty() {
        return Err(FetchError::EmptyBody(url.to_string()));
    }
    Ok(body)
}
