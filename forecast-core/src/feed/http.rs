use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::{error::LoadError, model::FeedEntry};

use super::ForecastSource;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP(S) feed: one GET to a configured URL returning the whole JSON
/// array of forecast entries.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    url: String,
    http: Client,
}

impl HttpFeed {
    /// The original feed has no timeout at all; a bounded one changes
    /// nothing on the happy path and keeps a dead endpoint from hanging
    /// the process forever.
    pub fn new(url: impl Into<String>) -> Result<Self, LoadError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { url: url.into(), http })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ForecastSource for HttpFeed {
    async fn fetch(&self) -> Result<Vec<FeedEntry>, LoadError> {
        tracing::debug!(url = %self.url, "fetching forecast feed");

        let res = self.http.get(&self.url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(LoadError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let entries: Vec<FeedEntry> = serde_json::from_str(&body)?;

        tracing::debug!(entries = entries.len(), "forecast feed fetched");
        Ok(entries)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Back off to a char boundary; slicing mid-character panics.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_body_shortens_long_bodies() {
        let long = "x".repeat(500);
        let short = truncate_body(&long);
        assert_eq!(short.len(), 203);
        assert!(short.ends_with("..."));
    }

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("not found"), "not found");
    }

    #[test]
    fn truncate_body_backs_off_a_multibyte_char_at_the_cut() {
        // 'é' is two bytes and straddles the 200-byte cut point.
        let body = format!("{}é{}", "a".repeat(199), "tail".repeat(20));

        let short = truncate_body(&body);
        assert_eq!(short, format!("{}...", "a".repeat(199)));
    }
}
