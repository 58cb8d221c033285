use crate::{error::LoadError, model::FeedEntry};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod http;

pub use http::HttpFeed;

/// Seven-day forecast feed published by the Malaysian open-data API.
pub const DEFAULT_FEED_URL: &str = "https://api.data.gov.my/weather/forecast/";

/// Anything that can produce the full list of feed entries.
///
/// The store loads through this trait rather than an HTTP client
/// directly, so tests can feed it canned payloads.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch(&self) -> Result<Vec<FeedEntry>, LoadError>;
}
