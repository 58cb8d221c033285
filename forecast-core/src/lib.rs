//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - The forecast record and the in-memory store with its query/sort
//!   operations
//! - The feed source abstraction and its HTTP implementation
//! - Configuration handling
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod feed;
pub mod model;
pub mod store;

pub use config::Config;
pub use error::LoadError;
pub use feed::{DEFAULT_FEED_URL, ForecastSource, HttpFeed};
pub use model::{FeedEntry, FeedLocation, Forecast};
pub use store::ForecastStore;
