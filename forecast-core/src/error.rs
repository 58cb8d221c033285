use thiserror::Error;

/// Failure to fetch or parse the forecast feed.
///
/// Never recoverable here: a failed load leaves the store exactly as it
/// was, and the caller is expected to abort startup. Empty query
/// results are not errors, they are empty vectors.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to reach the forecast feed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("forecast feed request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse forecast feed JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
