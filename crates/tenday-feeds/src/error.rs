//! Error types for forecast sources.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    /// Input validation errors
    #[error("invalid ZIP code {0:?}: expected exactly 5 digits")]
    InvalidZip(String),

    #[error("invalid forecast URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: hyper::http::uri::InvalidUri,
    },

    #[error("could not build request: {0}")]
    Request(#[from] hyper::http::Error),

    #[error("TLS setup failed: {0}")]
    Tls(#[source] std::io::Error),

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: hyper_util::client::legacy::Error,
    },

    #[error("reading response body failed: {0}")]
    Body(#[from] hyper::Error),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("{url} did not respond within {secs}s")]
    Timeout { url: String, secs: u64 },

    /// The page loaded but carried no forecast list.
    #[error("no forecast data found for ZIP code {0}")]
    NoForecast(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FeedError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FeedError::InvalidZip(_) => {
                "Invalid ZIP code format. Please enter a 5-digit ZIP code.".to_string()
            }
            FeedError::Http { .. } | FeedError::Timeout { .. } | FeedError::Tls(_) => {
                "Unable to reach the forecast site. Please check your internet connection."
                    .to_string()
            }
            FeedError::Status { status, .. } => {
                format!("The forecast site answered with HTTP {status}.")
            }
            FeedError::NoForecast(zip) => format!("No weather data found for ZIP code {zip}."),
            other => other.to_string(),
        }
    }
}
