//! Error type for the handful of fallible conversions in the site.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("invalid ISO date `{input}`: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: time::error::Parse,
    },
    #[error("date `{0}` is outside the supported calendar range")]
    DateOutOfRange(String),
    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("service fee percent must be at most 100 (got {0})")]
    ServiceFeeOutOfRange(u32),
    #[error("available ratio must lie in 0.0..=1.0 (got {0})")]
    RatioOutOfRange(f64),
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;
