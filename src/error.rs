use thiserror::Error;

/// Errors surfaced by the fetch pipeline.
///
/// Transport failures and non-2xx statuses are `Http`; structural
/// breakage of the site (missing identifiers, missing table) is
/// `Parse` so callers can tell network trouble apart from the site
/// having changed underneath us. Nothing here is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {message}")]
    Http { message: String },

    #[error("parse error: {message}")]
    Parse { message: String },

    #[error("missing mandatory column '{column}'")]
    Schema { column: String },

    #[error("invalid interval '{value}', expected one of daily, weekly, monthly")]
    InvalidInterval { value: String },

    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl FetchError {
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
