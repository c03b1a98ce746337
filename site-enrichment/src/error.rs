use reqwest::StatusCode;
use thiserror::Error;

/// Why a single external lookup produced nothing usable.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{service} answered {status}: {body}")]
    Status {
        service: &'static str,
        status: StatusCode,
        body: String,
    },
    #[error("response is missing `{0}`")]
    MissingField(&'static str),
    #[error("no API key configured for {0}")]
    MissingApiKey(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
