use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("provider returned http {status}")]
    Http { status: reqwest::StatusCode },

    #[error("network error: {0}")]
    Network(String),

    #[error("provider returned an empty response")]
    EmptyResponse,

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

impl ProviderError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Http { status }
        } else {
            Self::Network(err.to_string())
        }
    }
}
