use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid backend URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl ApiError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        ApiError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
