use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read credentials from {path}: {source}")]
    Credentials {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid credentials file: {0}")]
    CredentialFormat(String),

    #[error("Failed to sign token assertion: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Failed to get access token: {status} {body}")]
    TokenExchange { status: StatusCode, body: String },

    #[error("Invalid store URL: {0}")]
    Url(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request for {path} failed: {status} {body}")]
    Status {
        status: StatusCode,
        path: String,
        body: String,
    },

    #[error("Failed to decode document: {0}")]
    Decode(#[from] serde_json::Error),
}

impl StoreError {
    /// Returns true if the error came from loading or using service-account credentials.
    pub fn is_credentials(&self) -> bool {
        matches!(
            self,
            StoreError::Credentials { .. }
                | StoreError::CredentialFormat(_)
                | StoreError::Token(_)
                | StoreError::TokenExchange { .. }
        )
    }
}
