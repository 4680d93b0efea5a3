//! Access tokens for the Firestore REST API.
//!
//! Service accounts use the OAuth2 JWT-bearer grant: a self-signed RS256
//! assertion is exchanged at the key's token URI for a short-lived bearer
//! token. Tokens are cached and refreshed one minute before they expire.

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::debug;

use crate::credentials::ServiceAccountKey;
use crate::errors::StoreError;

pub const DATASTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME: Duration = Duration::hours(1);
const EXPIRY_BUFFER: Duration = Duration::seconds(60);

/// Token used against the local emulator, which accepts any bearer.
pub const EMULATOR_TOKEN: &str = "owner";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub sub: String,
    pub aud: String,
    pub scope: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    fn for_key(key: &ServiceAccountKey, now: OffsetDateTime) -> Self {
        Self {
            iss: key.client_email.clone(),
            sub: key.client_email.clone(),
            aud: key.token_uri.clone(),
            scope: DATASTORE_SCOPE.to_string(),
            iat: now.unix_timestamp(),
            exp: (now + ASSERTION_LIFETIME).unix_timestamp(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    refresh_at: OffsetDateTime,
}

impl CachedToken {
    fn new(token: String, expires_in: i64, now: OffsetDateTime) -> Self {
        Self {
            token,
            refresh_at: now + Duration::seconds(expires_in) - EXPIRY_BUFFER,
        }
    }

    fn is_fresh(&self, now: OffsetDateTime) -> bool {
        now < self.refresh_at
    }
}

/// Where bearer tokens come from.
pub struct TokenSource {
    inner: Source,
}

enum Source {
    ServiceAccount {
        key: ServiceAccountKey,
        client: Client,
        cached: Mutex<Option<CachedToken>>,
    },
    Static(String),
}

impl TokenSource {
    pub fn service_account(key: ServiceAccountKey, client: Client) -> Self {
        Self {
            inner: Source::ServiceAccount {
                key,
                client,
                cached: Mutex::new(None),
            },
        }
    }

    pub fn emulator() -> Self {
        Self {
            inner: Source::Static(EMULATOR_TOKEN.to_string()),
        }
    }

    /// Returns a bearer token, exchanging a fresh assertion when the cached one is stale.
    pub async fn access_token(&self) -> Result<String, StoreError> {
        match &self.inner {
            Source::Static(token) => Ok(token.clone()),
            Source::ServiceAccount {
                key,
                client,
                cached,
            } => {
                let mut cached = cached.lock().await;
                let now = OffsetDateTime::now_utc();

                if let Some(token) = cached.as_ref()
                    && token.is_fresh(now)
                {
                    return Ok(token.token.clone());
                }

                let fresh = exchange_assertion(client, key, now).await?;
                let token = fresh.token.clone();
                *cached = Some(fresh);
                Ok(token)
            }
        }
    }
}

/// Signs the JWT assertion for a service-account key.
pub fn sign_assertion(key: &ServiceAccountKey, now: OffsetDateTime) -> Result<String, StoreError> {
    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
    let claims = Claims::for_key(key, now);
    Ok(encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)?)
}

async fn exchange_assertion(
    client: &Client,
    key: &ServiceAccountKey,
    now: OffsetDateTime,
) -> Result<CachedToken, StoreError> {
    let assertion = sign_assertion(key, now)?;

    debug!("Requesting access token for {}", key.client_email);

    let resp = client
        .post(&key.token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(StoreError::TokenExchange { status, body });
    }

    let token: TokenResponse = resp.json().await?;
    Ok(CachedToken::new(token.access_token, token.expires_in, now))
}
