//! Session Tokens
//!
//! Mints and validates the signed, time-scoped identity token that backs a
//! login session. The token is a JWT binding the username and user ID; it is
//! never persisted server-side. The client carries it in the `token` cookie
//! and it is revalidated on every request.
//!
//! The signing secret and token lifetime are explicit construction
//! parameters of [`TokenSigner`], not ambient globals, so tests run with a
//! fixed secret and arbitrary lifetimes.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name of the cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "token";

/// Claims embedded in a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Username
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Issues and verifies session tokens with a fixed secret and lifetime.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenSigner {
    /// Create a signer with the default 30-day token lifetime.
    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, Duration::days(30))
    }

    /// Create a signer with an explicit token lifetime.
    pub fn with_ttl(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issue a signed token binding the given user ID and username.
    pub fn issue(
        &self,
        user_id: Uuid,
        username: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            exp: (now + self.ttl).timestamp().max(0) as u64,
            iat: now.timestamp().max(0) as u64,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token and return its claims unchanged.
    ///
    /// Fails if the signature does not match, the structure is malformed,
    /// or the token has expired.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(token, &self.decoding, &validation)?;
        Ok(token_data.claims)
    }
}

/// `Set-Cookie` value installing the session token.
pub fn session_cookie(token: &str) -> String {
    format!("{TOKEN_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value clearing the session token.
pub fn clear_session_cookie() -> String {
    format!("{TOKEN_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
