use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::TokenError;

/// Default token lifetime in seconds (five minutes).
pub const DEFAULT_EXPIRATION_SECONDS: i64 = 5 * 60;

/// Mandatory timestamp claims carried by every token.
///
/// Payload types embed this with `#[serde(flatten)]` so that `iat` and
/// `exp` sit at the top level of the serialized payload next to the
/// caller's own fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Issued at (Unix timestamp)
    #[serde(rename = "iat")]
    pub issued_at: i64,

    /// Expiration time (Unix timestamp)
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl Claims {
    /// Create claims from explicit timestamps.
    pub fn new(issued_at: i64, expires_at: i64) -> Self {
        Self {
            issued_at,
            expires_at,
        }
    }

    /// Claims issued now that expire after the default lifetime.
    pub fn default_expiry() -> Self {
        Self::with_expiry(Duration::seconds(DEFAULT_EXPIRATION_SECONDS))
    }

    /// Claims issued now that expire after `lifetime`.
    ///
    /// An expiration past the representable date range saturates to
    /// `i64::MAX` (or `i64::MIN` for a negative lifetime).
    ///
    /// # Arguments
    /// * `lifetime` - Time until the token expires
    pub fn with_expiry(lifetime: Duration) -> Self {
        let now = Utc::now();
        let expires_at = match now.checked_add_signed(lifetime) {
            Some(expiration) => expiration.timestamp(),
            None if lifetime < Duration::zero() => i64::MIN,
            None => i64::MAX,
        };

        Self {
            issued_at: now.timestamp(),
            expires_at,
        }
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.issued_at = iat;
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.expires_at = exp;
        self
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp > self.expires_at
    }

    /// Validate the claims against `now`.
    ///
    /// Expiry is checked first, so claims that are both expired and
    /// inconsistent report `TokenExpired`.
    ///
    /// # Errors
    /// * `TokenExpired` - `now` is past the expiration time
    /// * `ClaimsInvalid` - Issued-at is later than the expiration time
    pub fn check(&self, now: i64) -> Result<(), TokenError> {
        if self.is_expired(now) {
            return Err(TokenError::TokenExpired);
        }
        if self.issued_at > self.expires_at {
            return Err(TokenError::ClaimsInvalid);
        }
        Ok(())
    }
}

/// Access to the mandatory claims of a payload type.
///
/// Implemented by any type that is signed into a token:
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use token::{Claims, WithClaims};
///
/// #[derive(Serialize, Deserialize)]
/// struct Session {
///     user_id: String,
///     #[serde(flatten)]
///     claims: Claims,
/// }
///
/// impl WithClaims for Session {
///     fn claims(&self) -> &Claims {
///         &self.claims
///     }
/// }
/// ```
pub trait WithClaims {
    fn claims(&self) -> &Claims;

    fn issued_at(&self) -> i64 {
        self.claims().issued_at
    }

    fn expires_at(&self) -> i64 {
        self.claims().expires_at
    }
}

impl WithClaims for Claims {
    fn claims(&self) -> &Claims {
        self
    }
}

/// Claims as read from an untrusted payload.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ClaimsView {
    iat: Option<i64>,
    exp: Option<i64>,
}

impl ClaimsView {
    /// # Errors
    /// * `MissingClaim` - `iat` or `exp` is absent
    pub(crate) fn into_claims(self) -> Result<Claims, TokenError> {
        let issued_at = self
            .iat
            .ok_or_else(|| TokenError::MissingClaim("iat".to_string()))?;
        let expires_at = self
            .exp
            .ok_or_else(|| TokenError::MissingClaim("exp".to_string()))?;

        Ok(Claims::new(issued_at, expires_at))
    }
}
