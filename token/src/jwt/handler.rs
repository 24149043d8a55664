use std::fmt;

use chrono::Duration;
use config::ConfigError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use zeroize::Zeroizing;

use super::claims::Claims;
use super::claims::WithClaims;
use super::claims::DEFAULT_EXPIRATION_SECONDS;
use super::compact;
use super::errors::TokenError;
use super::verifier;
use crate::config::TokenConfig;

/// Token handler bound to one secret.
///
/// Convenience wrapper over the free functions in [`crate::jwt`] for
/// services that sign and verify with a single long-lived key. The
/// secret is wiped from memory when the handler is dropped.
pub struct TokenHandler {
    secret: Zeroizing<Vec<u8>>,
    expiration: Duration,
}

impl TokenHandler {
    /// Create a new handler with a secret key and the default lifetime.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self::with_expiration(secret, Duration::seconds(DEFAULT_EXPIRATION_SECONDS))
    }

    /// Create a new handler issuing tokens valid for `expiration`.
    pub fn with_expiration(secret: &[u8], expiration: Duration) -> Self {
        Self {
            secret: Zeroizing::new(secret.to_vec()),
            expiration,
        }
    }

    /// Create a handler from loaded configuration.
    ///
    /// # Errors
    /// * `ConfigError::Message` - Expiration is outside the representable range
    pub fn from_config(config: &TokenConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_expiration(
            config.secret.as_bytes(),
            config.expiration()?,
        ))
    }

    /// Lifetime given to claims created by [`TokenHandler::claims`].
    pub fn expiration(&self) -> Duration {
        self.expiration
    }

    /// Claims issued now that expire after this handler's lifetime.
    pub fn claims(&self) -> Claims {
        Claims::with_expiry(self.expiration)
    }

    /// Sign a payload into a token.
    ///
    /// # Errors
    /// * `Serialize` - Payload could not be serialized
    pub fn generate<P>(&self, payload: &P) -> Result<String, TokenError>
    where
        P: Serialize + WithClaims,
    {
        compact::generate(payload, &self.secret)
    }

    /// Verify a token and write its payload into `target`.
    pub fn unmarshal<P: DeserializeOwned>(
        &self,
        token: &str,
        target: &mut P,
    ) -> Result<(), TokenError> {
        verifier::unmarshal(token, &self.secret, target)
    }

    /// Verify a token and return its payload.
    pub fn decode<P: DeserializeOwned>(&self, token: &str) -> Result<P, TokenError> {
        verifier::decode(token, &self.secret)
    }

    /// Verify a token without decoding its payload.
    pub fn is_valid(&self, token: &str) -> Result<(), TokenError> {
        verifier::is_valid(token, &self.secret)
    }
}

impl fmt::Debug for TokenHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenHandler")
            .field("secret", &"[REDACTED]")
            .field("expiration", &self.expiration)
            .finish()
    }
}
