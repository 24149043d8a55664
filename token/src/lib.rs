//! Compact signed tokens
//!
//! Builds and verifies self-contained bearer tokens of the form
//! `header.payload.signature`:
//! - Header fixed to `{"alg":"HS256","typ":"JWT"}`
//! - Payload is any serializable caller type carrying `iat`/`exp` claims
//! - Signature is HMAC-SHA256 over `header.payload` with a shared secret
//!
//! Everything is stateless: tokens are pure functions of payload and
//! secret, and verification only reads the local clock.
//!
//! # Examples
//!
//! ## Signing and Verifying
//! ```
//! use serde::{Deserialize, Serialize};
//! use token::{Claims, WithClaims};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct User {
//!     username: String,
//!     #[serde(flatten)]
//!     claims: Claims,
//! }
//!
//! impl WithClaims for User {
//!     fn claims(&self) -> &Claims {
//!         &self.claims
//!     }
//! }
//!
//! let me = User {
//!     username: "alice".to_string(),
//!     claims: Claims::default_expiry(),
//! };
//!
//! let signed = token::generate(&me, b"secret").unwrap();
//!
//! let mut decoded = User { username: String::new(), claims: Claims::new(0, 0) };
//! token::unmarshal(&signed, b"secret", &mut decoded).unwrap();
//! assert_eq!(decoded, me);
//! ```
//!
//! ## Authentication Only
//! ```
//! use token::{Claims, TokenError};
//!
//! let signed = token::generate(&Claims::new(1000, 2000), b"k").unwrap();
//!
//! assert!(token::is_valid_at(&signed, b"k", 1500).is_ok());
//! assert_eq!(token::is_valid_at(&signed, b"k", 2500), Err(TokenError::TokenExpired));
//! assert_eq!(token::is_valid_at(&signed, b"x", 1500), Err(TokenError::SignatureInvalid));
//! ```
//!
//! ## Long-lived Handler
//! ```
//! use token::{Claims, TokenHandler};
//!
//! let handler = TokenHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let signed = handler.generate(&handler.claims()).unwrap();
//! let claims: Claims = handler.decode(&signed).unwrap();
//! ```

pub mod config;
pub mod jwt;

// Re-export commonly used items
pub use jwt::decode;
pub use jwt::decode_at;
pub use jwt::generate;
pub use jwt::is_valid;
pub use jwt::is_valid_at;
pub use jwt::unmarshal;
pub use jwt::unmarshal_at;
pub use jwt::Claims;
pub use jwt::Header;
pub use jwt::TokenError;
pub use jwt::TokenHandler;
pub use jwt::WithClaims;
