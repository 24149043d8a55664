use thiserror::Error;

/// Error type for token generation and verification.
///
/// Every failure is surfaced to the caller as-is. Match on the variant,
/// the message text is not part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Failed to decode segment: {0}")]
    Decode(String),

    #[error("Failed to serialize value: {0}")]
    Serialize(String),

    #[error("Failed to deserialize value: {0}")]
    Deserialize(String),

    #[error("Token must contain exactly three non-empty segments")]
    TokenFormInvalid,

    #[error("Token header is not supported")]
    TokenFormatNotSupported,

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token claims are invalid: issued after expiration")]
    ClaimsInvalid,

    #[error("Token signature is invalid")]
    SignatureInvalid,

    #[error("Missing required claim: {0}")]
    MissingClaim(String),
}

impl From<base64::DecodeError> for TokenError {
    fn from(err: base64::DecodeError) -> Self {
        TokenError::Decode(err.to_string())
    }
}
