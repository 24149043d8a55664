//! The three-segment `header.payload.signature` wire form.

use serde::Serialize;

use super::claims::WithClaims;
use super::codec;
use super::errors::TokenError;
use super::header::Header;
use super::signer;

const SEPARATOR: char = '.';

/// The segments of a compact token, still encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments<'a> {
    pub header: &'a str,
    pub payload: &'a str,
    pub signature: &'a str,
}

impl<'a> Segments<'a> {
    /// The `header.payload` prefix covered by the signature.
    pub fn signing_input(&self) -> String {
        format!("{}{}{}", self.header, SEPARATOR, self.payload)
    }
}

/// Sign a payload into a compact token.
///
/// The payload is serialized as-is; it must already carry its claims
/// (see [`crate::Claims::with_expiry`]).
///
/// # Arguments
/// * `payload` - Value to sign, serialized to JSON
/// * `secret` - HMAC key, must match the one used for verification
///
/// # Errors
/// * `Serialize` - Payload could not be serialized
pub fn generate<P>(payload: &P, secret: &[u8]) -> Result<String, TokenError>
where
    P: Serialize + WithClaims,
{
    let header = codec::serialize(&Header::canonical())?;
    let body = codec::serialize(payload)?;

    let mut token = codec::encode_segment(header.as_bytes());
    token.push(SEPARATOR);
    token.push_str(&codec::encode_segment(body.as_bytes()));

    let signature = signer::sign(&token, secret);
    token.push(SEPARATOR);
    token.push_str(&signature);

    tracing::trace!(expires_at = payload.expires_at(), "Token generated");

    Ok(token)
}

/// Split a compact token into its three segments.
///
/// # Errors
/// * `TokenFormInvalid` - Separator does not occur exactly twice, or a
///   segment is empty
pub fn split(token: &str) -> Result<Segments<'_>, TokenError> {
    let mut parts = token.split(SEPARATOR);

    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(payload), Some(signature), None)
            if !header.is_empty() && !payload.is_empty() && !signature.is_empty() =>
        {
            Ok(Segments {
                header,
                payload,
                signature,
            })
        }
        _ => Err(TokenError::TokenFormInvalid),
    }
}
