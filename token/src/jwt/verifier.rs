//! Token verification.
//!
//! Checks run in a fixed order and stop at the first failure:
//! segment count, header, signature, claims. Claim content is only
//! decoded once the signature has been confirmed. The caller's payload
//! is deserialized last, after every check has passed.

use chrono::Utc;
use serde::de::DeserializeOwned;

use super::claims::Claims;
use super::claims::ClaimsView;
use super::codec;
use super::compact;
use super::compact::Segments;
use super::errors::TokenError;
use super::header;
use super::header::RawHeader;
use super::signer;

/// Verify a token and write its payload into `target`.
///
/// `target` is only assigned once verification has fully succeeded; on
/// error it is left untouched.
///
/// # Errors
/// * `TokenFormInvalid` - Token is not three non-empty segments
/// * `Decode` / `Deserialize` - A segment is not valid base64 or JSON
/// * `TokenFormatNotSupported` - Header is not HS256/JWT
/// * `SignatureInvalid` - Signature does not match the secret
/// * `MissingClaim` - Payload lacks `iat` or `exp`
/// * `TokenExpired` / `ClaimsInvalid` - Claims rejected
pub fn unmarshal<P: DeserializeOwned>(
    token: &str,
    secret: &[u8],
    target: &mut P,
) -> Result<(), TokenError> {
    unmarshal_at(token, secret, target, Utc::now().timestamp())
}

/// [`unmarshal`] against an explicit current time (Unix timestamp).
pub fn unmarshal_at<P: DeserializeOwned>(
    token: &str,
    secret: &[u8],
    target: &mut P,
    now: i64,
) -> Result<(), TokenError> {
    *target = decode_at(token, secret, now)?;
    Ok(())
}

/// Verify a token and return its payload.
///
/// # Errors
/// Same as [`unmarshal`].
pub fn decode<P: DeserializeOwned>(token: &str, secret: &[u8]) -> Result<P, TokenError> {
    decode_at(token, secret, Utc::now().timestamp())
}

/// [`decode`] against an explicit current time (Unix timestamp).
pub fn decode_at<P: DeserializeOwned>(
    token: &str,
    secret: &[u8],
    now: i64,
) -> Result<P, TokenError> {
    let segments = verify(token, secret, now)?;

    codec::decode_json(segments.payload).map_err(|e| {
        tracing::debug!(error = %e, "Token payload does not match target shape");
        e
    })
}

/// Verify a token without decoding its payload.
///
/// # Errors
/// Same as [`unmarshal`], except for payload shape mismatches.
pub fn is_valid(token: &str, secret: &[u8]) -> Result<(), TokenError> {
    is_valid_at(token, secret, Utc::now().timestamp())
}

/// [`is_valid`] against an explicit current time (Unix timestamp).
pub fn is_valid_at(token: &str, secret: &[u8], now: i64) -> Result<(), TokenError> {
    verify(token, secret, now).map(|_| ())
}

fn verify<'a>(token: &'a str, secret: &[u8], now: i64) -> Result<Segments<'a>, TokenError> {
    match run_checks(token, secret, now) {
        Ok((segments, claims)) => {
            tracing::trace!(expires_at = claims.expires_at, "Token verified");
            Ok(segments)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Token rejected");
            Err(e)
        }
    }
}

fn run_checks<'a>(
    token: &'a str,
    secret: &[u8],
    now: i64,
) -> Result<(Segments<'a>, Claims), TokenError> {
    let segments = compact::split(token)?;

    let raw_header: RawHeader = codec::decode_json(segments.header)?;
    header::check_header(&raw_header)?;

    if !signer::verify_tag(&segments.signing_input(), secret, segments.signature) {
        return Err(TokenError::SignatureInvalid);
    }

    let view: ClaimsView = codec::decode_json(segments.payload)?;
    let claims = view.into_claims()?;
    claims.check(now)?;

    Ok((segments, claims))
}
