use serde::Deserialize;
use serde::Serialize;

use super::errors::TokenError;

/// Signing algorithm. HS256 is the only one this crate produces or accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Algorithm {
    HS256,
}

/// Token type identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenType {
    JWT,
}

/// The token header.
///
/// There is exactly one valid value, `{"alg":"HS256","typ":"JWT"}`,
/// returned by [`Header::canonical`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header {
    pub alg: Algorithm,
    pub typ: TokenType,
}

impl Header {
    pub const fn canonical() -> Self {
        Self {
            alg: Algorithm::HS256,
            typ: TokenType::JWT,
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Header as read off the wire, before it is checked.
///
/// Absent members read as empty strings and unknown members are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawHeader {
    alg: String,
    typ: String,
}

/// Accept a decoded header only if it equals the canonical header.
///
/// # Errors
/// * `TokenFormatNotSupported` - Algorithm or type differ from HS256/JWT
pub(crate) fn check_header(raw: &RawHeader) -> Result<Header, TokenError> {
    match (raw.alg.as_str(), raw.typ.as_str()) {
        ("HS256", "JWT") => Ok(Header::canonical()),
        _ => Err(TokenError::TokenFormatNotSupported),
    }
}
