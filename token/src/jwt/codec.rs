//! Segment encoding: URL-safe base64 without padding, and JSON for
//! header and payload values.

use base64::engine::general_purpose::URL_SAFE;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::TokenError;

/// Encode bytes as URL-safe base64 with the trailing `=` stripped.
pub fn encode_segment(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode a URL-safe base64 segment.
///
/// Missing padding is restored before decoding, so both padded and
/// unpadded input is accepted.
///
/// # Errors
/// * `Decode` - Input has characters outside the URL-safe alphabet or an
///   impossible length
pub fn decode_segment(segment: &str) -> Result<Vec<u8>, TokenError> {
    let remainder = segment.len() % 4;
    if remainder == 0 {
        return Ok(URL_SAFE.decode(segment)?);
    }

    let mut padded = String::with_capacity(segment.len() + 4 - remainder);
    padded.push_str(segment);
    padded.extend(std::iter::repeat('=').take(4 - remainder));

    Ok(URL_SAFE.decode(padded)?)
}

/// Serialize a value to its JSON text form.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, TokenError> {
    serde_json::to_string(value).map_err(|e| TokenError::Serialize(e.to_string()))
}

/// Deserialize JSON bytes into the requested shape.
pub fn deserialize<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, TokenError> {
    serde_json::from_slice(bytes).map_err(|e| TokenError::Deserialize(e.to_string()))
}

/// Decode a segment and deserialize its JSON content in one step.
pub fn decode_json<T: DeserializeOwned>(segment: &str) -> Result<T, TokenError> {
    let bytes = decode_segment(segment)?;
    deserialize(&bytes)
}
