//! HMAC-SHA256 signing of the `header.payload` signing input.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::Hmac;
use hmac::Mac;
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Compute the HMAC-SHA256 tag of `message` keyed with `secret`.
///
/// The tag is returned as standard (padded) base64, which is the form
/// carried in the third token segment.
pub fn sign(message: &str, secret: &[u8]) -> String {
    // HMAC is defined for keys of any length, including empty ones
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts keys of any length");
    mac.update(message.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Check a candidate tag against the tag recomputed for `message`.
///
/// Comparison runs in constant time over the encoded tag bytes.
pub fn verify_tag(message: &str, secret: &[u8], candidate: &str) -> bool {
    let expected = sign(message, secret);
    expected.as_bytes().ct_eq(candidate.as_bytes()).into()
}
