pub mod claims;
pub mod codec;
pub mod compact;
pub mod errors;
pub mod handler;
pub mod header;
pub mod signer;
pub mod verifier;

pub use claims::Claims;
pub use claims::WithClaims;
pub use claims::DEFAULT_EXPIRATION_SECONDS;
pub use compact::generate;
pub use compact::split;
pub use compact::Segments;
pub use errors::TokenError;
pub use handler::TokenHandler;
pub use header::Algorithm;
pub use header::Header;
pub use header::TokenType;
pub use verifier::decode;
pub use verifier::decode_at;
pub use verifier::is_valid;
pub use verifier::is_valid_at;
pub use verifier::unmarshal;
pub use verifier::unmarshal_at;
