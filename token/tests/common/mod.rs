use std::sync::Once;

use serde::Deserialize;
use serde::Serialize;
use token::Claims;
use token::WithClaims;

pub const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

static TRACING: Once = Once::new();

/// Route library logs to the test output (RUST_LOG=token=debug to see them)
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "token=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Payload used across the integration tests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub roles: Vec<String>,
    #[serde(flatten)]
    pub claims: Claims,
}

impl User {
    pub fn new(id: &str, claims: Claims) -> Self {
        Self {
            id: id.to_string(),
            username: format!("{}-name", id),
            roles: vec!["reader".to_string(), "writer".to_string()],
            claims,
        }
    }

    /// Placeholder target for unmarshal calls
    pub fn empty() -> Self {
        Self {
            id: String::new(),
            username: String::new(),
            roles: Vec::new(),
            claims: Claims::new(0, 0),
        }
    }
}

impl WithClaims for User {
    fn claims(&self) -> &Claims {
        &self.claims
    }
}
