use std::env;
use std::fmt;

use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use config::FileFormat;
use serde::Deserialize;

use crate::jwt::DEFAULT_EXPIRATION_SECONDS;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub token: TokenConfig,
}

#[derive(Deserialize, Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub expiration_seconds: i64,
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"[REDACTED]")
            .field("expiration_seconds", &self.expiration_seconds)
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (TOKEN__SECRET, TOKEN__EXPIRATION_SECONDS)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in default expiration
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("token.expiration_seconds", DEFAULT_EXPIRATION_SECONDS)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: TOKEN__SECRET=... overrides token.secret
            .add_source(
                Environment::with_prefix("TOKEN")
                    .prefix_separator("__")
                    .separator("__")
                    .keep_prefix(true)
                    .try_parsing(true),
            )
            .build()?;

        Self::finish(configuration)
    }

    /// Load configuration from an in-memory TOML document.
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        let configuration = ConfigBuilder::builder()
            .set_default("token.expiration_seconds", DEFAULT_EXPIRATION_SECONDS)?
            .add_source(File::from_str(document, FileFormat::Toml))
            .build()?;

        Self::finish(configuration)
    }

    fn finish(configuration: ConfigBuilder) -> Result<Self, ConfigError> {
        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        tracing::debug!(
            expiration_seconds = config.token.expiration_seconds,
            "Token configuration loaded"
        );

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.token.secret.is_empty() {
            return Err(ConfigError::Message(
                "token.secret must not be empty".to_string(),
            ));
        }
        if self.token.expiration_seconds <= 0 {
            return Err(ConfigError::Message(format!(
                "token.expiration_seconds must be positive, got {}",
                self.token.expiration_seconds
            )));
        }
        self.token.expiration()?;
        Ok(())
    }
}

impl TokenConfig {
    /// Configured lifetime as a duration.
    ///
    /// # Errors
    /// * `ConfigError::Message` - Value is outside the representable range
    pub fn expiration(&self) -> Result<Duration, ConfigError> {
        Duration::try_seconds(self.expiration_seconds).ok_or_else(|| {
            ConfigError::Message(format!(
                "token.expiration_seconds out of range, got {}",
                self.expiration_seconds
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Held by every test that mutates process environment variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_from_toml() {
        let config = Config::from_toml(
            r#"
            [token]
            secret = "s3cret"
            expiration_seconds = 3600
            "#,
        )
        .expect("Failed to load config");

        assert_eq!(config.token.secret, "s3cret");
        assert_eq!(config.token.expiration_seconds, 3600);
    }

    #[test]
    fn test_default_expiration() {
        let config = Config::from_toml(
            r#"
            [token]
            secret = "s3cret"
            "#,
        )
        .expect("Failed to load config");

        assert_eq!(config.token.expiration_seconds, DEFAULT_EXPIRATION_SECONDS);
    }

    #[test]
    fn test_missing_secret() {
        let result = Config::from_toml("[token]\nexpiration_seconds = 60\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_secret() {
        let result = Config::from_toml("[token]\nsecret = \"\"\n");
        assert!(matches!(result, Err(ConfigError::Message(_))));
    }

    #[test]
    fn test_non_positive_expiration() {
        let result = Config::from_toml("[token]\nsecret = \"s\"\nexpiration_seconds = 0\n");
        assert!(matches!(result, Err(ConfigError::Message(_))));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = Config::from_toml("[token]\nsecret = \"hunter2\"\n").expect("Failed to load config");
        let output = format!("{:?}", config);

        assert!(!output.contains("hunter2"));
    }

    #[test]
    fn test_expiration_out_of_range() {
        let result = Config::from_toml(
            "[token]\nsecret = \"s\"\nexpiration_seconds = 100000000000000000\n",
        );
        assert!(matches!(result, Err(ConfigError::Message(_))));
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        env::set_var("TOKEN__SECRET", "from_env");
        env::set_var("TOKEN__EXPIRATION_SECONDS", "3600");
        let result = Config::load();
        env::remove_var("TOKEN__SECRET");
        env::remove_var("TOKEN__EXPIRATION_SECONDS");

        let config = result.expect("Failed to load config from environment");
        assert_eq!(config.token.secret, "from_env");
        assert_eq!(config.token.expiration_seconds, 3600);
    }

    #[test]
    fn test_load_uses_default_expiration() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        env::set_var("TOKEN__SECRET", "from_env");
        let result = Config::load();
        env::remove_var("TOKEN__SECRET");

        let config = result.expect("Failed to load config from environment");
        assert_eq!(config.token.expiration_seconds, DEFAULT_EXPIRATION_SECONDS);
    }

    #[test]
    fn test_load_without_secret() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        env::remove_var("TOKEN__SECRET");
        assert!(Config::load().is_err());
    }
}
