//! Configuration management for the faucet relay.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the faucet relay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// HTTP server configuration
    pub http: HttpConfig,

    /// Downstream distribution service configuration
    pub downstream: DownstreamConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port to bind to
    pub port: u16,

    /// Address to bind to
    pub bind_address: String,
}

/// Downstream token-distribution service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownstreamConfig {
    /// URL of the claim endpoint on the distribution service
    pub claim_url: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig {
                port: 3030,
                bind_address: "127.0.0.1".to_string(),
            },
            downstream: DownstreamConfig {
                claim_url: "https://iyppmmnflwqrbezacmaf.supabase.co/functions/v1/claimMon"
                    .to_string(),
            },
        }
    }
}

impl RelayConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path.as_ref().to_str().unwrap()))
            .add_source(config::Environment::with_prefix("FAUCET_RELAY"))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        let url = url::Url::parse(&self.downstream.claim_url)
            .map_err(|e| anyhow::anyhow!("Invalid downstream claim URL: {}", e))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(anyhow::anyhow!(
                "Downstream claim URL must be http or https, got '{}'",
                url.scheme()
            ));
        }

        if self.http.port == 0 {
            return Err(anyhow::anyhow!("HTTP port must be greater than 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RelayConfig::default();

        assert_eq!(config.http.port, 3030);
        assert_eq!(config.http.bind_address, "127.0.0.1");
        assert!(config.downstream.claim_url.starts_with("https://"));
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = RelayConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = RelayConfig::default();

        let serialized = toml::to_string(&config).unwrap();
        let deserialized: RelayConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(config.http.port, deserialized.http.port);
        assert_eq!(config.downstream.claim_url, deserialized.downstream.claim_url);
    }

    #[test]
    fn test_config_from_file() -> anyhow::Result<()> {
        let toml_content = r#"
[http]
port = 8080
bind_address = "0.0.0.0"

[downstream]
claim_url = "https://faucet.example.com/api/claim"
"#;

        // Create a temporary file with .toml extension
        let temp_dir = tempfile::tempdir()?;
        let temp_path = temp_dir.path().join("test_config.toml");
        std::fs::write(&temp_path, toml_content)?;

        let config = RelayConfig::from_file(&temp_path)?;

        assert_eq!(config.http.port, 8080);
        assert_eq!(config.http.bind_address, "0.0.0.0");
        assert_eq!(
            config.downstream.claim_url,
            "https://faucet.example.com/api/claim"
        );

        Ok(())
    }

    #[test]
    fn test_config_validation() {
        let mut config = RelayConfig::default();
        assert!(config.validate().is_ok());

        // Non-URL downstream endpoint
        config.downstream.claim_url = "not a url".to_string();
        assert!(config.validate().is_err());

        // Wrong scheme
        config.downstream.claim_url = "ftp://example.com/claim".to_string();
        assert!(config.validate().is_err());

        // Port zero
        config.downstream.claim_url = "https://example.com/claim".to_string();
        config.http.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_config() -> anyhow::Result<()> {
        let mut config = RelayConfig::default();
        config.http.port = 8080;
        config.downstream.claim_url = "http://localhost:9000/claim".to_string();

        let temp_dir = tempfile::tempdir()?;
        let temp_path = temp_dir.path().join("test_save_config.toml");
        config.save_to_file(&temp_path)?;

        let loaded_config = RelayConfig::from_file(&temp_path)?;

        assert_eq!(config.http.port, loaded_config.http.port);
        assert_eq!(
            config.downstream.claim_url,
            loaded_config.downstream.claim_url
        );

        Ok(())
    }
}
