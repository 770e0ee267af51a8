use crate::purifier::Model;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    gateway: Gateway,
    device: Device,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn device(&self) -> &Device {
        &self.device
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    #[serde(default = "default_log_level")]
    log_level: String,
}

impl Core {
    /// Falls back to INFO when the configured level is not a valid tracing level.
    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize)]
pub struct Gateway {
    url: String,
    token: Option<String>,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    #[serde(default = "default_max_properties")]
    max_properties: usize,
}

impl Gateway {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn max_properties(&self) -> usize {
        self.max_properties
    }
}

// Devices reject get_properties calls with more entries than this.
fn default_max_properties() -> usize {
    15
}

#[derive(Debug, Deserialize)]
pub struct Device {
    model: Model,
}

impl Device {
    pub fn model(&self) -> Model {
        self.model
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    log_level: "debug".to_string(),
                },
                gateway: Gateway {
                    url: "http://gateway.local/".to_string(),
                    token: Some("token".to_string()),
                    timeout: Duration::from_secs(5),
                    max_properties: 15,
                },
                device: Device { model: Model::Za1 },
            },
        }
    }

    pub fn gateway_url(mut self, url: String) -> Self {
        self.config.gateway.url = url;
        self
    }

    pub fn token(mut self, token: Option<&str>) -> Self {
        self.config.gateway.token = token.map(str::to_string);
        self
    }

    pub fn max_properties(mut self, max_properties: usize) -> Self {
        self.config.gateway.max_properties = max_properties;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use pretty_assertions::assert_eq;

    fn from_toml(toml: &str) -> Result<AppConfig, ConfigError> {
        Config::builder().add_source(config::File::from_str(toml, FileFormat::Toml)).build()?.try_deserialize()
    }

    #[test]
    fn deserializes_a_complete_configuration() -> Result<(), ConfigError> {
        let config = from_toml(
            r#"
            [core]
            log_level = "warn"

            [gateway]
            url = "http://192.168.1.20:8080/rpc"
            token = "secret"
            timeout = "2s 500ms"
            max_properties = 10

            [device]
            model = "zhimi.airpurifier.za1"
            "#,
        )?;

        assert_eq!(config.core().log_level(), tracing::Level::WARN);
        assert_eq!(config.gateway().url(), "http://192.168.1.20:8080/rpc");
        assert_eq!(config.gateway().token(), Some("secret"));
        assert_eq!(config.gateway().timeout(), Duration::from_millis(2500));
        assert_eq!(config.gateway().max_properties(), 10);
        assert_eq!(config.device().model(), Model::Za1);

        Ok(())
    }

    #[test]
    fn applies_defaults_for_optional_settings() -> Result<(), ConfigError> {
        let config = from_toml(
            r#"
            [core]

            [gateway]
            url = "http://gateway.local/"
            timeout = "5s"

            [device]
            model = "zhimi.airpurifier.za1"
            "#,
        )?;

        assert_eq!(config.core().log_level(), tracing::Level::INFO);
        assert_eq!(config.gateway().token(), None);
        assert_eq!(config.gateway().max_properties(), 15);

        Ok(())
    }

    #[test]
    fn rejects_an_unsupported_model() {
        let result = from_toml(
            r#"
            [core]

            [gateway]
            url = "http://gateway.local/"
            timeout = "5s"

            [device]
            model = "zhimi.airpurifier.mb4"
            "#,
        );

        assert!(result.is_err());
    }
}
