use config as config_rs;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub endpoint: String,
    pub model: String,
    /// Empty string means no credential was supplied.
    pub api_key: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Config(#[from] config_rs::ConfigError),
}

pub fn load_config(
    endpoint: &Option<String>,
    model: &Option<String>,
    api_key: &Option<String>,
) -> Result<AppConfig, ConfigError> {
    // Layered: defaults, then environment, then CLI flags.
    let mut builder = config_rs::Config::builder()
        .set_default("endpoint", DEFAULT_ENDPOINT)?
        .set_default("model", DEFAULT_MODEL)?
        .set_default("api_key", "")?;

    if let Ok(endpoint) = std::env::var("GEMINI_ENDPOINT") {
        builder = builder.set_override("endpoint", endpoint)?;
    }
    if let Ok(key) = std::env::var("GEMINI_API_KEY") {
        builder = builder.set_override("api_key", key)?;
    }

    if let Some(endpoint) = endpoint {
        builder = builder.set_override("endpoint", endpoint.clone())?;
    }
    if let Some(model) = model {
        builder = builder.set_override("model", model.clone())?;
    }
    if let Some(key) = api_key {
        builder = builder.set_override("api_key", key.clone())?;
    }

    let cfg = builder.build()?;

    Ok(AppConfig {
        endpoint: cfg.get::<String>("endpoint")?,
        model: cfg.get::<String>("model")?,
        api_key: cfg.get::<String>("api_key")?,
    })
}
