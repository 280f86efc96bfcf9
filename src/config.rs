use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub places: PlacesSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// External places/demographics API. When no base URL is configured the
/// provider serves deterministic mock data instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlacesSettings {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheSettings {
    pub capacity: Option<u64>,
    pub ttl_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default = "default_mock_seed")]
    pub mock_seed: u64,
    #[serde(default = "default_mock_count")]
    pub mock_count: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_limit: default_max_limit(),
            mock_seed: default_mock_seed(),
            mock_count: default_mock_count(),
        }
    }
}

fn default_max_limit() -> u16 { 100 }
fn default_mock_seed() -> u64 { 20240601 }
fn default_mock_count() -> usize { 24 }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with HAVEN__)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HAVEN__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HAVEN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .build()?;

        settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HAVEN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply well-known plain environment variables on top of the layered config
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(base_url) = env::var("PLACES_API_URL") {
        builder = builder.set_override("places.base_url", base_url)?;
    }
    if let Ok(api_key) = env::var("PLACES_API_KEY") {
        builder = builder.set_override("places.api_key", api_key)?;
    }

    builder.build()
}
