use serde::Deserialize;
use std::env;
use vcasky_core::DataSourceMode;
use vcasky_shared::Masked;

pub const DEFAULT_PROVIDER_URL: &str = "https://serpapi.com/search";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub search: SearchConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    pub data_source: DataSourceMode,
    /// Artificial delay applied by the generator, in milliseconds.
    #[serde(default)]
    pub simulated_latency_ms: u64,
    /// Fixed generator seed; entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<Masked<String>>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_base_url() -> String { DEFAULT_PROVIDER_URL.to_string() }
fn default_timeout_seconds() -> u64 { 15 }
fn default_currency() -> String { "BRL".to_string() }
fn default_country() -> String { "br".to_string() }
fn default_language() -> String { "pt".to_string() }

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_seconds: default_timeout_seconds(),
            currency: default_currency(),
            country: default_country(),
            language: default_language(),
        }
    }
}

impl ProviderConfig {
    /// The credential, if configured and not blank.
    pub fn credential(&self) -> Option<&Masked<String>> {
        self.api_key.as_ref().filter(|key| !key.is_blank())
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = config::Config::builder();

        // Conventional SerpApi variable, lowest precedence
        if let Ok(key) = env::var("SERPAPI_API_KEY") {
            builder = builder.set_default("provider.api_key", key)?;
        }

        let s = builder
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `VCASKY__SEARCH__DATA_SOURCE=provider`
            .add_source(config::Environment::with_prefix("VCASKY").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
