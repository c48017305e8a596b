//! Configuration types for news-aggregator

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, path::PathBuf, time::Duration};
use url::Url;

/// Main configuration for NewsAggregator
///
/// Fields are organized into logical sub-configs:
/// - [`scrape`](ScrapeConfig) - source addresses and cycle interval
/// - [`persistence`](PersistenceConfig) - database location
/// - [`api`](ApiConfig) - REST API server settings
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Scrape pipeline settings (sources, interval)
    #[serde(default)]
    pub scrape: ScrapeConfig,

    /// Data storage settings
    #[serde(default)]
    pub persistence: PersistenceConfig,

    /// REST API settings
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Build a configuration from the process environment
    ///
    /// A `.env` file in the working directory is loaded first when present.
    /// Recognized variables, all optional (defaults apply otherwise):
    ///
    /// - `NEWS_DATABASE_PATH` - SQLite database file path
    /// - `NEWS_SOURCES` - comma-separated source listing URLs
    /// - `NEWS_SCRAPE_INTERVAL_SECS` - seconds between scrape cycles
    /// - `NEWS_API_BIND` - API socket address, e.g. `127.0.0.1:8080`
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Config::default();

        if let Ok(path) = std::env::var("NEWS_DATABASE_PATH") {
            config.persistence.database_path = PathBuf::from(path);
        }

        if let Ok(raw) = std::env::var("NEWS_SOURCES") {
            config.scrape.sources = parse_sources(&raw)?;
        }

        if let Ok(raw) = std::env::var("NEWS_SCRAPE_INTERVAL_SECS") {
            let secs: u64 = raw.parse().map_err(|_| Error::Config {
                message: format!("invalid scrape interval: {raw}"),
                key: Some("NEWS_SCRAPE_INTERVAL_SECS".to_string()),
            })?;
            config.scrape.interval = Duration::from_secs(secs);
        }

        if let Ok(raw) = std::env::var("NEWS_API_BIND") {
            config.api.bind_address = raw.parse().map_err(|_| Error::Config {
                message: format!("invalid API bind address: {raw}"),
                key: Some("NEWS_API_BIND".to_string()),
            })?;
        }

        Ok(config)
    }
}

/// Parse and validate a comma-separated source address list
///
/// Empty entries (stray commas, trailing commas) are skipped; every
/// remaining entry must parse as an absolute URL.
fn parse_sources(raw: &str) -> Result<Vec<String>> {
    let mut sources = Vec::new();

    for entry in raw.split(',') {
        let address = entry.trim();
        if address.is_empty() {
            continue;
        }

        Url::parse(address).map_err(|e| Error::Config {
            message: format!("invalid source address {address}: {e}"),
            key: Some("NEWS_SOURCES".to_string()),
        })?;

        sources.push(address.to_string());
    }

    Ok(sources)
}

/// Scrape pipeline configuration (sources, cycle interval)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// News listing URLs fetched each cycle (default: none)
    #[serde(default)]
    pub sources: Vec<String>,

    /// Interval between scrape cycles in seconds (default: 300)
    #[serde(default = "default_scrape_interval", with = "duration_serde")]
    pub interval: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            sources: vec![],
            interval: default_scrape_interval(),
        }
    }
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Database path (default: "./news.db")
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

/// REST API configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Address to bind to (default: 127.0.0.1:8080)
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// Enable CORS for browser access (default: true)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins (default: ["*"])
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Enable Swagger UI at /swagger-ui (default: true)
    #[serde(default = "default_true")]
    pub swagger_ui: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors_enabled: true,
            cors_origins: default_cors_origins(),
            swagger_ui: true,
        }
    }
}

fn default_scrape_interval() -> Duration {
    Duration::from_secs(5 * 60) // 5 minutes
}

fn default_database_path() -> PathBuf {
    PathBuf::from("./news.db")
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_true() -> bool {
    true
}

// Duration serialization helper
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
