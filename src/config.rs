use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::distance::Coordinate;
use crate::core::ranker::{DEFAULT_NEARBY_LIMIT, MAX_NEARBY_LIMIT};
use crate::core::responder::{default_replies, Responder, DEFAULT_FALLBACK, DEFAULT_GREETING};
use crate::models::ScriptedReply;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub chat: ChatSettings,
    #[serde(default)]
    pub favorites: FavoritesSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataSettings {
    /// JSON or TOML restroom catalog; the bundled fixture is used when unset
    pub restrooms_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    /// Reference point used when a request carries no coordinate
    #[serde(default = "default_latitude")]
    pub default_latitude: f64,
    #[serde(default = "default_longitude")]
    pub default_longitude: f64,
    #[serde(default = "default_nearby_limit")]
    pub nearby_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            default_latitude: default_latitude(),
            default_longitude: default_longitude(),
            nearby_limit: default_nearby_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl RankingSettings {
    pub fn default_location(&self) -> Result<Coordinate, ConfigError> {
        Coordinate::new(self.default_latitude, self.default_longitude)
            .map_err(|e| ConfigError::Message(format!("ranking default location: {}", e)))
    }
}

// Coimbatore city center
fn default_latitude() -> f64 { 11.0168 }
fn default_longitude() -> f64 { 76.9558 }
fn default_nearby_limit() -> usize { DEFAULT_NEARBY_LIMIT }
fn default_max_limit() -> usize { MAX_NEARBY_LIMIT }

#[derive(Debug, Clone, Deserialize)]
pub struct ChatSettings {
    #[serde(default = "default_fallback")]
    pub fallback: String,
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Ordered trigger/reply pairs; earlier entries take precedence
    #[serde(default = "default_replies")]
    pub responses: Vec<ScriptedReply>,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            fallback: default_fallback(),
            greeting: default_greeting(),
            responses: default_replies(),
        }
    }
}

impl ChatSettings {
    pub fn responder(&self) -> Responder {
        Responder::new(self.responses.clone(), self.fallback.clone(), self.greeting.clone())
    }
}

fn default_fallback() -> String { DEFAULT_FALLBACK.to_string() }
fn default_greeting() -> String { DEFAULT_GREETING.to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct FavoritesSettings {
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
    #[serde(default = "default_idle_ttl_secs")]
    pub idle_ttl_secs: u64,
}

impl Default for FavoritesSettings {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
            idle_ttl_secs: default_idle_ttl_secs(),
        }
    }
}

fn default_max_sessions() -> u64 { 10_000 }
fn default_idle_ttl_secs() -> u64 { 3600 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with RESTSTOP_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RESTSTOP__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("RESTSTOP")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
