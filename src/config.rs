use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub web: WebConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ListenConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// JSON array of user profiles, re-read on every request
    #[serde(default = "default_data_path")]
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WebConfig {
    #[serde(default = "default_true")]
    pub cors: bool,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { path: default_data_path() }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self { cors: true }
    }
}

// Default value functions
fn default_address() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8000 }
fn default_data_path() -> String { "data/user_profiles.json".to_string() }
fn default_true() -> bool { true }

pub const DEFAULT_CONFIG_PATH: &str = "swap-rank.toml";

impl Config {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path, e))?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config '{}': {}", path, e))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `path` if given; otherwise the default path, falling back to
    /// built-in defaults when that file does not exist.
    pub fn resolve(path: Option<&str>) -> anyhow::Result<(Self, Option<String>)> {
        match path {
            Some(p) => Ok((Self::load(p)?, Some(p.to_string()))),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Ok((Self::load(DEFAULT_CONFIG_PATH)?, Some(DEFAULT_CONFIG_PATH.to_string())))
            }
            None => Ok((Self::default(), None)),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen.address, self.listen.port)
    }
}
