use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub recommendations_limit: u32,
    pub search_limit: usize,
    /// When true, match analyses are memoized for the duration of one page
    /// view. Off by default: the reference behavior re-fetches every score.
    pub cache_matches: bool,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            api_base_url: get_env_or("API_BASE_URL", "http://localhost:8000"),
            request_timeout_secs: get_env_parse_or("REQUEST_TIMEOUT_SECS", 30)?,
            recommendations_limit: get_env_parse_or("RECOMMENDATIONS_LIMIT", 20)?,
            search_limit: get_env_parse_or("SEARCH_LIMIT", 3)?,
            cache_matches: get_env_parse_or("CACHE_MATCHES", false)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 30,
            recommendations_limit: 20,
            search_limit: 3,
            cache_matches: false,
        }
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
