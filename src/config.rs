use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub hotels_file: Option<PathBuf>,
    pub cities_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            hotels_file: None,
            cities_file: None,
        }
    }
}

impl Config {
    /// Reads `HOST`, `PORT`, `HOTELS_FILE` and `CITIES_FILE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) if port != 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            None => defaults.port,
        };

        let path = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            hotels_file: path("HOTELS_FILE"),
            cities_file: path("CITIES_FILE"),
        })
    }
}
