use std::env;
use std::str::FromStr;

use crate::shared::AppError;

/// Where player documents are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Mongo,
    Memory, // lost on restart
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "memory" => Ok(Self::Memory),
            other => Err(AppError::Config(format!(
                "unknown storage backend '{}'",
                other
            ))),
        }
    }
}

/// Server settings, read from `BOCCE_*` environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub storage: StorageBackend,
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub mongodb_collection: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".to_string(),
            storage: StorageBackend::Mongo,
            mongodb_uri: "mongodb://localhost:27017/".to_string(),
            mongodb_database: "bocce_stats".to_string(),
            mongodb_collection: "players".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let storage = match lookup("BOCCE_STORAGE") {
            Some(value) => value.parse()?,
            None => defaults.storage,
        };

        Ok(Self {
            bind_addr: lookup("BOCCE_BIND_ADDR").unwrap_or(defaults.bind_addr),
            storage,
            mongodb_uri: lookup("BOCCE_MONGODB_URI").unwrap_or(defaults.mongodb_uri),
            mongodb_database: lookup("BOCCE_MONGODB_DATABASE")
                .unwrap_or(defaults.mongodb_database),
            mongodb_collection: lookup("BOCCE_MONGODB_COLLECTION")
                .unwrap_or(defaults.mongodb_collection),
        })
    }
}
