//! Configuration loading from the environment.

use std::env;
use std::time::{SystemTime, SystemTimeError, UNIX_EPOCH};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::schema::{ExecutorConfig, ExecutorMetadata, Settings, DEFAULT_KEY_MANAGER_PATH};

pub const CHAIN_ID: &str = "CHAIN_ID";
pub const EXECUTOR_ADDRESS: &str = "EXECUTOR_ADDRESS";
pub const INPUT_TOKENS: &str = "INPUT_TOKENS";
pub const HOP_ADDRESSES: &str = "HOP_ADDRESSES";
pub const FEE_IN_BPS: &str = "FEE_IN_BPS";
pub const FEE_TOKEN: &str = "FEE_TOKEN";
pub const FEE_RECEIVER: &str = "FEE_RECEIVER";
pub const LIMIT_PER_EXECUTION: &str = "LIMIT_PER_EXECUTION";
pub const CLIENT_ID: &str = "CLIENT_ID";
pub const ADDRESS_TAGS: &str = "ADDRESS_TAGS";
pub const EXECUTOR_NAME: &str = "EXECUTOR_NAME";
pub const EXECUTOR_LOGO: &str = "EXECUTOR_LOGO";
pub const API_BASE_URL: &str = "API_BASE_URL";
pub const VAULT_KEY_MANAGER_PATH: &str = "VAULT_KEY_MANAGER_PATH";

/// Skips `.env` hydration when set.
pub const SKIP_DOTENV: &str = "EXECUTOR_REGISTRAR_SKIP_DOTENV";

/// Errors emitted when `.env` hydration or environment parsing fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not set in the environment variables")]
    MissingVar { key: &'static str },

    #[error("invalid integer in `{key}`: {source}")]
    InvalidNumber {
        key: &'static str,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid JSON in `{key}`: {source}")]
    InvalidJson {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid URL in `{key}`: {source}")]
    InvalidUrl {
        key: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("system clock is before the Unix epoch: {source}")]
    Clock {
        #[from]
        source: SystemTimeError,
    },

    #[error("failed to load .env file: {source}")]
    Dotenv {
        #[from]
        source: dotenvy::Error,
    },
}

impl Settings {
    /// Load settings from the process environment, after hydrating `.env`.
    pub fn from_env(timestamp: u64) -> Result<Self, ConfigError> {
        hydrate_env_file()?;
        Self::from_lookup(timestamp, |key| env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(timestamp: u64, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &'static str| {
            lookup(key).and_then(|value| {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
        };

        let executor = ExecutorConfig {
            timestamp,
            chain_id: parse_number(CHAIN_ID, get(CHAIN_ID), 1)?,
            executor: get(EXECUTOR_ADDRESS),
            input_tokens: parse_json(INPUT_TOKENS, get(INPUT_TOKENS))?,
            hop_addresses: parse_json(HOP_ADDRESSES, get(HOP_ADDRESSES))?,
            fee_in_bps: parse_number(FEE_IN_BPS, get(FEE_IN_BPS), 0)?,
            fee_token: get(FEE_TOKEN),
            fee_receiver: get(FEE_RECEIVER),
            limit_per_execution: get(LIMIT_PER_EXECUTION).as_deref() == Some("true"),
            client_id: get(CLIENT_ID),
        };

        let metadata = ExecutorMetadata {
            name: get(EXECUTOR_NAME),
            logo: get(EXECUTOR_LOGO),
            address_tags: parse_json::<Map<String, Value>>(ADDRESS_TAGS, get(ADDRESS_TAGS))?,
        };

        let settings = Self {
            executor,
            metadata,
            api_base_url: get(API_BASE_URL),
            key_manager_path: get(VAULT_KEY_MANAGER_PATH)
                .unwrap_or_else(|| DEFAULT_KEY_MANAGER_PATH.to_string()),
        };

        tracing::debug!(
            chain_id = settings.executor.chain_id,
            executor = ?settings.executor.executor,
            input_tokens = settings.executor.input_tokens.len(),
            hop_addresses = settings.executor.hop_addresses.len(),
            api_base_url = ?settings.api_base_url,
            "Configuration loaded"
        );

        Ok(settings)
    }

    /// The registration API base URL, or a configuration error when unset
    /// or not an absolute URL.
    pub fn require_api_base_url(&self) -> Result<&str, ConfigError> {
        let base = self
            .api_base_url
            .as_deref()
            .ok_or(ConfigError::MissingVar { key: API_BASE_URL })?;
        url::Url::parse(base).map_err(|source| ConfigError::InvalidUrl {
            key: API_BASE_URL,
            source,
        })?;
        Ok(base)
    }
}

/// Milliseconds since the Unix epoch at `now`.
pub fn unix_millis(now: SystemTime) -> Result<u64, ConfigError> {
    let elapsed = now.duration_since(UNIX_EPOCH)?;
    Ok(elapsed.as_millis() as u64)
}

fn parse_number(key: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match raw {
        Some(value) => value
            .parse()
            .map_err(|source| ConfigError::InvalidNumber { key, source }),
        None => Ok(default),
    }
}

fn parse_json<T>(key: &'static str, raw: Option<String>) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    match raw {
        Some(value) => {
            serde_json::from_str(&value).map_err(|source| ConfigError::InvalidJson { key, source })
        }
        None => Ok(T::default()),
    }
}

fn hydrate_env_file() -> Result<(), ConfigError> {
    if env::var_os(SKIP_DOTENV).is_some() {
        return Ok(());
    }
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(ConfigError::Dotenv { source: err }),
    }
    Ok(())
}
