//! Client settings, layered from defaults, the environment's config file and `STRIPE__*`
//! environment variables.

use std::path::PathBuf;

use client_env::{env, logger};
use masking::{ApiKey, StrongSecret};
use serde::Deserialize;

use crate::errors::SettingsError;

mod defaults;
mod validations;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub proxy: Proxy,
    pub log: client_env::config::Log,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiSettings {
    /// Scheme and host the `/v1/...` paths are appended to.
    pub base_url: String,
    pub api_key: StrongSecret<String, ApiKey>,
    /// Overrides the version each resource is pinned to.
    pub api_version: Option<String>,
    /// Connected account requests are made on behalf of.
    pub stripe_account: Option<String>,
    /// Request timeout, in seconds.
    pub timeout: u64,
    pub max_network_retries: u32,
    /// Delay before the first retry, in milliseconds. Doubles on every attempt.
    pub initial_network_retry_delay: u64,
    /// Upper bound of the delay between two attempts, in milliseconds.
    pub max_network_retry_delay: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Proxy {
    pub http_url: Option<String>,
    pub https_url: Option<String>,
    /// Seconds an idle pooled connection is kept alive.
    pub idle_pool_connection_timeout: Option<u64>,
}

impl Settings {
    pub fn new() -> Result<Self, SettingsError> {
        Self::with_config_path(None)
    }

    pub fn with_config_path(config_path: Option<PathBuf>) -> Result<Self, SettingsError> {
        let environment = env::which();
        let config_path = client_env::Config::config_path(environment, config_path);

        let config = client_env::Config::builder(environment)?
            .add_source(::config::File::from(config_path).required(false))
            .add_source(client_env::Config::env_source())
            .build()?;

        let settings: Self = serde_path_to_error::deserialize(config).map_err(|error| {
            logger::error!(%error, "Unable to deserialize application configuration");
            SettingsError::from(error.into_inner())
        })?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.api.validate()?;
        self.proxy.validate()
    }
}
