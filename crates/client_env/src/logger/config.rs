//!
//! Logger config, and the layered loading shared with the client settings.
//!

use std::{path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::env::{self, Env};

/// Prefix of the environment variables overriding config values, `STRIPE__LOG__CONSOLE__LEVEL`
/// for instance.
pub const ENV_PREFIX: &str = "STRIPE";

/// Config of the logger alone, for binaries and tests that do not load the client settings.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Log outputs.
    #[serde(default)]
    pub log: Log,
}

/// Log outputs.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Log {
    /// Hourly rolling JSON files.
    pub file: LogFile,
    /// Standard output.
    pub console: LogConsole,
}

/// Logging to hourly rolling files under the workspace.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogFile {
    /// Whether log files are written at all.
    pub enabled: bool,
    /// Directory of the log files, relative to the workspace.
    pub path: String,
    /// Name of the log file, before the date suffix.
    pub file_name: String,
    /// Most verbose level written for the watched crates.
    pub level: Level,
    /// `EnvFilter` directive replacing the level based filter.
    pub filtering_directive: Option<String>,
}

/// Logging to standard output.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogConsole {
    /// Whether anything is printed.
    pub enabled: bool,
    /// Most verbose level printed for the watched crates.
    pub level: Level,
    /// Pretty text or JSON lines.
    pub log_format: LogFormat,
    /// `EnvFilter` directive replacing the level based filter.
    pub filtering_directive: Option<String>,
}

/// A [`tracing::Level`], written in config files as `"debug"`, `"INFO"` and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level(pub(super) tracing::Level);

impl Level {
    /// The wrapped [`tracing::Level`].
    pub fn into_level(self) -> tracing::Level {
        self.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Self(tracing::Level::INFO)
    }
}

impl Serialize for Level {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let level = String::deserialize(deserializer)?;
        tracing::Level::from_str(&level)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

/// Format of the console output.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human readable, multi line.
    Default,
    /// One JSON object per line, see [`crate::FormattingLayer`].
    Json,
}

impl Config {
    /// Loads the config of the current [`Env`].
    pub fn new() -> Result<Self, ::config::ConfigError> {
        Self::new_with_config_path(None)
    }

    /// Loads the config, reading `explicit_config_path` instead of the environment's file.
    ///
    /// Later sources win: the `Default` impls, then the config file when it exists, then
    /// `STRIPE__*` variables.
    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> Result<Self, ::config::ConfigError> {
        let environment = env::which();
        let config = Self::builder(environment)?
            .add_source(
                ::config::File::from(Self::config_path(environment, explicit_config_path))
                    .required(false),
            )
            .add_source(Self::env_source())
            .build()?;

        serde_path_to_error::deserialize(config).map_err(|error| {
            crate::error!(%error, "Unable to deserialize logger configuration");
            error.into_inner()
        })
    }

    /// A builder with `env` pinned to `environment`, which no file or variable can change.
    pub fn builder(
        environment: Env,
    ) -> Result<::config::ConfigBuilder<::config::builder::DefaultState>, ::config::ConfigError>
    {
        ::config::Config::builder().set_override("env", environment.to_string())
    }

    /// `STRIPE__SECTION__KEY` variables, values parsed as numbers and booleans when they can be.
    pub fn env_source() -> ::config::Environment {
        ::config::Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .separator("__")
    }

    /// `explicit_config_path`, or `config/<environment>.toml` under the workspace.
    pub fn config_path(environment: Env, explicit_config_path: Option<PathBuf>) -> PathBuf {
        explicit_config_path.unwrap_or_else(|| {
            env::workspace_path()
                .join("config")
                .join(environment.config_file_name())
        })
    }
}
