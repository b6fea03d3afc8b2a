//! Configuration management for taskflow.
//!
//! Settings are grouped in optional modules, each configurable on its own:
//!
//! - **api**: base URL of the remote store ([`ApiConfig`])
//! - **cache**: freshness window of the query cache ([`CacheConfig`])
//!
//! The file is pretty-printed JSON named [`CONFIG_FILE_NAME`] in the
//! platform data directory (see [`DataStorage`]). A missing file is not an
//! error; defaults apply.
//!
//! ## Environment overrides
//!
//! After the file is read, [`Config::load`] applies (a `.env` file in the
//! working directory is honoured):
//!
//! - `TASKFLOW_API_URL` replaces `api.api_url`
//! - `TASKFLOW_STALE_TIME` replaces `cache.stale_time` (seconds)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskflow::libs::config::Config;
//!
//! let config = Config::load()?;
//! println!("Remote store: {}", config.api_config().api_url);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::taskflow::ApiConfig;
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const ENV_API_URL: &str = "TASKFLOW_API_URL";
pub const ENV_STALE_TIME: &str = "TASKFLOW_STALE_TIME";

/// A configurable module offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Query cache settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CacheConfig {
    /// Seconds a successful read is served from cache before it is refetched.
    ///
    /// `0` means every screen refetches on mount; concurrent reads still
    /// share one request.
    pub stale_time: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { stale_time: 30 }
    }
}

impl CacheConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "cache".to_string(),
            name: "Query cache".to_string(),
        }
    }

    pub fn init(config: &Option<CacheConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleCache);
        Ok(Self {
            stale_time: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptStaleTime.to_string())
                .default(config.stale_time)
                .interact_text()?,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheConfig>,
}

impl Config {
    /// Reads the configuration file, or returns defaults when there is none.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// [`Config::read`] plus environment overrides.
    pub fn load() -> Result<Config> {
        let _ = dotenv::dotenv();
        Ok(Self::read()?.with_overrides(|name| std::env::var(name).ok()))
    }

    /// Applies overrides looked up through `lookup` (normally the process environment).
    ///
    /// Invalid numeric values are reported and ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_API_URL).filter(|url| !url.trim().is_empty()) {
            self.api = Some(ApiConfig { api_url: url });
        }
        if let Some(raw) = lookup(ENV_STALE_TIME) {
            match raw.trim().parse::<u64>() {
                Ok(stale_time) => self.cache = Some(CacheConfig { stale_time }),
                Err(_) => {
                    msg_warning!(Message::InvalidEnvValue(ENV_STALE_TIME.to_string(), raw));
                }
            }
        }
        self
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn api_config(&self) -> ApiConfig {
        self.api.clone().unwrap_or_default()
    }

    pub fn stale_time(&self) -> Duration {
        Duration::from_secs(self.cache.clone().unwrap_or_default().stale_time)
    }

    /// Interactive setup wizard starting from the saved configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![ApiConfig::module(), CacheConfig::module()];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "api" => config.api = Some(ApiConfig::init(&config.api)?),
                "cache" => config.cache = Some(CacheConfig::init(&config.cache)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
