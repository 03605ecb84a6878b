pub mod keybindings;

use std::path::PathBuf;

use color_eyre::eyre::Result;
use secrecy::SecretString;
use serde::Deserialize;

use crate::utils;
use keybindings::KeyBindings;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub session_token: Option<SecretString>,
    #[serde(default)]
    pub account_email: Option<String>,
    #[serde(default)]
    pub keybindings: KeyBindings,
}

impl Config {
    pub fn new() -> Result<Self, config::ConfigError> {
        let default_config = Self::embedded_default();
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            // All settings have workable defaults; a missing config file
            // just means a signed-out session against the default API.
            log::warn!(
                "No configuration file found in {}; using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        for (key, action) in default_config.keybindings.iter() {
            cfg.keybindings
                .entry(key.clone())
                .or_insert_with(|| *action);
        }

        if cfg.base_url.is_empty() {
            cfg.base_url = default_config.base_url.clone();
        }

        Ok(cfg)
    }

    /// The compiled-in default configuration.
    pub fn embedded_default() -> Self {
        match json5::from_str(CONFIG) {
            Ok(config) => config,
            Err(e) => {
                // The embedded config ships with the binary; failing to
                // parse it is a build defect, not a runtime condition.
                log::error!("Embedded config is invalid: {e}");
                Self::default()
            }
        }
    }
}
