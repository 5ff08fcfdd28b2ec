use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use client_core::{ClientConfig, DEFAULT_API_BASE_URL, DEFAULT_USER_AGENT};

pub const DEFAULT_CONFIG_PATH: &str = "lookup.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub user_agent: String,
    pub output_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            output_path: None,
        }
    }
}

impl Settings {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_base_url: self.api_base_url.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Defaults, then the config file if it exists, then the process environment.
pub fn load_settings(config_path: &Path) -> Settings {
    let file = fs::read_to_string(config_path).ok();
    settings_from_sources(file.as_deref(), |key| std::env::var(key).ok())
}

pub(crate) fn settings_from_sources(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        match toml::from_str::<HashMap<String, String>>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("api_base_url") {
                    settings.api_base_url = v.clone();
                }
                if let Some(v) = file_cfg.get("user_agent") {
                    settings.user_agent = v.clone();
                }
                if let Some(v) = file_cfg.get("output_path") {
                    settings.output_path = Some(PathBuf::from(v));
                }
            }
            Err(err) => tracing::warn!("ignoring unreadable config file: {err}"),
        }
    }

    if let Some(v) = env("LOOKUP_API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = env("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    if let Some(v) = env("APP__USER_AGENT") {
        settings.user_agent = v;
    }

    if let Some(v) = env("APP__OUTPUT_PATH") {
        settings.output_path = Some(PathBuf::from(v));
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
