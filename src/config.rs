use std::env;

use anyhow::{bail, Result};
use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub bind_addr: String,
    pub allowed_origin: String,
    pub openrouter_api_key: String,
    pub openrouter_base_url: String,
    pub openrouter_model: String,
}

pub static CONFIG: Lazy<Config> =
    Lazy::new(|| Config::load().expect("Failed to load configuration"));

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
    fn load() -> Result<Config> {
        let config = Config {
            log_level: env_string("LOG_LEVEL", "info"),
            bind_addr: env_string("BIND_ADDR", "0.0.0.0:8000"),
            allowed_origin: env_string("ALLOWED_ORIGIN", "http://localhost:3000"),
            openrouter_api_key: env_string("OPENROUTER_API_KEY", ""),
            openrouter_base_url: env_string("OPENROUTER_BASE_URL", "https://openrouter.ai/api/v1"),
            openrouter_model: env_string("OPENROUTER_MODEL", "openai/gpt-4o-mini-2024-07-18"),
        };

        if config.openrouter_api_key.trim().is_empty() {
            bail!("OPENROUTER_API_KEY is not set");
        }

        Ok(config)
    }
}
