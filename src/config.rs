//! # Configuration Module
//!
//! This module defines the configuration structures for the bot and the
//! dashboard. Values are read from the environment once at startup and the
//! resulting structs are handed to the components that need them.

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

// Constants for default configuration
pub const DEFAULT_DATA_DIR: &str = "users_data";
pub const DEFAULT_MODEL: &str = "gemma2-9b-it";
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_DASHBOARD_ADDR: &str = "127.0.0.1:5000";

/// Hosted language model settings
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Groq API key, `None` makes every advice request fail
    pub api_key: Option<String>,
    /// Model identifier sent with each completion request
    pub model: String,
    /// Chat completions endpoint
    pub api_url: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl AdvisorConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("GROQ_API_KEY").ok().filter(|key| !key.is_empty()),
            model: env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            api_url: env::var("GROQ_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }
}

/// Configuration for the Telegram bot binary
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Telegram bot token
    pub telegram_token: String,
    /// Directory holding one JSON file per user
    pub data_dir: PathBuf,
    /// Language model settings for `/aiadvice`
    pub advisor: AdvisorConfig,
}

impl BotConfig {
    /// Build the bot configuration from environment variables
    ///
    /// # Errors
    ///
    /// Fails when `TELEGRAM_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let telegram_token =
            env::var("TELEGRAM_API_KEY").context("TELEGRAM_API_KEY must be set")?;

        Ok(Self {
            telegram_token,
            data_dir: data_dir_from_env(),
            advisor: AdvisorConfig::from_env(),
        })
    }
}

/// Configuration for the dashboard binary
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Address the HTTP server binds to
    pub addr: SocketAddr,
    /// Directory holding one JSON file per user
    pub data_dir: PathBuf,
}

impl DashboardConfig {
    /// Build the dashboard configuration from environment variables
    ///
    /// # Errors
    ///
    /// Fails when `DASHBOARD_ADDR` is not a valid socket address.
    pub fn from_env() -> Result<Self> {
        let addr = env::var("DASHBOARD_ADDR").unwrap_or_else(|_| DEFAULT_DASHBOARD_ADDR.into());
        let addr = addr
            .parse()
            .with_context(|| format!("Invalid DASHBOARD_ADDR: {addr}"))?;

        Ok(Self {
            addr,
            data_dir: data_dir_from_env(),
        })
    }
}

fn data_dir_from_env() -> PathBuf {
    env::var("HEALMATE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR))
}
