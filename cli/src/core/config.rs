//! # StockChat Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges and validates StockChat's configuration. Every
//! field has a default, so the application runs without any configuration
//! file at all.
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (applied by the individual commands)
//! 2. Project-specific `.stockchat.toml` in the current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [chat]
//! reply_delay_ms = 250
//! assistant_label = "Analyst"
//!
//! [srv]
//! port = 9000
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let delay = cfg.chat.reply_delay();
//! ```
//!
use crate::core::error::{Result, StockchatError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::net::IpAddr;
use std::time::Duration;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Upper bound for the artificial reply delay.
pub const MAX_REPLY_DELAY_MS: u64 = 60_000;

const PROJECT_CONFIG_FILENAME: &str = ".stockchat.toml";

/// Effective configuration after layering defaults, the user file and the
/// project file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub chat: ChatConfig,
    pub srv: SrvSettings,
}

/// Settings for the chat surface (`stockchat chat`, `stockchat ask`).
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    /// Milliseconds between a submission and its assistant reply.
    pub reply_delay_ms: u64,
    /// Label printed before user entries in the terminal.
    pub user_label: String,
    /// Label printed before assistant entries in the terminal.
    pub assistant_label: String,
    /// Prefix terminal entries with their `HH:MM:SS` timestamp.
    pub show_timestamps: bool,
}

/// Settings for the browser widget server (`stockchat srv`).
#[derive(Debug, Clone, PartialEq)]
pub struct SrvSettings {
    /// Interface to bind, kept as a string so it can be validated with a useful message.
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    /// Page title shown in the widget header.
    pub title: String,
}

/// One configuration file as written on disk. A key that is absent stays
/// `None`, so a file only overrides the keys it actually sets.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    chat: ChatFile,
    #[serde(default)]
    srv: SrvFile,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ChatFile {
    reply_delay_ms: Option<u64>,
    user_label: Option<String>,
    assistant_label: Option<String>,
    show_timestamps: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct SrvFile {
    host: Option<String>,
    port: Option<u16>,
    enable_cors: Option<bool>,
    title: Option<String>,
}

impl ChatConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            user_label: default_user_label(),
            assistant_label: default_assistant_label(),
            show_timestamps: false,
        }
    }
}

impl Default for SrvSettings {
    fn default() -> Self {
        Self {
            host: default_srv_host(),
            port: default_srv_port(),
            enable_cors: default_enable_cors(),
            title: default_srv_title(),
        }
    }
}

fn default_reply_delay_ms() -> u64 {
    600
}
fn default_user_label() -> String {
    "You".to_string()
}
fn default_assistant_label() -> String {
    "Assistant".to_string()
}
fn default_srv_host() -> String {
    "127.0.0.1".to_string()
}
fn default_srv_port() -> u16 {
    8000
}
fn default_enable_cors() -> bool {
    true
}
fn default_srv_title() -> String {
    "Stock Assistant".to_string()
}

/// # Load Configuration (`load_config`)
///
/// Loads the user and project configuration files (both optional), merges them
/// with project values taking precedence, and validates the result.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let project_config = match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            Some(load_config_file(&path)?)
        }
        None => {
            debug!("No project configuration file (.stockchat.toml) found in current directory or ancestors.");
            None
        }
    };
    let merged = merge_configs(user_config, project_config);
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "StockChat", "stockchat") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_file(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.stockchat.toml`.
/// The search stops at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Key-by-key layering: project value, else user value, else default.
fn merge_configs(user: Option<ConfigFile>, project: Option<ConfigFile>) -> Config {
    let user = user.unwrap_or_default();
    let project = project.unwrap_or_default();
    let chat = ChatConfig::default();
    let srv = SrvSettings::default();

    Config {
        chat: ChatConfig {
            reply_delay_ms: project
                .chat
                .reply_delay_ms
                .or(user.chat.reply_delay_ms)
                .unwrap_or(chat.reply_delay_ms),
            user_label: project
                .chat
                .user_label
                .or(user.chat.user_label)
                .unwrap_or(chat.user_label),
            assistant_label: project
                .chat
                .assistant_label
                .or(user.chat.assistant_label)
                .unwrap_or(chat.assistant_label),
            show_timestamps: project
                .chat
                .show_timestamps
                .or(user.chat.show_timestamps)
                .unwrap_or(chat.show_timestamps),
        },
        srv: SrvSettings {
            host: project.srv.host.or(user.srv.host).unwrap_or(srv.host),
            port: project.srv.port.or(user.srv.port).unwrap_or(srv.port),
            enable_cors: project
                .srv
                .enable_cors
                .or(user.srv.enable_cors)
                .unwrap_or(srv.enable_cors),
            title: project.srv.title.or(user.srv.title).unwrap_or(srv.title),
        },
    }
}

pub fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.chat.reply_delay_ms > MAX_REPLY_DELAY_MS {
        return Err(anyhow!(StockchatError::Config(format!(
            "chat.reply_delay_ms is {} but must not exceed {}.",
            config.chat.reply_delay_ms, MAX_REPLY_DELAY_MS
        ))));
    }
    if config.chat.user_label.trim().is_empty() {
        return Err(anyhow!(StockchatError::Config(
            "chat.user_label must not be empty.".to_string()
        )));
    }
    if config.chat.assistant_label.trim().is_empty() {
        return Err(anyhow!(StockchatError::Config(
            "chat.assistant_label must not be empty.".to_string()
        )));
    }
    if config.srv.host.parse::<IpAddr>().is_err() {
        return Err(anyhow!(StockchatError::Config(format!(
            "srv.host '{}' is not a valid IP address.",
            config.srv.host
        ))));
    }
    if config.srv.title.trim().is_empty() {
        return Err(anyhow!(StockchatError::Config(
            "srv.title must not be empty.".to_string()
        )));
    }
    info!("Configuration validation successful.");
    Ok(())
}
