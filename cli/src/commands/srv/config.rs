//! # StockChat Widget Server Configuration
//!
//! File: cli/src/commands/srv/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Resolves the effective settings for `stockchat srv` from:
//! 1. Command-line arguments (highest priority)
//! 2. The `[srv]` and `[chat]` sections of the loaded configuration
//! 3. Default values (lowest priority)
//!
//! Only flags the user actually passed override the configuration, so every
//! value-taking argument is an `Option`.
//!
use crate::core::config::{Config, MAX_REPLY_DELAY_MS};
use crate::core::error::{Result, StockchatError};
use anyhow::anyhow;
use clap::Parser;
use std::net::IpAddr;
use tracing::debug;

/// # Server Command Arguments (`SrvArgs`)
#[derive(Parser, Debug, Default)]
pub struct SrvArgs {
    /// Port to listen on [default: 8000]. The next free port is used if it is busy.
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Interface to bind, e.g. `0.0.0.0` for all interfaces [default: 127.0.0.1].
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Do not send CORS headers.
    #[arg(long)]
    pub no_cors: bool,

    /// Milliseconds the widget waits before showing each reply.
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,
}

/// # Effective Server Configuration (`ServerConfig`)
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    pub title: String,
    pub reply_delay_ms: u64,
}

/// # Resolve Server Configuration (`resolve`)
///
/// Merges `args` over the loaded configuration. The configuration has
/// already been validated, so the host string is known to parse.
pub fn resolve(args: &SrvArgs, cfg: &Config) -> Result<ServerConfig> {
    let host = match args.host {
        Some(host) => host,
        None => cfg.srv.host.parse().map_err(|_| {
            anyhow!(StockchatError::Config(format!(
                "srv.host '{}' is not a valid IP address.",
                cfg.srv.host
            )))
        })?,
    };

    let reply_delay_ms = args.delay_ms.unwrap_or(cfg.chat.reply_delay_ms);
    if reply_delay_ms > MAX_REPLY_DELAY_MS {
        return Err(anyhow!(StockchatError::Config(format!(
            "--delay-ms is {} but must not exceed {}.",
            reply_delay_ms, MAX_REPLY_DELAY_MS
        ))));
    }

    let resolved = ServerConfig {
        host,
        port: args.port.unwrap_or(cfg.srv.port),
        enable_cors: cfg.srv.enable_cors && !args.no_cors,
        title: cfg.srv.title.clone(),
        reply_delay_ms,
    };
    debug!("Resolved server config: {:?}", resolved);
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SrvSettings;
    use std::net::Ipv4Addr;

    #[test]
    fn test_defaults_come_from_config() {
        let resolved = resolve(&SrvArgs::default(), &Config::default()).unwrap();
        assert_eq!(
            resolved,
            ServerConfig {
                host: IpAddr::V4(Ipv4Addr::LOCALHOST),
                port: 8000,
                enable_cors: true,
                title: "Stock Assistant".into(),
                reply_delay_ms: 600,
            }
        );
    }

    #[test]
    fn test_args_override_config() {
        let cfg = Config {
            srv: SrvSettings {
                port: 9000,
                host: "0.0.0.0".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let args = SrvArgs {
            port: Some(9100),
            host: Some(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            no_cors: true,
            delay_ms: Some(0),
        };
        let resolved = resolve(&args, &cfg).unwrap();
        assert_eq!(resolved.port, 9100);
        assert_eq!(resolved.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert!(!resolved.enable_cors);
        assert_eq!(resolved.reply_delay_ms, 0);
    }

    #[test]
    fn test_config_values_used_when_args_absent() {
        let cfg = Config {
            srv: SrvSettings {
                port: 9000,
                host: "0.0.0.0".into(),
                enable_cors: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&SrvArgs::default(), &cfg).unwrap();
        assert_eq!(resolved.port, 9000);
        assert_eq!(resolved.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert!(!resolved.enable_cors);
    }

    #[test]
    fn test_delay_override_is_bounded() {
        let args = SrvArgs {
            delay_ms: Some(MAX_REPLY_DELAY_MS + 1),
            ..Default::default()
        };
        assert!(resolve(&args, &Config::default()).is_err());
    }

    #[test]
    fn test_parses_flags() {
        let args =
            SrvArgs::try_parse_from(["srv", "--port", "9001", "--host", "0.0.0.0", "--no-cors"])
                .unwrap();
        assert_eq!(args.port, Some(9001));
        assert!(args.no_cors);
        assert!(args.delay_ms.is_none());
    }
}
