// src/config.rs
use clap::{Parser, ValueEnum};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

/// Command-line flags. Each one falls back to an environment variable, which
/// may come from a `.env` file.
#[derive(Parser, Debug)]
#[command(name = "realstate_site", version, about = "Marketing site for a property developer")]
pub struct Cli {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(short, long, env = "PORT", default_value_t = 3003)]
    pub port: u16,

    /// Build output directory served as static files
    #[arg(long, env = "STATIC_DIR", default_value = "dist")]
    pub static_dir: PathBuf,

    #[arg(long = "env", env = "SITE_ENV", value_enum, default_value_t = Environment::Development)]
    pub environment: Environment,

    /// Upper bound on worker threads
    #[arg(long, env = "MAX_WORKERS", default_value_t = 8)]
    pub workers: usize,

    /// Artificial delay applied to contact submissions
    #[arg(long, env = "CONTACT_DELAY_MS", default_value_t = 1500)]
    pub contact_delay_ms: u64,

    /// Serve `index.html` from the static dir for unmatched paths
    #[arg(long, env = "SPA_FALLBACK")]
    pub spa_fallback: bool,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long)]
    pub verbose: bool,
}

/// Runtime settings shared by every request handler.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub addr: SocketAddr,
    pub static_dir: PathBuf,
    pub environment: Environment,
    pub max_workers: usize,
    pub contact_delay: Duration,
    pub spa_fallback: bool,
    pub service_name: &'static str,
    pub version: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3003)),
            static_dir: PathBuf::from("dist"),
            environment: Environment::Development,
            max_workers: 8,
            contact_delay: Duration::from_millis(1500),
            spa_fallback: false,
            service_name: "Real State",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl SiteConfig {
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.addr.port() == 0 {
            return Err(ConfigError::Invalid {
                field: "port",
                reason: "must be between 1 and 65535".into(),
            });
        }
        if self.max_workers == 0 {
            return Err(ConfigError::Invalid {
                field: "workers",
                reason: "at least one worker is required".into(),
            });
        }
        Ok(())
    }
}

impl TryFrom<&Cli> for SiteConfig {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let config = SiteConfig {
            addr: SocketAddr::new(cli.host, cli.port),
            static_dir: cli.static_dir.clone(),
            environment: cli.environment,
            max_workers: cli.workers,
            contact_delay: Duration::from_millis(cli.contact_delay_ms),
            spa_fallback: cli.spa_fallback,
            ..SiteConfig::default()
        };
        config.validate()?;
        Ok(config)
    }
}
