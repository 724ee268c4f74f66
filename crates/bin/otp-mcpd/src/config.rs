use clap::{Parser, builder::BoolishValueParser};
use otp_core::{DEFAULT_ENDPOINT, Url};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: &str = "3000";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEBUG_LOG_LEVEL: &str = "debug";

#[derive(Parser, Debug)]
#[command(name = "otp-mcpd", version, about = "Open Targets Platform MCP daemon.")]
struct CliArgs {
    /// Reserved for a network transport; the daemon serves stdio only.
    #[arg(long, env = "PORT", default_value = DEFAULT_PORT)]
    port: String,

    #[arg(long, env = "OPEN_TARGETS_API", default_value = DEFAULT_ENDPOINT)]
    api_url: String,

    #[arg(long, env = "LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    #[arg(
        long = "debug",
        env = "MCP_DEBUG",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    debug: bool,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct OtpConfig {
    pub port: String,
    pub api_url: Url,
    pub log_level: String,
    pub debug: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name} value: {value}")]
    InvalidSetting { name: &'static str, value: String },
}

impl OtpConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }

    /// Log directive to use when `RUST_LOG` is unset. Debug mode wins over the level.
    #[must_use]
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            DEBUG_LOG_LEVEL
        } else {
            &self.log_level
        }
    }
}

impl TryFrom<CliArgs> for OtpConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let api_url = Url::parse(args.api_url.trim())
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .ok_or_else(|| ConfigError::InvalidSetting {
                name: "OPEN_TARGETS_API",
                value: args.api_url.clone(),
            })?;

        let log_level = args.log_level.trim().to_string();
        if log_level.is_empty() || EnvFilter::try_new(&log_level).is_err() {
            return Err(ConfigError::InvalidSetting {
                name: "LOG_LEVEL",
                value: args.log_level,
            });
        }

        Ok(Self {
            port: args.port,
            api_url,
            log_level,
            debug: args.debug,
        })
    }
}
