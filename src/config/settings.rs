use clap::{Parser, ValueEnum};

use crate::utils::constants::DEFAULT_SIREN;

/// ================================
/// Process-wide settings
/// ================================
///
/// Built once from `RESTO_*` environment variables at process start and
/// handed to [`crate::SireneClient::new`]; nothing reads the environment
/// after construction.
#[derive(Debug, Clone, Parser)]
#[command(name = "restofinder")]
pub struct Settings {
    #[arg(long, env = "RESTO_ENVIRONMENT", value_enum, default_value = "production")]
    pub environment: Environment,

    /// Filter directive handed to tracing, e.g. `info` or `debug`.
    #[arg(long, env = "RESTO_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Base URL of the SIRENE API, without a trailing slash.
    #[arg(long, env = "RESTO_API_URL")]
    pub api_url: String,

    #[arg(long, env = "RESTO_CLIENT_ID")]
    pub client_id: String,

    #[arg(long, env = "RESTO_CLIENT_SECRET")]
    pub client_secret: String,

    /// Legal-entity identifier the search path targets.
    #[arg(long, env = "RESTO_SIREN", default_value = DEFAULT_SIREN)]
    pub siren: String,
}

impl Settings {
    /// Read settings from the environment only, ignoring argv.
    pub fn from_env() -> Result<Self, clap::Error> {
        Self::try_parse_from(["restofinder"])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}
