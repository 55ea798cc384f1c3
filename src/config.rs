//! Runtime configuration read from environment variables

use std::{env, net::SocketAddr};

use anyhow::Context;

/// Format of log lines written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// interface the HTTP server binds to, `BANK_HOST`
    pub host: String,
    /// `BANK_PORT`
    pub port: u16,
    /// origin allowed by CORS, `BANK_CORS_ORIGIN`
    pub cors_origin: String,
    /// filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// `LOG_FORMAT`, `text` or `json`
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8089,
            cors_origin: "http://localhost:3000".to_owned(),
            log_level: "info".to_owned(),
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Load config from process environment, falling back to [`Default`] for unset variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load config using `lookup` to resolve variable names
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let default = Self::default();

        let port = match lookup("BANK_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("BANK_PORT is not a valid port: '{raw}'"))?,
            None => default.port,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") => default.log_format,
            Some(f) if f.eq_ignore_ascii_case("text") => LogFormat::Text,
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(other) => anyhow::bail!("LOG_FORMAT must be 'text' or 'json', got '{other}'"),
        };

        Ok(Self {
            host: lookup("BANK_HOST").unwrap_or(default.host),
            port,
            cors_origin: lookup("BANK_CORS_ORIGIN").unwrap_or(default.cors_origin),
            log_level: lookup("LOG_LEVEL").unwrap_or(default.log_level),
            log_format,
        })
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}
