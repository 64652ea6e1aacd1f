//! # Form API configuration
//!
//! Reads the server settings from environment variables. `main` loads an
//! optional `.env` file with `dotenvy` first.
//!
//! Missing provider settings do not stop the server. They are reported once
//! by [`FormApiConfig::missing_required`] and surface as dispatch errors when
//! a form is submitted. A malformed port or an unknown backend name is a hard
//! error.

use std::env;

use strum::{Display, EnumString};
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_SENDGRID_API_URL: &str = "https://api.sendgrid.com";
const DEFAULT_SMTP_HOST: &str = "localhost";
const DEFAULT_SMTP_PORT: u16 = 1025;

/// Startup configuration error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid port number, got {value:?}")]
    InvalidPort { name: &'static str, value: String },

    #[error("NOTIFICATION_BACKEND must be one of sendgrid, ses, smtp, noop, got {0:?}")]
    UnknownBackend(String),
}

/// Email transport selected by `NOTIFICATION_BACKEND`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NotificationBackend {
    #[default]
    SendGrid,
    Ses,
    Smtp,
    Noop,
}

/// Settings shared by the dispatcher and the email backends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    pub backend:          NotificationBackend,
    /// Operator inbox (`NOTIFICATION_EMAIL`)
    pub operator_address: Option<String>,
    /// Verified sender (`SENDGRID_FROM_EMAIL`)
    pub from_address:     Option<String>,
    pub sendgrid_api_key: Option<String>,
    pub sendgrid_api_url: String,
    pub smtp_host:        String,
    pub smtp_port:        u16,
}

/// Form API server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormApiConfig {
    pub host:         String,
    pub port:         u16,
    /// CORS allow-list. `None` allows every origin
    pub cors_origins: Option<Vec<String>>,
    pub notification: NotificationConfig,
}

impl FormApiConfig {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Reads the configuration through `lookup`
    ///
    /// Empty values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let backend = match var("NOTIFICATION_BACKEND") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::UnknownBackend(value))?,
            None => NotificationBackend::default(),
        };

        Ok(Self {
            host: var("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_port("API_PORT", var("API_PORT"), DEFAULT_PORT)?,
            cors_origins: var("CORS_ORIGIN").map(|v| parse_origins(&v)),
            notification: NotificationConfig {
                backend,
                operator_address: var("NOTIFICATION_EMAIL"),
                from_address: var("SENDGRID_FROM_EMAIL"),
                sendgrid_api_key: var("SENDGRID_API_KEY"),
                sendgrid_api_url: var("SENDGRID_API_URL")
                    .unwrap_or_else(|| DEFAULT_SENDGRID_API_URL.to_string()),
                smtp_host: var("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                smtp_port: parse_port("SMTP_PORT", var("SMTP_PORT"), DEFAULT_SMTP_PORT)?,
            },
        })
    }

    /// Names of required variables that are unset, in a stable order
    ///
    /// `SENDGRID_API_KEY` is only required by the SendGrid backend.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let notification = &self.notification;
        let mut missing = Vec::new();

        if notification.backend == NotificationBackend::SendGrid
            && notification.sendgrid_api_key.is_none()
        {
            missing.push("SENDGRID_API_KEY");
        }
        if notification.from_address.is_none() {
            missing.push("SENDGRID_FROM_EMAIL");
        }
        if notification.operator_address.is_none() {
            missing.push("NOTIFICATION_EMAIL");
        }

        missing
    }
}

fn parse_port(name: &'static str, value: Option<String>, default: u16) -> Result<u16, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort { name, value }),
        None => Ok(default),
    }
}

/// Splits `CORS_ORIGIN` on commas, trimming each entry
fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
