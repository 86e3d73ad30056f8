use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => bail!("unknown APP_ENV '{other}' (expected development or production)"),
        }
    }
}

impl Environment {
    /// API documentation is only served outside production.
    pub fn exposes_api_docs(&self) -> bool {
        !matches!(self, Self::Production)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifierKind {
    #[default]
    None,
    Smtp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub notifier: NotifierKind,
    pub smtp: Option<SmtpConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup so tests can
    /// supply values without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://email_service.db".into());
        let database_max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5u32)?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 5000u16)?;
        let environment = match lookup("APP_ENV") {
            Some(v) => v.parse::<Environment>()?,
            None => Environment::default(),
        };

        let notifier = match lookup("MAIL_NOTIFIER").as_deref().map(str::trim) {
            None | Some("") | Some("none") => NotifierKind::None,
            Some("smtp") => NotifierKind::Smtp,
            Some(other) => bail!("unknown MAIL_NOTIFIER '{other}' (expected none or smtp)"),
        };

        let smtp = match notifier {
            NotifierKind::None => None,
            NotifierKind::Smtp => Some(SmtpConfig {
                host: lookup("SMTP_HOST").context("SMTP_HOST must be set when MAIL_NOTIFIER=smtp")?,
                port: parse_or(&lookup, "SMTP_PORT", 587u16)?,
                username: lookup("SMTP_USERNAME").unwrap_or_default(),
                password: lookup("SMTP_PASSWORD").unwrap_or_default(),
                from: lookup("SMTP_FROM").context("SMTP_FROM must be set when MAIL_NOTIFIER=smtp")?,
            }),
        };

        Ok(Config {
            database_url,
            database_max_connections,
            host,
            port,
            environment,
            notifier,
            smtp,
        })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {key} '{raw}': {e}")),
        None => Ok(default),
    }
}
