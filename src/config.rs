use std::net::IpAddr;

use axum::http::HeaderValue;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub operator_email: String,
    pub site_name: String,
    pub site_url: String,
    pub allowed_origin: Option<HeaderValue>,
    pub max_body_size: usize,
    pub log_level: String,
    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("CONTACT_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_HOST: {e}"))?;

        let port: u16 = env_or("CONTACT_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_PORT: {e}"))?;

        let smtp = SmtpConfig {
            host: env_required("CONTACT_SMTP_HOST")?,
            port: env_required("CONTACT_SMTP_PORT")?
                .parse()
                .map_err(|e| format!("Invalid CONTACT_SMTP_PORT: {e}"))?,
            user: env_required("CONTACT_SMTP_USER")?,
            pass: env_required("CONTACT_SMTP_PASS")?,
            from: env_required("CONTACT_SMTP_FROM")?,
        };

        // Notifications land in the sending mailbox unless told otherwise
        let operator_email = env_or("CONTACT_OPERATOR_EMAIL", &smtp.from);

        let site_name = env_required("CONTACT_SITE_NAME")?;
        let site_url = env_required("CONTACT_SITE_URL")?;

        let allowed_origin = match std::env::var("CONTACT_ALLOWED_ORIGIN") {
            Ok(origin) => Some(
                origin
                    .parse::<HeaderValue>()
                    .map_err(|e| format!("Invalid CONTACT_ALLOWED_ORIGIN: {e}"))?,
            ),
            Err(_) => None,
        };

        let max_body_size: usize = env_or("CONTACT_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("CONTACT_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            operator_email,
            site_name,
            site_url,
            allowed_origin,
            max_body_size,
            log_level,
            smtp,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
