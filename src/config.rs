use anyhow::{Context, Result};
use std::env;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// Parse `LOG_FORMAT`, defaulting to JSON in production and pretty elsewhere.
    pub fn resolve(raw: Option<&str>, env: &Environment) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("json") => Self::Json,
            Some("pretty") | Some("text") => Self::Pretty,
            _ if matches!(env, Environment::Prod) => Self::Json,
            _ => Self::Pretty,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,
    pub log_format: LogFormat,

    // CORS
    pub cors_allow_origins: Vec<String>,

    // Requests
    /// Reject compute requests that fail pre-flight validation
    pub strict_validation: bool,
    pub max_body_bytes: usize,

    // Lead capture
    pub lead_capture_url: Option<Url>,
    pub lead_capture_token: Option<String>,
    pub lead_capture_timeout_seconds: u64,
    pub lead_capture_max_elapsed_seconds: u64,
    /// Forwarding tasks allowed at once; further leads are dropped
    pub lead_capture_max_in_flight: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_format = LogFormat::resolve(env::var("LOG_FORMAT").ok().as_deref(), &env);

        // CORS
        let cors_allow_origins = parse_origins(
            &env::var("CORS_ALLOW_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".to_string()),
        );

        // Requests
        let strict_validation = env::var("STRICT_VALIDATION")
            .ok()
            .and_then(|s| parse_bool(&s))
            .unwrap_or(true);
        let max_body_bytes = env::var("MAX_BODY_BYTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(64 * 1024);

        // Lead capture
        let lead_capture_url = match env::var("LEAD_CAPTURE_URL") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                Url::parse(raw.trim()).context("LEAD_CAPTURE_URL must be a valid URL")?,
            ),
            _ => None,
        };
        let lead_capture_token = env::var("LEAD_CAPTURE_TOKEN")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let lead_capture_timeout_seconds = env::var("LEAD_CAPTURE_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);
        let lead_capture_max_elapsed_seconds = env::var("LEAD_CAPTURE_MAX_ELAPSED_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);
        let lead_capture_max_in_flight = env::var("LEAD_CAPTURE_MAX_IN_FLIGHT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(32);

        Ok(Settings {
            env,
            server_addr,
            log_format,
            cors_allow_origins,
            strict_validation,
            max_body_bytes,
            lead_capture_url,
            lead_capture_token,
            lead_capture_timeout_seconds,
            lead_capture_max_elapsed_seconds,
            lead_capture_max_in_flight,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
impl Settings {
    /// Settings for router tests: strict validation, no lead forwarding.
    pub fn for_tests() -> Self {
        Settings {
            env: Environment::Dev,
            server_addr: "127.0.0.1:0".to_string(),
            log_format: LogFormat::Pretty,
            cors_allow_origins: vec!["http://localhost:3000".to_string()],
            strict_validation: true,
            max_body_bytes: 64 * 1024,
            lead_capture_url: None,
            lead_capture_token: None,
            lead_capture_timeout_seconds: 1,
            lead_capture_max_elapsed_seconds: 1,
            lead_capture_max_in_flight: 4,
        }
    }
}
