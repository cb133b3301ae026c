//! Process configuration, read once at startup from the environment
//! (after loading an optional `.env` file).

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use eyre::{eyre, WrapErr};

/// Placeholder secret that must never be used in production.
pub const PLACEHOLDER_SECRET: &str = "change-this-in-production";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl FromStr for Environment {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        if lowered.starts_with("dev") || lowered == "test" {
            Ok(Environment::Development)
        } else if lowered.starts_with("prod") || lowered.is_empty() {
            Ok(Environment::Production)
        } else {
            Err(eyre!("unknown environment: {s}"))
        }
    }
}

/// Fixed-window request allowance per client, e.g. `20 per minute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub max_requests: u32,
    pub window: Duration,
}

impl fmt::Display for RateLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} per {}s", self.max_requests, self.window.as_secs())
    }
}

impl FromStr for RateLimit {
    type Err = eyre::Report;

    /// Accepts `N per unit` or `N/unit`, where unit is second, minute, hour
    /// or day (singular or plural).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('/', " per ");
        let mut parts = normalized.split_whitespace();
        let (Some(count), Some("per"), Some(unit), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(eyre!("invalid rate limit: {s}"));
        };

        let max_requests: u32 = count
            .parse()
            .wrap_err_with(|| format!("invalid rate limit count: {count}"))?;
        if max_requests == 0 {
            return Err(eyre!("rate limit must allow at least one request"));
        }

        let seconds = match unit.trim_end_matches('s') {
            "second" | "sec" => 1,
            "minute" | "min" => 60,
            "hour" => 3_600,
            "day" => 86_400,
            other => return Err(eyre!("invalid rate limit unit: {other}")),
        };

        Ok(RateLimit {
            max_requests,
            window: Duration::from_secs(seconds),
        })
    }
}

/// Bedrock model settings; absent when AI feedback is disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiConfig {
    pub model_id: String,
    pub region: String,
    pub timeout: Duration,
    pub cache_ttl: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    pub secret_key: String,
    /// True when `secret_key` was generated for this process only.
    pub ephemeral_secret: bool,
    pub log_level: String,
    pub rate_limit: RateLimit,
    pub csrf_enabled: bool,
    /// Rate-limit on the right-most `X-Forwarded-For` hop instead of the
    /// socket address. Only safe behind a proxy that appends it.
    pub trusted_proxy: bool,
    pub ai: Option<AiConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            host: "0.0.0.0".to_string(),
            port: 8080,
            secret_key: PLACEHOLDER_SECRET.to_string(),
            ephemeral_secret: false,
            log_level: "info".to_string(),
            rate_limit: RateLimit {
                max_requests: 20,
                window: Duration::from_secs(60),
            },
            csrf_enabled: true,
            trusted_proxy: false,
            ai: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let defaults = AppConfig::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = match var("MINDCHECK_ENV") {
            Some(v) => v.parse()?,
            None => Environment::Production,
        };

        let port = match var("PORT") {
            Some(v) => v.parse().wrap_err_with(|| format!("invalid PORT: {v}"))?,
            None => defaults.port,
        };

        let rate_limit = match var("RATELIMIT_DEFAULT") {
            Some(v) => v.parse()?,
            None => defaults.rate_limit,
        };

        let csrf_enabled = match var("CSRF_ENABLED") {
            Some(v) => parse_bool(&v)?,
            None => true,
        };

        let trusted_proxy = match var("TRUSTED_PROXY") {
            Some(v) => parse_bool(&v)?,
            None => false,
        };

        let mut secret_key = var("SECRET_KEY").unwrap_or(defaults.secret_key);
        let ephemeral_secret = environment.is_production() && secret_key == PLACEHOLDER_SECRET;
        if ephemeral_secret {
            secret_key = format!(
                "{}{}",
                uuid::Uuid::new_v4().simple(),
                uuid::Uuid::new_v4().simple()
            );
        }

        let ai = match var("BEDROCK_MODEL_ID") {
            Some(model_id) => Some(AiConfig {
                model_id,
                region: var("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
                timeout: Duration::from_secs(parse_secs(var("AI_TIMEOUT_SECS"), 8)?),
                cache_ttl: Duration::from_secs(parse_secs(var("AI_CACHE_TTL_SEC"), 300)?),
            }),
            None => None,
        };

        Ok(AppConfig {
            environment,
            host: var("HOST").unwrap_or(defaults.host),
            port,
            secret_key,
            ephemeral_secret,
            log_level: var("LOG_LEVEL")
                .map(|v| v.to_lowercase())
                .unwrap_or(defaults.log_level),
            rate_limit,
            csrf_enabled,
            trusted_proxy,
            ai,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> eyre::Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(eyre!("invalid boolean: {other}")),
    }
}

fn parse_secs(value: Option<String>, default: u64) -> eyre::Result<u64> {
    match value {
        Some(v) => v
            .trim()
            .parse()
            .wrap_err_with(|| format!("invalid duration in seconds: {v}")),
        None => Ok(default),
    }
}
