/// Application configuration module
use anyhow::Context;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_API_KEY: &str = "DEMO_KEY";
pub const DEFAULT_APOD_URL: &str = "https://api.nasa.gov/planetary/apod";
pub const DEFAULT_SECRET_KEY: &str = "dev-key-please-change-in-production";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub nasa_api_key: String,
    pub nasa_apod_url: String,
    pub upstream_timeout: Duration,
    pub debug: bool,
    pub secret_key: String,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let nasa_api_key = lookup("NASA_API_KEY")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_KEY.to_string());

        let nasa_apod_url = lookup("NASA_APOD_URL")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_APOD_URL.to_string());

        let upstream_timeout = Duration::from_secs(env_u64(&lookup, "NASA_TIMEOUT_SECONDS", 5));

        let debug = lookup("APP_DEBUG")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let secret_key = lookup("SECRET_KEY").unwrap_or_else(|| DEFAULT_SECRET_KEY.to_string());

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR is not a socket address: {bind_addr}"))?;

        Ok(Self {
            nasa_api_key,
            nasa_apod_url,
            upstream_timeout,
            debug,
            secret_key,
            bind_addr,
        })
    }

    /// Default log filter when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

fn env_u64<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
