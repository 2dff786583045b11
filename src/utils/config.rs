// Centralized configuration for Trendboard

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use tracing::warn;

/// YouTube Data API v3 root
pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Region used when the caller gives none
pub const DEFAULT_REGION: &str = "US";

/// Page size used when the caller gives none
pub const DEFAULT_LIMIT: i64 = 25;

/// Upper bound of `maxResults` accepted by the mostPopular chart
pub const MAX_RESULTS: i64 = 50;

/// Per-call timeout for upstream requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Browser origins allowed to call the API (the hosted dashboard and local dev)
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "https://youtube-trending-analytics.netlify.app",
    "http://localhost:5500",
];

/// Free-text region names understood by the chat interpreter.
/// Order matters: the first phrase found in a message wins.
pub const REGION_PHRASES: &[(&str, &str)] = &[
    ("india", "IN"),
    ("us", "US"),
    ("usa", "US"),
    ("united states", "US"),
    ("uk", "GB"),
    ("united kingdom", "GB"),
    ("germany", "DE"),
    ("france", "FR"),
    ("japan", "JP"),
    ("brazil", "BR"),
];

/// Clamp a requested page size into 1..=50
pub fn clamp_limit(limit: i64) -> u32 {
    limit.clamp(1, MAX_RESULTS) as u32
}

/// Normalize a region code, falling back to the default when blank
pub fn normalize_region(region: &str) -> String {
    let trimmed = region.trim();
    if trimmed.is_empty() {
        DEFAULT_REGION.to_string()
    } else {
        trimmed.to_uppercase()
    }
}

/// Runtime configuration, loaded once at startup
#[derive(Clone)]
pub struct Config {
    pub youtube_api_key: Option<String>,
    pub youtube_base_url: String,
    pub request_timeout: Duration,
    pub bind_addr: SocketAddr,
    pub default_region: String,
    pub default_limit: u32,
    pub cors_allowed_origins: Vec<String>,
}

// Keep the API key out of logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("youtube_api_key", &self.youtube_api_key.as_ref().map(|_| "<redacted>"))
            .field("youtube_base_url", &self.youtube_base_url)
            .field("request_timeout", &self.request_timeout)
            .field("bind_addr", &self.bind_addr)
            .field("default_region", &self.default_region)
            .field("default_limit", &self.default_limit)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            youtube_api_key: None,
            youtube_base_url: YOUTUBE_API_BASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            bind_addr: DEFAULT_BIND_ADDR.parse().expect("default bind address is valid"),
            default_region: DEFAULT_REGION.to_string(),
            default_limit: clamp_limit(DEFAULT_LIMIT),
            cors_allowed_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load configuration from process environment.
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let youtube_base_url = get("YOUTUBE_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.youtube_base_url);

        let request_timeout = match get("YOUTUBE_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!("Invalid YOUTUBE_TIMEOUT_SECS={:?}, using {}s", raw, DEFAULT_TIMEOUT_SECS);
                    defaults.request_timeout
                }
            },
            None => defaults.request_timeout,
        };

        let bind_addr = match get("BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Invalid BIND_ADDR={:?}, using {}", raw, DEFAULT_BIND_ADDR);
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        let default_limit = match get("DEFAULT_LIMIT") {
            Some(raw) => match raw.parse::<i64>() {
                Ok(n) => clamp_limit(n),
                Err(_) => {
                    warn!("Invalid DEFAULT_LIMIT={:?}, using {}", raw, DEFAULT_LIMIT);
                    defaults.default_limit
                }
            },
            None => defaults.default_limit,
        };

        // Comma separated; origins never carry a trailing slash
        let cors_allowed_origins = match get("CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|o| o.trim().trim_end_matches('/').to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            None => defaults.cors_allowed_origins,
        };

        Self {
            youtube_api_key: get("YOUTUBE_API_KEY"),
            youtube_base_url,
            request_timeout,
            bind_addr,
            default_region: normalize_region(&get("DEFAULT_REGION").unwrap_or_default()),
            default_limit,
            cors_allowed_origins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(0), 1);
        assert_eq!(clamp_limit(-5), 1);
        assert_eq!(clamp_limit(200), 50);
        assert_eq!(clamp_limit(25), 25);
    }

    #[test]
    fn test_normalize_region() {
        assert_eq!(normalize_region("in"), "IN");
        assert_eq!(normalize_region("  gb "), "GB");
        assert_eq!(normalize_region(""), "US");
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = Config::from_lookup(lookup(&[]));
        assert!(config.youtube_api_key.is_none());
        assert_eq!(config.youtube_base_url, YOUTUBE_API_BASE);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.default_region, "US");
        assert_eq!(config.default_limit, 25);
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://youtube-trending-analytics.netlify.app", "http://localhost:5500"]
        );
    }

    #[test]
    fn test_cors_origins_from_env() {
        let config = Config::from_lookup(lookup(&[(
            "CORS_ALLOWED_ORIGINS",
            " https://dash.example.com/ ,, http://localhost:3000",
        )]));
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://dash.example.com", "http://localhost:3000"]
        );
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("YOUTUBE_API_KEY", "abc123"),
            ("YOUTUBE_API_BASE_URL", "http://127.0.0.1:9999/"),
            ("YOUTUBE_TIMEOUT_SECS", "3"),
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("DEFAULT_REGION", "jp"),
            ("DEFAULT_LIMIT", "80"),
        ]));
        assert_eq!(config.youtube_api_key.as_deref(), Some("abc123"));
        assert_eq!(config.youtube_base_url, "http://127.0.0.1:9999");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.default_region, "JP");
        assert_eq!(config.default_limit, 50);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("YOUTUBE_API_KEY", "   "),
            ("YOUTUBE_TIMEOUT_SECS", "soon"),
            ("BIND_ADDR", "nowhere"),
            ("DEFAULT_LIMIT", "lots"),
        ]));
        assert!(config.youtube_api_key.is_none());
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.default_limit, 25);
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config {
            youtube_api_key: Some("super-secret".to_string()),
            ..Config::default()
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
