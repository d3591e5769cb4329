use std::time::Duration;

/// Application configuration assembled from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,

    /// Remote source fetch limits.
    pub fetch: FetchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            fetch: FetchConfig::default(),
        }
    }
}

/// Timeouts and redirect cap for the remote source fetch.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            max_redirects: 10,
        }
    }
}

impl FetchConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = FetchConfig::default();
        let config = Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            fetch: FetchConfig {
                connect_timeout_secs: env_parse("FETCH_CONNECT_TIMEOUT_SECS")
                    .unwrap_or(defaults.connect_timeout_secs),
                request_timeout_secs: env_parse("FETCH_TIMEOUT_SECS")
                    .unwrap_or(defaults.request_timeout_secs),
                max_redirects: env_parse("FETCH_MAX_REDIRECTS").unwrap_or(defaults.max_redirects),
            },
        };

        tracing::info!(
            bind_addr = %config.bind_addr,
            connect_timeout_secs = config.fetch.connect_timeout_secs,
            request_timeout_secs = config.fetch.request_timeout_secs,
            max_redirects = config.fetch.max_redirects,
            "Loaded configuration"
        );

        config
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
