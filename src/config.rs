/// Service configuration.
///
/// # Environment Variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_HOST | 127.0.0.1 | listen address |
/// | HTTP_PORT | 5000 | listen port |
/// | ORDER_ACTOR_BUFFER | 32 | order actor mailbox capacity |
/// | LOG_LEVEL | info | log filter used when `RUST_LOG` is unset |
///
/// # Example
///
/// ```ignore
/// HTTP_HOST=0.0.0.0 HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub http_host: String,
    /// Port the HTTP listener binds to
    pub http_port: u16,
    /// Capacity of the order actor's mailbox
    pub actor_buffer: usize,
    /// Default `tracing` filter
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_host: "127.0.0.1".into(),
            http_port: 5000,
            actor_buffer: 32,
            log_level: "info".into(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparseable values fall back to [`Config::default`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            http_host: lookup("HTTP_HOST").unwrap_or(defaults.http_host),
            http_port: lookup("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            actor_buffer: lookup("ORDER_ACTOR_BUFFER")
                .and_then(|b| b.parse().ok())
                .filter(|&b| b > 0)
                .unwrap_or(defaults.actor_buffer),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}
