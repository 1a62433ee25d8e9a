//! Service configuration from environment variables.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Runtime configuration.
///
/// | Variable | Default |
/// |---|---|
/// | `HTTP_PORT` | `9090` |
/// | `CATALOG_PATH` | unset (built-in catalog) |
/// | `ALLOCATOR_BUFFER` | `32` |
/// | `REQUEST_TIMEOUT_MS` | `30000` |
///
/// Unparsable values fall back to the default.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub http_port: u16,
    pub catalog_path: Option<PathBuf>,
    pub allocator_buffer: usize,
    pub request_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 9090,
            catalog_path: None,
            allocator_buffer: 32,
            request_timeout_ms: 30_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            http_port: parse_or(&lookup, "HTTP_PORT", defaults.http_port),
            catalog_path: lookup("CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            allocator_buffer: parse_or(&lookup, "ALLOCATOR_BUFFER", defaults.allocator_buffer),
            request_timeout_ms: parse_or(&lookup, "REQUEST_TIMEOUT_MS", defaults.request_timeout_ms),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
