//! Configuration loading and constants.
//!
//! All configuration comes from the process environment and every value has
//! a default, so loading is total: an unset or unparseable variable falls
//! back rather than failing startup. `AppConfig` is the root configuration
//! struct, read once at startup and immutable thereafter.

use std::net::{IpAddr, Ipv4Addr};

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable selecting the listen port
pub const PORT_ENV_VAR: &str = "PORT";

/// Environment variable selecting the bind address
pub const HOST_ENV_VAR: &str = "HOST";

/// Environment variable selecting the log output format (text or json)
pub const LOG_FORMAT_ENV_VAR: &str = "LOG_FORMAT";

// =============================================================================
// Defaults and Strings
// =============================================================================

/// Listen port used when `PORT` is unset or invalid
pub const DEFAULT_PORT: u16 = 3000;

/// Bind address used when `HOST` is unset or invalid (all interfaces)
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Body returned for `GET /`
pub const GREETING: &str = "Hello, World from AWS Elastic Beanstalk!";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "hello_beanstalk=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the listener binds to
    pub host: IpAddr,
    /// Port the listener binds to
    pub port: u16,
    /// Log output format: "text" (human-readable) or "json" (structured)
    pub log_format: String,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            host: resolve_host(std::env::var(HOST_ENV_VAR).ok().as_deref()),
            port: resolve_port(std::env::var(PORT_ENV_VAR).ok().as_deref()),
            log_format: std::env::var(LOG_FORMAT_ENV_VAR)
                .unwrap_or_else(|_| DEFAULT_LOG_FORMAT.to_string()),
        }
    }
}

/// Resolve the listen port from the raw `PORT` value.
///
/// Accepts a positive integer in the TCP port range. Unset, unparseable,
/// out-of-range, and zero values all resolve to [`DEFAULT_PORT`].
pub fn resolve_port(raw: Option<&str>) -> u16 {
    raw.and_then(|value| value.parse::<u16>().ok())
        .filter(|port| *port != 0)
        .unwrap_or(DEFAULT_PORT)
}

/// Resolve the bind address from the raw `HOST` value.
fn resolve_host(raw: Option<&str>) -> IpAddr {
    raw.and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_HOST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_parses_valid_values() {
        assert_eq!(resolve_port(Some("8080")), 8080);
        assert_eq!(resolve_port(Some("1")), 1);
        assert_eq!(resolve_port(Some("65535")), 65535);
    }

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(resolve_port(None), DEFAULT_PORT);
    }

    #[test]
    fn port_defaults_when_unparseable() {
        assert_eq!(resolve_port(Some("not-a-port")), DEFAULT_PORT);
        assert_eq!(resolve_port(Some("")), DEFAULT_PORT);
        assert_eq!(resolve_port(Some("80 80")), DEFAULT_PORT);
        assert_eq!(resolve_port(Some("-1")), DEFAULT_PORT);
    }

    #[test]
    fn port_defaults_when_out_of_range() {
        assert_eq!(resolve_port(Some("65536")), DEFAULT_PORT);
        assert_eq!(resolve_port(Some("0")), DEFAULT_PORT);
    }

    #[test]
    fn host_defaults_to_all_interfaces() {
        assert_eq!(resolve_host(None), DEFAULT_HOST);
        assert_eq!(resolve_host(Some("not-an-address")), DEFAULT_HOST);
        assert_eq!(
            resolve_host(Some("127.0.0.1")),
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        );
    }
}
