//! Server configuration from environment variables
//!
//! | Variable         | Default   |
//! |------------------|-----------|
//! | `BIND_ADDR`      | `0.0.0.0` |
//! | `PORT`           | `3000`    |
//! | `DIAGNOSIS_SEED` | unset     |
//!
//! Log filtering is left to `RUST_LOG` (see the `api_server` binary).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Fixed seed for the mock diagnosis endpoint (reproducible demos)
    pub diagnosis_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            diagnosis_seed: None,
        }
    }
}

/// Parse `raw`, warning and keeping `default` when it is malformed
fn parse_or<T: std::str::FromStr>(name: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}", name, value);
            default
        }),
        None => default,
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (environment, test map)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let diagnosis_seed = lookup("DIAGNOSIS_SEED").and_then(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| tracing::warn!("Ignoring invalid DIAGNOSIS_SEED={:?}", raw))
                .ok()
        });

        Self {
            bind_addr: parse_or("BIND_ADDR", lookup("BIND_ADDR"), defaults.bind_addr),
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            diagnosis_seed,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
