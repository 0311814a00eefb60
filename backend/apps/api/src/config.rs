//! Server Configuration
//!
//! Read from the process environment (after `.env` is loaded).
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `PORT` | `3000` | Listening port, bound on all interfaces |
//! | `DATABASE_URL` | unset | PostgreSQL URL. Unset means in-memory store |
//! | `DATABASE_MAX_CONNECTIONS` | `5` | Pool size |

use anyhow::Context;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.parse::<u32>().with_context(|| {
                format!("DATABASE_MAX_CONNECTIONS must be a number, got {:?}", raw)
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            port,
            database_url: get("DATABASE_URL"),
            database_max_connections,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
