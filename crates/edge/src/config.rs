//! Edge server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Runtime configuration of the edge server.
#[derive(Debug, Clone)]
pub struct EdgeConfig {
    /// Address the server binds to.
    pub bind_addr: SocketAddr,
    /// Directory holding the durable session file.
    pub data_dir: PathBuf,
}

impl EdgeConfig {
    /// Resolves configuration from `TIJARA_HOST`, `TIJARA_PORT`, and
    /// `TIJARA_DATA_DIR`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host/port pair does not parse as a socket
    /// address.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let host = std::env::var("TIJARA_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("TIJARA_PORT").unwrap_or_else(|_| "8080".to_string());
        let bind_addr: SocketAddr = format!("{host}:{port}").parse()?;

        let data_dir = std::env::var("TIJARA_DATA_DIR").map_or_else(
            |_| {
                dirs::data_local_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("tijara")
            },
            PathBuf::from,
        );

        Ok(Self {
            bind_addr,
            data_dir,
        })
    }
}
