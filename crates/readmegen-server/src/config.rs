use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;
use readmegen_service::{EndpointConfig, DEFAULT_API_URL, DEFAULT_MODEL};

#[derive(Parser)]
#[command(name = "readmegen-server", about = "Text to README.md converter")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "READMEGEN_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on
    #[arg(long, env = "READMEGEN_PORT", default_value = "3720")]
    pub port: u16,

    /// Chat-completion endpoint URL
    #[arg(long, env = "READMEGEN_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Bearer credential for the chat-completion endpoint
    #[arg(long, env = "READMEGEN_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Model identifier sent with every request
    #[arg(long, env = "READMEGEN_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .bind
            .parse::<IpAddr>()
            .with_context(|| format!("invalid bind address: {}", self.bind))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn endpoint(&self) -> EndpointConfig {
        EndpointConfig::new(self.api_key.clone())
            .with_url(self.api_url.clone())
            .with_model(self.model.clone())
    }
}
