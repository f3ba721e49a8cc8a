use error_stack::Report;
use kernel::KernelError;

use crate::env_or;
use crate::error::DriverError;

static SERVER_PORT: &str = "SERVER_PORT";

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    port: u16,
}

impl ServerConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let raw = env_or(SERVER_PORT, &DEFAULT_PORT.to_string()).map_err(Report::from)?;
        let port = raw.parse::<u16>().map_err(|_| {
            Report::from(DriverError::Config {
                key: SERVER_PORT,
                value: raw.clone(),
            })
        })?;
        Ok(Self { port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}
