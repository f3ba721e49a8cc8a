use crate::error::DriverError;

pub mod config;
pub mod database;
pub mod error;
pub mod lookup;
pub mod notify;

pub(crate) fn env(key: &str) -> Result<String, DriverError> {
    dotenvy::var(key).map_err(DriverError::from)
}

pub(crate) fn env_or(key: &str, default: &str) -> Result<String, DriverError> {
    match env(key) {
        Ok(value) => Ok(value),
        Err(DriverError::Env(dotenvy::Error::EnvVar(std::env::VarError::NotPresent))) => {
            Ok(default.to_string())
        }
        Err(error) => Err(error),
    }
}
