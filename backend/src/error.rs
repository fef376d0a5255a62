use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("FRONTEND_URL is not a valid origin: {0:?}")]
    InvalidOrigin(String),
}
