use thiserror::Error;

/// Errors raised while loading configuration from the environment.
///
/// All variants abort startup; none are produced while serving requests.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),

    #[error("ALLOWED_ORIGINS entry is not a valid origin: {0}")]
    InvalidOrigin(String),
}
