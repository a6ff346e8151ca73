//! Declaration-time error types.
//!
//! `ConfigError` is raised while constructing store configuration or field
//! declarations. It is fatal to setup and never recovered at request time;
//! request-level errors live in the store and field crates.

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {0}")]
    Missing(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
