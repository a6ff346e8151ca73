//! Request-level error type surfaced by `apply_action`.

use medialink_core::ConfigError;
use medialink_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    /// Failure returned by the remote store; carries the remote payload.
    #[error(transparent)]
    Remote(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reserved: input validation is a deliberate no-op at this layer.
    #[error("Invalid input: {0}")]
    Validation(String),
}
