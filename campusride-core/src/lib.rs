pub mod repository;
pub mod search;
pub mod session;

use campusride_catalog::{CapacityError, ValidationError};
use session::Role;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid ride input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("capacity exceeded: {0}")]
    CapacityExceeded(#[from] CapacityError),

    #[error("not authenticated")]
    Unauthorized,

    #[error("operation requires the {required} role")]
    Forbidden { required: Role },

    #[error("ride not found: {0}")]
    NotFound(String),

    #[error("corrupt value under storage key '{key}': {reason}")]
    Deserialization { key: String, reason: String },

    #[error("storage access failed: {0}")]
    Storage(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
