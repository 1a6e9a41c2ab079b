//! Controller error types

use thiserror::Error;

use crate::client::ClientError;

/// Why bootstrap produced no session
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BootstrapError {
    /// Opened outside the container; aborted without telling the user
    #[error("No init data from host")]
    MissingInitData,

    #[error("Authentication failed: {0}")]
    Auth(#[from] ClientError),
}

/// Why a form submission did not complete
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Mood level is the only presence-checked field
    #[error("No mood selected")]
    MissingMood,

    #[error("Invalid {field} timestamp: {value:?}")]
    InvalidTimestamp { field: &'static str, value: String },

    #[error(transparent)]
    Client(#[from] ClientError),
}
