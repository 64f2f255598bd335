//! Core error type for all APDU operations
//!
//! Transport, command and response errors are consolidated here so callers
//! can bubble any of them up through a single type.

use crate::command::error::CommandError;
use crate::response::error::ResponseError;
use crate::transport::error::TransportError;

/// Result type for APDU operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type that encompasses all possible errors in the crate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Transport-related errors
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Command-related errors
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Response-related errors
    #[error(transparent)]
    Response(#[from] ResponseError),
}
