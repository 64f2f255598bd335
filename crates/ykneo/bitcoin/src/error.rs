//! Error types for applet operations

/// Result type for applet operations
pub type Result<T> = std::result::Result<T, Error>;

const fn credential(admin: bool) -> &'static str {
    if admin { "admin" } else { "user" }
}

/// Error type for applet operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operation needs key material but none is stored on the device
    #[error("No key loaded on the device")]
    NoKeyLoaded,

    /// The operation needs a PIN that has not been verified in this session
    #[error("{} PIN must be verified first", credential(*admin))]
    PinModeLocked {
        /// Whether the admin PIN is the one required
        admin: bool,
    },

    /// The device rejected a PIN
    #[error("Incorrect {} PIN, {attempts_remaining} attempts remaining", credential(*admin))]
    IncorrectPin {
        /// Whether the rejected PIN was the admin PIN
        admin: bool,
        /// Attempts left before the PIN is blocked
        attempts_remaining: u8,
    },

    /// Input could not be encoded into a command
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The applet answered with a status word other than success
    #[error("Applet returned status 0x{status:04X}")]
    Protocol {
        /// Raw status word
        status: u16,
    },

    /// A successful response carried a malformed payload
    #[error("Invalid response: {0}")]
    InvalidResponse(&'static str),

    /// Transport or response framing failure
    #[error(transparent)]
    Apdu(#[from] ykneo_apdu_core::Error),
}

/// Errors raised while encoding inputs into command frames
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A key path component is not a decimal index within 32 bits
    #[error("Invalid key path component: {0:?}")]
    InvalidPathComponent(String),

    /// An encoded key path is not a whole number of 32-bit words
    #[error("Encoded key path length {0} is not a multiple of 4")]
    InvalidPathLength(usize),

    /// The digest to sign has the wrong length
    #[error("Digest must be 32 bytes, got {0}")]
    DigestLength(usize),

    /// The requested retry count is out of range
    #[error("Retry count must be between 1 and 15, got {0}")]
    RetryCount(u8),

    /// The command payload does not fit a short frame
    #[error("Payload of {0} bytes exceeds the 255 byte limit")]
    PayloadTooLong(usize),

    /// A PIN is too long to be length-prefixed with one byte
    #[error("PIN of {0} bytes is too long")]
    PinTooLong(usize),
}

impl From<ykneo_apdu_core::prelude::TransportError> for Error {
    fn from(error: ykneo_apdu_core::prelude::TransportError) -> Self {
        Self::Apdu(error.into())
    }
}
