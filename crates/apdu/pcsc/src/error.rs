//! Error types for PC/SC transport

use ykneo_apdu_core::prelude::TransportError;

/// PC/SC-specific errors
#[derive(Debug, thiserror::Error)]
pub enum PcscError {
    /// Error reported by the PC/SC daemon
    #[error("PC/SC error: {0}")]
    Pcsc(#[from] pcsc::Error),

    /// Reader not found
    #[error("Reader not found: {0}")]
    ReaderNotFound(String),

    /// No card present in reader
    #[error("No card present in reader: {0}")]
    NoCard(String),

    /// Card was removed
    #[error("Card was removed")]
    CardRemoved,

    /// Card was reset by another process; the applet must be selected again
    #[error("Card was reset")]
    CardReset,
}

impl From<PcscError> for TransportError {
    fn from(error: PcscError) -> Self {
        match error {
            PcscError::NoCard(_) | PcscError::CardRemoved | PcscError::CardReset => {
                Self::Connection
            }
            PcscError::ReaderNotFound(_) => Self::Device,
            PcscError::Pcsc(pcsc::Error::InsufficientBuffer) => Self::BufferTooSmall,
            PcscError::Pcsc(pcsc::Error::NoSmartcard | pcsc::Error::RemovedCard) => {
                Self::Connection
            }
            PcscError::Pcsc(pcsc::Error::UnknownReader | pcsc::Error::ReaderUnavailable) => {
                Self::Device
            }
            PcscError::Pcsc(e) => Self::other(e.to_string()),
        }
    }
}

/// Convenience conversion so `?` can lift PC/SC failures into the core error
impl From<PcscError> for ykneo_apdu_core::Error {
    fn from(error: PcscError) -> Self {
        Self::Transport(error.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_mapping() {
        assert_eq!(
            TransportError::from(PcscError::NoCard("reader".into())),
            TransportError::Connection
        );
        assert_eq!(
            TransportError::from(PcscError::ReaderNotFound("reader".into())),
            TransportError::Device
        );
        assert_eq!(
            TransportError::from(PcscError::CardReset),
            TransportError::Connection
        );
        assert_eq!(
            TransportError::from(PcscError::Pcsc(pcsc::Error::RemovedCard)),
            TransportError::Connection
        );
        assert!(matches!(
            TransportError::from(PcscError::Pcsc(pcsc::Error::Timeout)),
            TransportError::Other(_)
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            PcscError::NoCard("Yubico NEO".into()).to_string(),
            "No card present in reader: Yubico NEO"
        );
    }
}
