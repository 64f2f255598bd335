//! Frame construction and status word classification
//!
//! Both directions are pure: nothing here touches a transport or session state.

use bytes::Bytes;
use ykneo_apdu_core::prelude::{CommandError, StatusWord};
use ykneo_apdu_core::Command;

use crate::error::{Error, FormatError, Result};

/// Build a short command frame
///
/// Fails if the payload does not fit in a single length byte; extended-length
/// frames are not supported by the applet.
pub fn build_frame(
    class: u8,
    instruction: u8,
    p1: u8,
    p2: u8,
    payload: impl Into<Bytes>,
) -> Result<Command> {
    Command::new(class, instruction, p1, p2)
        .with_data(payload)
        .map_err(|e| match e {
            CommandError::DataTooLong(len, _) => Error::Format(FormatError::PayloadTooLong(len)),
            other => Error::Apdu(other.into()),
        })
}

/// Decoded outcome of a status word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// `0x9000`
    Success,
    /// `0x63Cn`: PIN verification failed with `n` attempts remaining
    PinFailed {
        /// Attempts left before the PIN is blocked
        attempts_remaining: u8,
    },
    /// Any other status word
    Unclassified {
        /// Raw status word
        code: u16,
    },
}

impl Status {
    /// Whether this is [`Status::Success`]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<StatusWord> for Status {
    fn from(status: StatusWord) -> Self {
        if status.is_success() {
            Self::Success
        } else if let Some(attempts_remaining) = status.counter() {
            Self::PinFailed { attempts_remaining }
        } else {
            Self::Unclassified {
                code: status.to_u16(),
            }
        }
    }
}

/// Classify a status word given as its two bytes
pub const fn decode_status(sw1: u8, sw2: u8) -> Status {
    let status = StatusWord::new(sw1, sw2);
    if status.is_success() {
        Status::Success
    } else if status.is_counter() {
        Status::PinFailed {
            attempts_remaining: sw2 & 0x0F,
        }
    } else {
        Status::Unclassified {
            code: status.to_u16(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ykneo_apdu_core::ApduCommand;

    #[test]
    fn test_decode_success() {
        assert_eq!(decode_status(0x90, 0x00), Status::Success);
    }

    #[test]
    fn test_decode_pin_failed() {
        assert_eq!(
            decode_status(0x63, 0xCA),
            Status::PinFailed {
                attempts_remaining: 10
            }
        );
        assert_eq!(
            decode_status(0x63, 0xC0),
            Status::PinFailed {
                attempts_remaining: 0
            }
        );
        assert_eq!(
            decode_status(0x63, 0xCF),
            Status::PinFailed {
                attempts_remaining: 15
            }
        );
    }

    #[test]
    fn test_decode_unclassified() {
        for (sw1, sw2) in [(0x63, 0x0A), (0x63, 0x00), (0x69, 0x82), (0x6A, 0x82), (0x90, 0x01), (0x00, 0x00)] {
            assert_eq!(
                decode_status(sw1, sw2),
                Status::Unclassified {
                    code: u16::from_be_bytes([sw1, sw2])
                }
            );
        }
    }

    #[test]
    fn test_from_status_word_agrees() {
        for (sw1, sw2) in [(0x90, 0x00), (0x63, 0xC3), (0x6D, 0x00)] {
            assert_eq!(
                Status::from(StatusWord::new(sw1, sw2)),
                decode_status(sw1, sw2)
            );
        }
    }

    #[test]
    fn test_build_frame_always_emits_length() {
        let frame = build_frame(0x00, 0x13, 0x00, 0x00, Bytes::new()).unwrap();
        assert_eq!(frame.to_bytes().as_ref(), &[0x00, 0x13, 0x00, 0x00, 0x00]);

        let frame = build_frame(0x00, 0x21, 0x00, 0x01, b"1234".to_vec()).unwrap();
        assert_eq!(
            frame.to_bytes().as_ref(),
            &[0x00, 0x21, 0x00, 0x01, 0x04, b'1', b'2', b'3', b'4']
        );
    }

    #[test]
    fn test_build_frame_payload_limit() {
        assert!(build_frame(0x00, 0x12, 0x00, 0x00, vec![0u8; 255]).is_ok());
        assert_eq!(
            build_frame(0x00, 0x12, 0x00, 0x00, vec![0u8; 256]).unwrap_err(),
            Error::Format(FormatError::PayloadTooLong(256))
        );
    }
}
