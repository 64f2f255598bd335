use bytes::{BufMut, Bytes, BytesMut};
use ykneo_apdu_core::Command;

use crate::codec::build_frame;
use crate::constants::{CLA, MAX_RETRY_COUNT, MIN_RETRY_COUNT, ins};
use crate::error::{Error, FormatError, Result};
use crate::types::PinMode;

/// VERIFY the PIN selected by `mode`
pub fn verify_pin(mode: PinMode, pin: &[u8]) -> Result<Command> {
    build_frame(
        CLA,
        ins::VERIFY_PIN,
        0x00,
        mode.p2(),
        Bytes::copy_from_slice(pin),
    )
}

/// CHANGE the PIN selected by `mode`
///
/// Payload is `len(old) || old || len(new) || new`.
pub fn change_pin(mode: PinMode, old_pin: &[u8], new_pin: &[u8]) -> Result<Command> {
    let old_len = pin_length(old_pin)?;
    let new_len = pin_length(new_pin)?;

    let mut data = BytesMut::with_capacity(2 + old_pin.len() + new_pin.len());
    data.put_u8(old_len);
    data.put_slice(old_pin);
    data.put_u8(new_len);
    data.put_slice(new_pin);

    build_frame(CLA, ins::CHANGE_PIN, 0x00, mode.p2(), data.freeze())
}

/// Set the number of attempts allowed for the PIN selected by `mode`
pub fn set_retry_count(mode: PinMode, attempts: u8) -> Result<Command> {
    if !(MIN_RETRY_COUNT..=MAX_RETRY_COUNT).contains(&attempts) {
        return Err(FormatError::RetryCount(attempts).into());
    }

    build_frame(
        CLA,
        ins::SET_RETRY_COUNT,
        0x00,
        mode.p2(),
        Bytes::copy_from_slice(&[attempts]),
    )
}

/// Replace the user PIN without knowing the old one
pub fn reset_user_pin(pin: &[u8]) -> Result<Command> {
    build_frame(
        CLA,
        ins::RESET_USER_PIN,
        0x00,
        0x00,
        Bytes::copy_from_slice(pin),
    )
}

fn pin_length(pin: &[u8]) -> Result<u8> {
    u8::try_from(pin.len()).map_err(|_| Error::from(FormatError::PinTooLong(pin.len())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ykneo_apdu_core::ApduCommand;

    #[test]
    fn test_verify_pin() {
        let cmd = verify_pin(PinMode::Admin, b"12345678").unwrap();
        assert_eq!(cmd.instruction(), 0x21);
        assert_eq!(cmd.p2(), 0x01);
        assert_eq!(cmd.data(), b"12345678");
    }

    #[test]
    fn test_change_pin_payload() {
        let cmd = change_pin(PinMode::User, b"123456", b"654321").unwrap();
        assert_eq!(
            cmd.to_bytes().as_ref(),
            hex::decode("002200000E0631323334353606363534333231").unwrap()
        );
    }

    #[test]
    fn test_change_pin_length_limits() {
        assert_eq!(
            change_pin(PinMode::User, &[0x30; 256], b"1").unwrap_err(),
            Error::Format(FormatError::PinTooLong(256))
        );
        // Each PIN fits its length byte but the frame does not.
        assert_eq!(
            change_pin(PinMode::User, &[0x30; 200], &[0x31; 100]).unwrap_err(),
            Error::Format(FormatError::PayloadTooLong(302))
        );
    }

    #[test]
    fn test_set_retry_count_range() {
        for attempts in [0, 16, 255] {
            assert_eq!(
                set_retry_count(PinMode::User, attempts).unwrap_err(),
                Error::Format(FormatError::RetryCount(attempts))
            );
        }

        let cmd = set_retry_count(PinMode::Admin, 15).unwrap();
        assert_eq!(
            cmd.to_bytes().as_ref(),
            &[0x00, 0x15, 0x00, 0x01, 0x01, 0x0F]
        );
        assert!(set_retry_count(PinMode::User, 1).is_ok());
    }

    #[test]
    fn test_reset_user_pin() {
        let cmd = reset_user_pin(b"0000").unwrap();
        assert_eq!(cmd.instruction(), 0x14);
        assert_eq!(cmd.p2(), 0x00);
        assert_eq!(cmd.data(), b"0000");
    }
}
