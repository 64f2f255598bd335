use bytes::Bytes;
use ykneo_apdu_core::Command;

use crate::codec::build_frame;
use crate::constants::{CLA, generate_flags, ins};
use crate::error::Result;

/// Options for on-device key generation, sent as P2 bits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateFlags {
    /// The private key may later be exported
    pub allow_export: bool,
    /// Return the generated private key in the response
    pub return_private: bool,
    /// Generate a testnet key
    pub testnet: bool,
}

impl GenerateFlags {
    /// P2 byte for these flags
    pub const fn bits(&self) -> u8 {
        let mut p2 = 0;
        if self.allow_export {
            p2 |= generate_flags::ALLOW_EXPORT;
        }
        if self.return_private {
            p2 |= generate_flags::RETURN_PRIVATE;
        }
        if self.testnet {
            p2 |= generate_flags::TESTNET;
        }
        p2
    }
}

/// Generate a new master key pair
pub fn generate_key_pair(flags: GenerateFlags) -> Result<Command> {
    build_frame(CLA, ins::GENERATE_KEY_PAIR, 0x00, flags.bits(), Bytes::new())
}

/// Import a serialized extended key pair as the master key pair
pub fn import_key_pair(serialized_key: &[u8], allow_export: bool) -> Result<Command> {
    build_frame(
        CLA,
        ins::IMPORT_KEY_PAIR,
        0x00,
        u8::from(allow_export),
        Bytes::copy_from_slice(serialized_key),
    )
}

/// Export the extended public key of the master key pair
pub fn export_public_key() -> Result<Command> {
    build_frame(CLA, ins::EXPORT_PUBLIC_KEY, 0x00, 0x00, Bytes::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ykneo_apdu_core::ApduCommand;

    #[test]
    fn test_generate_flags() {
        assert_eq!(GenerateFlags::default().bits(), 0x00);
        let all = GenerateFlags {
            allow_export: true,
            return_private: true,
            testnet: true,
        };
        assert_eq!(all.bits(), 0x07);
        let private_only = GenerateFlags {
            return_private: true,
            ..Default::default()
        };
        assert_eq!(private_only.bits(), 0x02);

        let cmd = generate_key_pair(all).unwrap();
        assert_eq!(cmd.to_bytes().as_ref(), &[0x00, 0x11, 0x00, 0x07, 0x00]);
    }

    #[test]
    fn test_import_export_flag() {
        let key = [0x5Au8; 78];
        assert_eq!(import_key_pair(&key, true).unwrap().p2(), 0x01);
        assert_eq!(import_key_pair(&key, false).unwrap().p2(), 0x00);
        assert_eq!(import_key_pair(&key, false).unwrap().data(), &key);
    }

    #[test]
    fn test_export_public_key() {
        assert_eq!(
            export_public_key().unwrap().to_bytes().as_ref(),
            &[0x00, 0x13, 0x00, 0x00, 0x00]
        );
    }
}
