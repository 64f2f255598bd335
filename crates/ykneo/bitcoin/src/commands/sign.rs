use bytes::{Bytes, BytesMut};
use ykneo_apdu_core::Command;

use crate::codec::build_frame;
use crate::constants::{CLA, DIGEST_LEN, ins};
use crate::error::{FormatError, Result};
use crate::path::KeyPath;

/// Return the public key derived at `path`
pub fn get_public_key(path: &KeyPath) -> Result<Command> {
    build_frame(CLA, ins::GET_PUBLIC_KEY, 0x00, 0x00, path.to_bytes())
}

/// Sign a 32-byte digest with the key derived at `path`
pub fn sign(path: &KeyPath, digest: &[u8]) -> Result<Command> {
    if digest.len() != DIGEST_LEN {
        return Err(FormatError::DigestLength(digest.len()).into());
    }

    let mut data = BytesMut::from(path.to_bytes().as_ref());
    data.extend_from_slice(digest);

    build_frame(CLA, ins::SIGN, 0x00, 0x00, data.freeze())
}

/// Return the extended key header of the master key pair
pub fn get_header() -> Result<Command> {
    build_frame(CLA, ins::GET_HEADER, 0x00, 0x00, Bytes::new())
}
