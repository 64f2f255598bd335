//! APDU command definitions and traits
//!
//! This module provides types and traits for working with short APDU commands
//! according to ISO/IEC 7816-4.
//!
//! ```text
//! | CLA | INS | P1 | P2 | Lc | Data |
//! |-----|-----|----|----|----|------|
//! | 1B  | 1B  | 1B | 1B | 1B | Lc B |
//! ```

pub mod error;

use bytes::{BufMut, Bytes, BytesMut};

pub use error::CommandError;

/// Largest payload a short APDU command can carry
pub const MAX_SHORT_DATA_LEN: usize = 255;

/// Length of the fixed `CLA | INS | P1 | P2 | Lc` prefix
pub const HEADER_LEN: usize = 5;

/// Core trait for APDU commands
///
/// Implementors must keep [`ApduCommand::data`] within [`MAX_SHORT_DATA_LEN`] bytes.
pub trait ApduCommand {
    /// Command class (CLA)
    fn class(&self) -> u8;

    /// Instruction code (INS)
    fn instruction(&self) -> u8;

    /// First parameter (P1)
    fn p1(&self) -> u8;

    /// Second parameter (P2)
    fn p2(&self) -> u8;

    /// Command payload data, empty when the command carries none
    fn data(&self) -> &[u8];

    /// Convert to raw APDU bytes
    ///
    /// The Lc byte is always emitted, `0x00` for a command without data.
    fn to_bytes(&self) -> Bytes {
        let data = self.data();
        let mut buffer = BytesMut::with_capacity(self.command_length());

        // Header: CLA, INS, P1, P2
        buffer.put_u8(self.class());
        buffer.put_u8(self.instruction());
        buffer.put_u8(self.p1());
        buffer.put_u8(self.p2());

        // Lc and data
        buffer.put_u8(data.len() as u8);
        buffer.put_slice(data);

        buffer.freeze()
    }

    /// Calculate length of serialized command
    fn command_length(&self) -> usize {
        HEADER_LEN + self.data().len()
    }
}

/// Generic short APDU command
///
/// A `Command` is immutable once built; the payload length is checked on
/// construction so serialization can never truncate the Lc byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    cla: u8,
    ins: u8,
    p1: u8,
    p2: u8,
    data: Bytes,
}

impl Command {
    /// Create a new command with just the header bytes
    pub const fn new(cla: u8, ins: u8, p1: u8, p2: u8) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: Bytes::new(),
        }
    }

    /// Create a new command with data payload
    pub fn new_with_data<T: Into<Bytes>>(
        cla: u8,
        ins: u8,
        p1: u8,
        p2: u8,
        data: T,
    ) -> Result<Self, CommandError> {
        Self::new(cla, ins, p1, p2).with_data(data)
    }

    /// Set the data field
    pub fn with_data<T: Into<Bytes>>(self, data: T) -> Result<Self, CommandError> {
        let data = data.into();
        if data.len() > MAX_SHORT_DATA_LEN {
            return Err(CommandError::data_too_long(data.len(), MAX_SHORT_DATA_LEN));
        }

        Ok(Self { data, ..self })
    }

    /// Command payload as shared bytes
    pub const fn payload(&self) -> &Bytes {
        &self.data
    }

    /// Parse a command from raw bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self, CommandError> {
        if data.len() < HEADER_LEN {
            return Err(CommandError::InvalidLength(data.len()));
        }

        let lc = data[4] as usize;
        if data.len() != HEADER_LEN + lc {
            return Err(CommandError::InvalidLength(data.len()));
        }

        Ok(Self {
            cla: data[0],
            ins: data[1],
            p1: data[2],
            p2: data[3],
            data: Bytes::copy_from_slice(&data[HEADER_LEN..]),
        })
    }
}

impl ApduCommand for Command {
    fn class(&self) -> u8 {
        self.cla
    }

    fn instruction(&self) -> u8 {
        self.ins
    }

    fn p1(&self) -> u8 {
        self.p1
    }

    fn p2(&self) -> u8 {
        self.p2
    }

    fn data(&self) -> &[u8] {
        &self.data
    }
}
