//! Applet identifiers, instruction codes and protocol limits

/// AID of the ykneo-bitcoin applet
pub const BITCOIN_AID: &[u8] = b"\xA0\x00\x00\x05\x27\x21\x02";

/// Class byte used for every command
pub const CLA: u8 = 0x00;

/// Instruction codes understood by the applet
pub mod ins {
    /// SELECT by AID (ISO 7816-4)
    pub const SELECT: u8 = 0xA4;
    /// Derive and return the public key at a path
    pub const GET_PUBLIC_KEY: u8 = 0x01;
    /// Sign a 32-byte digest with the key at a path
    pub const SIGN: u8 = 0x02;
    /// Return the extended key header
    pub const GET_HEADER: u8 = 0x03;
    /// Generate a new master key pair on the device
    pub const GENERATE_KEY_PAIR: u8 = 0x11;
    /// Import a serialized extended key pair
    pub const IMPORT_KEY_PAIR: u8 = 0x12;
    /// Export the extended public key of the master key pair
    pub const EXPORT_PUBLIC_KEY: u8 = 0x13;
    /// Set a new user PIN (admin only)
    pub const RESET_USER_PIN: u8 = 0x14;
    /// Set the retry counter of a PIN (admin only)
    pub const SET_RETRY_COUNT: u8 = 0x15;
    /// Verify a PIN
    pub const VERIFY_PIN: u8 = 0x21;
    /// Change a PIN
    pub const CHANGE_PIN: u8 = 0x22;
}

/// P1 of SELECT: select by DF name
pub const SELECT_BY_NAME: u8 = 0x04;

/// P2 bits of the generate command
pub mod generate_flags {
    /// The private key may later be exported
    pub const ALLOW_EXPORT: u8 = 0x01;
    /// Return the generated private key in the response
    pub const RETURN_PRIVATE: u8 = 0x02;
    /// Generate a testnet key
    pub const TESTNET: u8 = 0x04;
}

/// Bit marking a hardened derivation index
pub const HARDENED_BIT: u32 = 0x8000_0000;

/// Length of a digest accepted by the sign command
pub const DIGEST_LEN: usize = 32;

/// Lowest retry count accepted by the applet
pub const MIN_RETRY_COUNT: u8 = 1;

/// Highest retry count accepted by the applet
pub const MAX_RETRY_COUNT: u8 = 15;

/// Minimum length of a successful SELECT payload (version triple and key flag)
pub const SELECT_RESPONSE_LEN: usize = 4;
