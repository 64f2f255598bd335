//! Shared helpers for session tests

#![allow(dead_code, unreachable_pub)]

use ykneo_apdu_core::transport::MockTransport;
use ykneo_bitcoin::YkneoBitcoin;

pub const SUCCESS: u16 = 0x9000;

pub const USER_PIN: &str = "123456";
pub const ADMIN_PIN: &str = "12345678";

/// Uncompressed public key as returned by the applet
pub const PUBLIC_KEY: [u8; 65] = {
    let mut key = [0x11u8; 65];
    key[0] = 0x04;
    key
};

/// A mock card whose first response answers SELECT for applet 1.0.3
pub fn mock_applet(key_loaded: bool) -> MockTransport {
    MockTransport::new().respond(&[1, 0, 3, u8::from(key_loaded)], SUCCESS)
}

/// Open a session and verify the user PIN
///
/// `transport` must have the VERIFY response queued right after SELECT.
pub fn user_session(transport: MockTransport) -> YkneoBitcoin<MockTransport> {
    let mut neo = YkneoBitcoin::new(transport).unwrap();
    neo.verify_user_pin(USER_PIN).unwrap();
    neo
}

/// Open a session and verify the admin PIN
///
/// `transport` must have the VERIFY response queued right after SELECT.
pub fn admin_session(transport: MockTransport) -> YkneoBitcoin<MockTransport> {
    let mut neo = YkneoBitcoin::new(transport).unwrap();
    neo.verify_admin_pin(ADMIN_PIN).unwrap();
    neo
}

/// Number of frames the card has seen
pub fn frames_sent(neo: &YkneoBitcoin<MockTransport>) -> usize {
    neo.transport().commands().len()
}
