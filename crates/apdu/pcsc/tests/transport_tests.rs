//! Hardware tests for the PC/SC transport
//!
//! These need a YubiKey NEO in the reader named by `YKNEO_TEST_READER` and are
//! ignored by default.

use ykneo_apdu_core::{ApduResponse, CardTransport, Command};
use ykneo_apdu_transport_pcsc::{PcscConfig, PcscError, PcscTransport};

const BITCOIN_AID: [u8; 7] = [0xA0, 0x00, 0x00, 0x05, 0x27, 0x21, 0x02];

fn test_transport() -> Option<PcscTransport> {
    let reader = std::env::var("YKNEO_TEST_READER").ok()?;
    PcscTransport::connect(&reader, PcscConfig::default()).ok()
}

#[test]
#[ignore = "requires a YubiKey NEO"]
fn test_select_bitcoin_applet() {
    let Some(mut transport) = test_transport() else {
        println!("Skipping test, YKNEO_TEST_READER not set or no card present");
        return;
    };
    assert!(transport.is_connected());

    let select = Command::new_with_data(0x00, 0xA4, 0x04, 0x00, BITCOIN_AID.to_vec()).unwrap();
    let response = transport.exchange(&select).unwrap();

    assert!(response.is_success());
    assert!(response.payload().len() >= 4);
}

#[test]
#[ignore = "requires a running PC/SC daemon"]
fn test_unknown_reader() {
    let result = PcscTransport::connect("No Such Reader 00 00", PcscConfig::default());
    assert!(matches!(
        result,
        Err(PcscError::ReaderNotFound(_) | PcscError::Pcsc(_))
    ));
}
