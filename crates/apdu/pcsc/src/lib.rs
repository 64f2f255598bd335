//! PC/SC transport for APDU exchange
//!
//! Implements [`CardTransport`](ykneo_apdu_core::CardTransport) on top of the
//! system PC/SC daemon. The caller names the reader to connect to; reader
//! discovery is left to the host.
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ykneo_apdu_core::{ApduResponse, CardTransport, Command};
//! use ykneo_apdu_transport_pcsc::{PcscConfig, PcscTransport};
//!
//! let mut transport = PcscTransport::connect("Yubico Yubikey NEO OTP+CCID", PcscConfig::default())?;
//! let select = Command::new_with_data(0x00, 0xA4, 0x04, 0x00, vec![0xA0, 0x00, 0x00, 0x05, 0x27, 0x21, 0x02])?;
//! let response = transport.exchange(&select)?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod transport;

pub use config::{PcscConfig, ShareMode};
pub use error::PcscError;
pub use pcsc::Protocols;
pub use transport::PcscTransport;
