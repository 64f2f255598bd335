//! Host-side driver for the ykneo-bitcoin applet
//!
//! The applet runs on a YubiKey NEO and stores a single BIP32 extended key
//! pair. Key derivation and signing happen on the device; the host only sends
//! paths and digests and receives public keys and signatures back.
//!
//! Access is gated by two PINs:
//!
//! - the **user** PIN unlocks [`YkneoBitcoin::get_public_key`],
//!   [`YkneoBitcoin::sign`] and [`YkneoBitcoin::get_header`];
//! - the **admin** PIN unlocks key generation, import and export, retry
//!   counters and resetting the user PIN.
//!
//! ```no_run
//! use ykneo_apdu_core::CardTransport;
//! use ykneo_bitcoin::{Result, YkneoBitcoin};
//!
//! fn sign_digest<T: CardTransport>(transport: T, pin: &str, digest: [u8; 32]) -> Result<Vec<u8>> {
//!     let mut neo = YkneoBitcoin::new(transport)?;
//!     println!("applet {}", neo.version());
//!
//!     neo.verify_user_pin(pin)?;
//!     let signature = neo.sign("1/4711'", digest)?;
//!     Ok(signature.to_vec())
//! }
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]

mod application;
pub mod codec;
pub mod commands;
mod constants;
mod error;
pub mod path;
mod types;

pub use application::YkneoBitcoin;
pub use codec::{Status, build_frame, decode_status};
pub use constants::*;
pub use error::{Error, FormatError, Result};
pub use path::{KeyPath, encode_path};
pub use types::{AppletVersion, PinMode, SelectResponse, SessionState};
