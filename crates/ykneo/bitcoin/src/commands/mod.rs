//! Frame builders, one per applet instruction
//!
//! Builders validate their inputs and produce a ready-to-send [`Command`];
//! they never check session preconditions.
//!
//! [`Command`]: ykneo_apdu_core::Command

mod key;
mod pin;
mod select;
mod sign;

pub use key::{GenerateFlags, export_public_key, generate_key_pair, import_key_pair};
pub use pin::{change_pin, reset_user_pin, set_retry_count, verify_pin};
pub use select::select;
pub use sign::{get_header, get_public_key, sign};
