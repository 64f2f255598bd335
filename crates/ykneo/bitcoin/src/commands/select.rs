use bytes::Bytes;
use ykneo_apdu_core::Command;

use crate::codec::build_frame;
use crate::constants::{BITCOIN_AID, CLA, SELECT_BY_NAME, ins};
use crate::error::Result;

/// SELECT the ykneo-bitcoin applet by AID
pub fn select() -> Result<Command> {
    build_frame(
        CLA,
        ins::SELECT,
        SELECT_BY_NAME,
        0x00,
        Bytes::from_static(BITCOIN_AID),
    )
}
