//! Commands that only inspect the applet

use std::error::Error;

use ykneo_apdu_transport_pcsc::PcscTransport;

use crate::utils::{display, session};

/// Select the applet and show what it reports
pub(crate) fn info_command(transport: PcscTransport) -> Result<(), Box<dyn Error>> {
    let reader = transport.reader_name().to_string();
    let neo = session::open_session(transport)?;

    let key_loaded = if neo.key_loaded() { "yes" } else { "no" };
    println!(
        "{}",
        display::key_value_box(
            "ykneo-bitcoin applet",
            vec![
                ("Reader", reader),
                ("Version", neo.version().to_string()),
                ("Key loaded", key_loaded.to_string()),
            ],
        )
    );

    Ok(())
}
