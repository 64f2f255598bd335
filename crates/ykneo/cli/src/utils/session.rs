//! Session helpers for the ykneo-bitcoin CLI

use std::error::Error;
use std::io::{self, Write};

use tracing::debug;
use ykneo_apdu_transport_pcsc::PcscTransport;
use ykneo_bitcoin::{PinMode, YkneoBitcoin};
use zeroize::Zeroizing;

/// Session over the PC/SC transport
pub(crate) type Session = YkneoBitcoin<PcscTransport>;

/// Prompt on stdout and read one line from stdin
///
/// The terminal echoes what is typed; pass `--pin` to avoid showing a PIN.
pub(crate) fn prompt_input(prompt: &str) -> io::Result<Zeroizing<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = Zeroizing::new(String::new());
    io::stdin().read_line(&mut input)?;

    let trimmed = input.trim_end_matches(['\r', '\n']);
    Ok(Zeroizing::new(trimmed.to_string()))
}

/// Use the PIN given on the command line, or prompt for it
pub(crate) fn pin_or_prompt(pin: Option<String>, prompt: &str) -> io::Result<Zeroizing<String>> {
    match pin {
        Some(pin) => Ok(Zeroizing::new(pin)),
        None => prompt_input(prompt),
    }
}

/// Select the applet
pub(crate) fn open_session(transport: PcscTransport) -> Result<Session, Box<dyn Error>> {
    let neo = YkneoBitcoin::new(transport)?;
    debug!(version = %neo.version(), "Session opened");
    Ok(neo)
}

/// Select the applet and verify a PIN
pub(crate) fn open_unlocked_session(
    transport: PcscTransport,
    mode: PinMode,
    pin: Option<String>,
) -> Result<Session, Box<dyn Error>> {
    let mut neo = open_session(transport)?;

    let prompt = match mode {
        PinMode::User => "User PIN",
        PinMode::Admin => "Admin PIN",
    };
    let pin = pin_or_prompt(pin, prompt)?;
    neo.verify_pin(pin.as_bytes(), mode)?;

    Ok(neo)
}
