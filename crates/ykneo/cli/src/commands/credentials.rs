//! Commands for PIN management

use std::error::Error;

use ykneo_apdu_transport_pcsc::PcscTransport;
use ykneo_bitcoin::{Error as AppletError, PinMode};

use crate::utils::{display, session};

fn pin_label(mode: PinMode) -> &'static str {
    match mode {
        PinMode::User => "User PIN",
        PinMode::Admin => "Admin PIN",
    }
}

/// Verify a PIN and report the attempts left on failure
pub(crate) fn verify_pin_command(
    transport: PcscTransport,
    admin: bool,
    pin: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let mode = PinMode::from_admin(admin);
    let mut neo = session::open_session(transport)?;
    let pin = session::pin_or_prompt(pin, pin_label(mode))?;

    match neo.verify_pin(pin.as_bytes(), mode) {
        Ok(()) => {
            println!("{}", display::success(&format!("{} verified", pin_label(mode))));
            Ok(())
        }
        Err(AppletError::IncorrectPin {
            attempts_remaining, ..
        }) => {
            println!(
                "{}",
                display::warning(&format!(
                    "Incorrect {}, {attempts_remaining} attempts remaining",
                    pin_label(mode)
                ))
            );
            Err("PIN verification failed".into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Change a PIN, authenticating with the current one
pub(crate) fn change_pin_command(
    transport: PcscTransport,
    admin: bool,
    old_pin: Option<String>,
    new_pin: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let mode = PinMode::from_admin(admin);
    let mut neo = session::open_session(transport)?;

    let old_pin = session::pin_or_prompt(old_pin, &format!("Current {}", pin_label(mode)))?;
    let new_pin = session::pin_or_prompt(new_pin, &format!("New {}", pin_label(mode)))?;

    neo.change_pin(old_pin.as_bytes(), new_pin.as_bytes(), mode)?;

    println!("{}", display::success(&format!("{} changed", pin_label(mode))));
    Ok(())
}

/// Set the retry counter of a PIN
pub(crate) fn set_retry_count_command(
    transport: PcscTransport,
    attempts: u8,
    admin: bool,
    admin_pin: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let mode = PinMode::from_admin(admin);
    let mut neo = session::open_unlocked_session(transport, PinMode::Admin, admin_pin)?;

    neo.set_retry_count(attempts, mode)?;

    println!(
        "{}",
        display::success(&format!("{} now allows {attempts} attempts", pin_label(mode)))
    );
    Ok(())
}

/// Set a new user PIN using the admin PIN
pub(crate) fn reset_user_pin_command(
    transport: PcscTransport,
    new_pin: Option<String>,
    admin_pin: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let mut neo = session::open_unlocked_session(transport, PinMode::Admin, admin_pin)?;
    let new_pin = session::pin_or_prompt(new_pin, "New User PIN")?;

    neo.reset_user_pin(new_pin.as_bytes())?;

    println!("{}", display::success("User PIN reset"));
    Ok(())
}
