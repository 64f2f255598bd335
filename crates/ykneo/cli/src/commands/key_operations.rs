//! Commands for key management and use

use std::error::Error;

use ykneo_apdu_transport_pcsc::PcscTransport;
use ykneo_bitcoin::PinMode;

use crate::utils::{display, parse_hex, session};

/// Generate a master key pair on the device
pub(crate) fn generate_command(
    transport: PcscTransport,
    allow_export: bool,
    return_private: bool,
    testnet: bool,
    admin_pin: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let mut neo = session::open_unlocked_session(transport, PinMode::Admin, admin_pin)?;

    let response = neo.generate_master_key_pair(allow_export, return_private, testnet)?;

    println!("{}", display::success("Master key pair generated"));
    if !response.is_empty() {
        if return_private {
            println!("{}", display::sensitive_data_warning());
        }
        println!(
            "{}",
            display::key_value_box("Key pair", vec![("Response", hex::encode(&response))])
        );
    }

    Ok(())
}

/// Import a serialized extended key pair
pub(crate) fn import_command(
    transport: PcscTransport,
    key: &str,
    allow_export: bool,
    admin_pin: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let key = parse_hex(key)?;
    let mut neo = session::open_unlocked_session(transport, PinMode::Admin, admin_pin)?;

    neo.import_extended_key_pair(&key, allow_export)?;

    println!("{}", display::success("Extended key pair imported"));
    Ok(())
}

/// Export the extended public key of the master key pair
pub(crate) fn export_xpub_command(
    transport: PcscTransport,
    admin_pin: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let mut neo = session::open_unlocked_session(transport, PinMode::Admin, admin_pin)?;

    let xpub = neo.export_extended_public_key()?;

    println!(
        "{}",
        display::key_value_box("Extended public key", vec![("Data", hex::encode(&xpub))])
    );
    Ok(())
}

/// Show the public key of a sub key
pub(crate) fn public_key_command(
    transport: PcscTransport,
    path: &str,
    pin: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let mut neo = session::open_unlocked_session(transport, PinMode::User, pin)?;

    let public_key = neo.get_public_key(path)?;

    println!(
        "{}",
        display::key_value_box(
            "Public key",
            vec![("Path", path.to_string()), ("Key", hex::encode(&public_key))],
        )
    );
    Ok(())
}

/// Sign a digest with a sub key
pub(crate) fn sign_command(
    transport: PcscTransport,
    path: &str,
    digest: &str,
    pin: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let digest = parse_hex(digest)?;
    let mut neo = session::open_unlocked_session(transport, PinMode::User, pin)?;

    let signature = neo.sign(path, &digest)?;

    println!(
        "{}",
        display::key_value_box(
            "Signature",
            vec![
                ("Path", path.to_string()),
                ("Digest", hex::encode(&digest)),
                ("Signature", hex::encode(&signature)),
            ],
        )
    );
    Ok(())
}

/// Show the extended key header
pub(crate) fn header_command(
    transport: PcscTransport,
    pin: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let mut neo = session::open_unlocked_session(transport, PinMode::User, pin)?;

    let header = neo.get_header()?;

    println!(
        "{}",
        display::key_value_box("Header", vec![("Data", hex::encode(&header))])
    );
    Ok(())
}
