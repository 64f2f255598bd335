//! ykneo-bitcoin session
//!
//! [`YkneoBitcoin`] owns a transport on which the applet has been selected and
//! tracks what has been unlocked so far. Every operation checks its access
//! preconditions before anything is sent to the card.

use bytes::Bytes;
use tracing::{debug, info, warn};
use ykneo_apdu_core::prelude::*;

use crate::codec::Status;
use crate::commands::{self, GenerateFlags};
use crate::error::{Error, Result};
use crate::path::KeyPath;
use crate::types::{AppletVersion, PinMode, SelectResponse, SessionState};

/// Session with the ykneo-bitcoin applet
#[derive(Debug)]
pub struct YkneoBitcoin<T: CardTransport> {
    /// Transport the applet was selected on
    transport: T,
    /// Version, key and unlock state
    state: SessionState,
}

impl<T: CardTransport> YkneoBitcoin<T> {
    /// Select the applet on `transport` and start a session
    ///
    /// Both PINs start out locked.
    pub fn new(mut transport: T) -> Result<Self> {
        let response = transport.exchange(&commands::select()?)?;

        if !response.is_success() {
            warn!(status = %response.status(), "Unable to select the ykneo-bitcoin applet");
            return Err(Error::Protocol {
                status: response.status().to_u16(),
            });
        }

        let selected = SelectResponse::try_from(response.payload().as_ref())?;
        info!(
            version = %selected.version,
            key_loaded = selected.key_loaded,
            "Selected ykneo-bitcoin applet"
        );

        Ok(Self {
            transport,
            state: SessionState::selected(selected),
        })
    }

    /// Applet version reported on selection
    pub const fn version(&self) -> AppletVersion {
        self.state.version
    }

    /// Whether a master key pair is stored on the device
    pub const fn key_loaded(&self) -> bool {
        self.state.key_loaded
    }

    /// Whether the user PIN has been verified in this session
    pub const fn user_unlocked(&self) -> bool {
        self.state.user_unlocked
    }

    /// Whether the admin PIN has been verified in this session
    pub const fn admin_unlocked(&self) -> bool {
        self.state.admin_unlocked
    }

    /// Snapshot of the session state
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Borrow the underlying transport
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// End the session and return the transport
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Verify the user PIN
    pub fn verify_user_pin(&mut self, pin: impl AsRef<[u8]>) -> Result<()> {
        self.verify_pin(pin, PinMode::User)
    }

    /// Verify the admin PIN
    pub fn verify_admin_pin(&mut self, pin: impl AsRef<[u8]>) -> Result<()> {
        self.verify_pin(pin, PinMode::Admin)
    }

    /// Verify the PIN selected by `mode`
    ///
    /// A rejected PIN locks the credential again and reports the attempts
    /// left. Any other failure leaves the unlock state as it was.
    pub fn verify_pin(&mut self, pin: impl AsRef<[u8]>, mode: PinMode) -> Result<()> {
        let cmd = commands::verify_pin(mode, pin.as_ref())?;
        let response = self.transport.exchange(&cmd)?;
        self.apply_pin_outcome(mode, response.status())?;

        debug!(%mode, "PIN verified");
        Ok(())
    }

    /// Change the user PIN
    pub fn set_user_pin(&mut self, old_pin: impl AsRef<[u8]>, new_pin: impl AsRef<[u8]>) -> Result<()> {
        self.change_pin(old_pin, new_pin, PinMode::User)
    }

    /// Change the admin PIN
    pub fn set_admin_pin(&mut self, old_pin: impl AsRef<[u8]>, new_pin: impl AsRef<[u8]>) -> Result<()> {
        self.change_pin(old_pin, new_pin, PinMode::Admin)
    }

    /// Change the PIN selected by `mode`
    ///
    /// The old PIN is verified as part of the change, so success unlocks the
    /// credential and a rejected old PIN locks it.
    pub fn change_pin(
        &mut self,
        old_pin: impl AsRef<[u8]>,
        new_pin: impl AsRef<[u8]>,
        mode: PinMode,
    ) -> Result<()> {
        let cmd = commands::change_pin(mode, old_pin.as_ref(), new_pin.as_ref())?;
        let response = self.transport.exchange(&cmd)?;
        self.apply_pin_outcome(mode, response.status())?;

        info!(%mode, "PIN changed");
        Ok(())
    }

    /// Set the number of attempts allowed for the user PIN
    pub fn set_user_retry_count(&mut self, attempts: u8) -> Result<()> {
        self.set_retry_count(attempts, PinMode::User)
    }

    /// Set the number of attempts allowed for the admin PIN
    pub fn set_admin_retry_count(&mut self, attempts: u8) -> Result<()> {
        self.set_retry_count(attempts, PinMode::Admin)
    }

    /// Set the number of attempts (1 to 15) allowed for the PIN selected by `mode`
    pub fn set_retry_count(&mut self, attempts: u8, mode: PinMode) -> Result<()> {
        self.require_admin()?;

        let cmd = commands::set_retry_count(mode, attempts)?;
        self.transmit_ok(&cmd)?;

        info!(%mode, attempts, "Retry count updated");
        Ok(())
    }

    /// Replace the user PIN using admin rights
    ///
    /// The user unlock state of this session is left unchanged.
    pub fn reset_user_pin(&mut self, pin: impl AsRef<[u8]>) -> Result<()> {
        self.require_admin()?;

        let cmd = commands::reset_user_pin(pin.as_ref())?;
        self.transmit_ok(&cmd)?;

        info!("User PIN reset");
        Ok(())
    }

    /// Generate a new master key pair on the device
    ///
    /// Returns the applet's response, which includes the private key only
    /// when `return_private` is set.
    pub fn generate_master_key_pair(
        &mut self,
        allow_export: bool,
        return_private: bool,
        testnet: bool,
    ) -> Result<Bytes> {
        self.require_admin()?;

        let flags = GenerateFlags {
            allow_export,
            return_private,
            testnet,
        };
        let cmd = commands::generate_key_pair(flags)?;
        let data = self.transmit_ok(&cmd)?;
        self.state.key_loaded = true;

        info!(allow_export, testnet, "Generated master key pair");
        Ok(data)
    }

    /// Import a serialized extended key pair as the master key pair
    pub fn import_extended_key_pair(
        &mut self,
        serialized_key: impl AsRef<[u8]>,
        allow_export: bool,
    ) -> Result<()> {
        self.require_admin()?;

        let cmd = commands::import_key_pair(serialized_key.as_ref(), allow_export)?;
        self.transmit_ok(&cmd)?;
        self.state.key_loaded = true;

        info!(allow_export, "Imported extended key pair");
        Ok(())
    }

    /// Export the extended public key of the master key pair
    pub fn export_extended_public_key(&mut self) -> Result<Bytes> {
        self.require_admin()?;

        let cmd = commands::export_public_key()?;
        self.transmit_ok(&cmd)
    }

    /// Public key of the sub key at `path`, e.g. `"0/7"`
    pub fn get_public_key(&mut self, path: &str) -> Result<Bytes> {
        self.require_user()?;
        self.require_key()?;

        let path: KeyPath = path.parse()?;
        debug!(%path, "Requesting public key");

        let cmd = commands::get_public_key(&path)?;
        self.transmit_ok(&cmd)
    }

    /// Sign a 32-byte digest with the sub key at `path`
    pub fn sign(&mut self, path: &str, digest: impl AsRef<[u8]>) -> Result<Bytes> {
        self.require_user()?;
        self.require_key()?;

        let path: KeyPath = path.parse()?;
        debug!(%path, "Signing digest");

        let cmd = commands::sign(&path, digest.as_ref())?;
        self.transmit_ok(&cmd)
    }

    /// Extended key header of the master key pair
    pub fn get_header(&mut self) -> Result<Bytes> {
        self.require_user()?;
        self.require_key()?;

        let cmd = commands::get_header()?;
        self.transmit_ok(&cmd)
    }

    fn require_user(&self) -> Result<()> {
        if !self.state.user_unlocked {
            return Err(Error::PinModeLocked { admin: false });
        }
        Ok(())
    }

    fn require_admin(&self) -> Result<()> {
        if !self.state.admin_unlocked {
            return Err(Error::PinModeLocked { admin: true });
        }
        Ok(())
    }

    fn require_key(&self) -> Result<()> {
        if !self.state.key_loaded {
            return Err(Error::NoKeyLoaded);
        }
        Ok(())
    }

    /// Send a command and return its payload, failing on any non-success status
    fn transmit_ok(&mut self, cmd: &Command) -> Result<Bytes> {
        let response = self.transport.exchange(cmd)?;

        if !response.is_success() {
            warn!(
                ins = cmd.instruction(),
                status = %response.status(),
                "Command rejected by applet"
            );
            return Err(Error::Protocol {
                status: response.status().to_u16(),
            });
        }

        Ok(response.into_payload())
    }

    fn apply_pin_outcome(&mut self, mode: PinMode, status: StatusWord) -> Result<()> {
        match Status::from(status) {
            Status::Success => {
                self.state.set_unlocked(mode, true);
                Ok(())
            }
            Status::PinFailed { attempts_remaining } => {
                self.state.set_unlocked(mode, false);
                warn!(%mode, attempts_remaining, "PIN rejected");
                Err(Error::IncorrectPin {
                    admin: mode.is_admin(),
                    attempts_remaining,
                })
            }
            Status::Unclassified { code } => {
                warn!(%mode, status = %status, "PIN command failed");
                Err(Error::Protocol { status: code })
            }
        }
    }
}
