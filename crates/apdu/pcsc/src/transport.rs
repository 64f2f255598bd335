//! PC/SC transport implementation

use std::ffi::CString;
use std::fmt;

use bytes::Bytes;
use pcsc::{Card, Context, Disposition, MAX_BUFFER_SIZE, Scope};
use tracing::{debug, info, warn};
use ykneo_apdu_core::prelude::{CardTransport, TransportError};

use crate::config::PcscConfig;
use crate::error::PcscError;

/// Transport implementation using PC/SC
pub struct PcscTransport {
    /// PC/SC context
    context: Context,
    /// Card connection, if established
    card: Option<Card>,
    /// Reader name
    reader_name: String,
    /// Configuration
    config: PcscConfig,
}

impl fmt::Debug for PcscTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PcscTransport")
            .field("reader_name", &self.reader_name)
            .field("has_card", &self.card.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl PcscTransport {
    /// Connect to the card in the named reader
    ///
    /// Fails if the PC/SC daemon is unreachable, the reader does not exist, or
    /// no card is inserted.
    pub fn connect(reader_name: &str, config: PcscConfig) -> Result<Self, PcscError> {
        let context = Context::establish(Scope::User)?;

        let mut transport = Self {
            context,
            card: None,
            reader_name: reader_name.to_string(),
            config,
        };
        transport.connect_card()?;

        info!(reader = reader_name, "Connected to card");
        Ok(transport)
    }

    fn connect_card(&mut self) -> Result<(), PcscError> {
        if self.card.is_some() {
            return Ok(());
        }

        let reader_cstr = CString::new(self.reader_name.as_str())
            .map_err(|_| PcscError::ReaderNotFound(self.reader_name.clone()))?;

        match self.context.connect(
            &reader_cstr,
            self.config.share_mode.into(),
            self.config.protocols,
        ) {
            Ok(card) => {
                self.card = Some(card);
                Ok(())
            }
            Err(pcsc::Error::NoSmartcard) => Err(PcscError::NoCard(self.reader_name.clone())),
            Err(pcsc::Error::UnknownReader) => {
                Err(PcscError::ReaderNotFound(self.reader_name.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Get the ATR of the current card
    pub fn atr(&self) -> Result<Vec<u8>, PcscError> {
        let card = self
            .card
            .as_ref()
            .ok_or_else(|| PcscError::NoCard(self.reader_name.clone()))?;
        Ok(card.get_attribute_owned(pcsc::Attribute::AtrString)?)
    }

    /// Get the reader name
    pub fn reader_name(&self) -> &str {
        &self.reader_name
    }

    /// Get the connection configuration
    pub const fn config(&self) -> &PcscConfig {
        &self.config
    }

    fn transmit_once(&mut self, command: &[u8]) -> Result<Bytes, pcsc::Error> {
        let Some(card) = self.card.as_mut() else {
            return Err(pcsc::Error::NoSmartcard);
        };

        let mut response_buffer = [0u8; MAX_BUFFER_SIZE];
        let response = card.transmit(command, &mut response_buffer)?;
        Ok(Bytes::copy_from_slice(response))
    }

    fn transmit_command(&mut self, command: &[u8]) -> Result<Bytes, PcscError> {
        self.connect_card()?;

        match self.transmit_once(command) {
            Ok(response) => Ok(response),
            Err(pcsc::Error::RemovedCard) => {
                warn!(reader = %self.reader_name, "Card removed during transmission");
                self.card = None;
                Err(PcscError::CardRemoved)
            }
            Err(pcsc::Error::ResetCard) => {
                // The frame is not resent: the reset dropped the applet
                // selection and any verified PIN.
                warn!(reader = %self.reader_name, "Card was reset during transmission");
                self.card = None;
                if self.config.auto_reconnect {
                    debug!(reader = %self.reader_name, "Reconnecting after reset");
                    self.connect_card()?;
                }
                Err(PcscError::CardReset)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl CardTransport for PcscTransport {
    fn do_transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError> {
        self.transmit_command(command).map_err(TransportError::from)
    }

    fn is_connected(&self) -> bool {
        self.card.is_some()
    }

    fn reset(&mut self) -> Result<(), TransportError> {
        if let Some(card) = self.card.take() {
            let _ = card.disconnect(Disposition::ResetCard);
        }

        self.connect_card().map_err(Into::into)
    }
}

impl Drop for PcscTransport {
    fn drop(&mut self) {
        if let Some(card) = self.card.take() {
            let _ = card.disconnect(Disposition::LeaveCard);
        }
    }
}
