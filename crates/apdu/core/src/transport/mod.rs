//! Transport traits for APDU communication with cards
//!
//! This module provides abstractions for communicating with smart cards through
//! different transport mechanisms.

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

use std::fmt;

use bytes::Bytes;
pub use error::TransportError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;
use tracing::{debug, trace};

use crate::command::{ApduCommand, Command, HEADER_LEN};
use crate::{Error, Response};

/// Trait for basic card transports
///
/// A transport is responsible for sending and receiving raw APDU bytes.
/// It has no knowledge of command semantics or applet state.
pub trait CardTransport: Send + Sync + fmt::Debug {
    /// Send raw APDU bytes to card and return response bytes
    ///
    /// The returned bytes are the response payload followed by SW1 and SW2.
    fn transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError> {
        // Command payloads carry PINs and responses may carry key material.
        let header = &command[..command.len().min(HEADER_LEN)];
        trace!(
            header = %hex::encode(header),
            len = command.len(),
            "Transmitting raw command"
        );
        let result = self.do_transmit_raw(command);
        match &result {
            Ok(response) => {
                trace!(len = response.len(), "Received raw response");
            }
            Err(e) => {
                debug!(error = ?e, "Transport error during transmission");
            }
        }
        result
    }

    /// Internal implementation of transmit_raw
    /// This is the method that concrete implementations should override
    fn do_transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError>;

    /// Exchange one command frame for one response
    fn exchange(&mut self, command: &Command) -> Result<Response, Error> {
        let response_bytes = self.transmit_raw(&command.to_bytes())?;
        let response = Response::from_bytes(&response_bytes)?;
        Ok(response)
    }

    /// Check if the transport is connected to a physical card
    fn is_connected(&self) -> bool;

    /// Reset the transport connection
    fn reset(&mut self) -> Result<(), TransportError>;
}

impl<T: CardTransport + ?Sized> CardTransport for &mut T {
    fn do_transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError> {
        (**self).do_transmit_raw(command)
    }

    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }

    fn reset(&mut self) -> Result<(), TransportError> {
        (**self).reset()
    }
}
