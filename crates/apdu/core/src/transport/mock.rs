//! Scripted in-memory transport
//!
//! Responses are queued up front and handed out one per transmitted frame;
//! every frame sent is recorded so tests can assert on the exact wire bytes.

use std::collections::VecDeque;

use bytes::Bytes;

use super::{CardTransport, TransportError};
use crate::{Command, Response, StatusWord};

/// Mock transport for testing
#[derive(Debug, Clone)]
pub struct MockTransport {
    /// Raw responses (payload followed by SW1 SW2) still to be returned
    responses: VecDeque<Bytes>,
    /// Frames that were sent
    commands: Vec<Bytes>,
    /// Whether the transport is connected
    connected: bool,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// Create a connected mock transport with no queued responses
    pub const fn new() -> Self {
        Self {
            responses: VecDeque::new(),
            commands: Vec::new(),
            connected: true,
        }
    }

    /// Queue a response with the given payload and status word
    pub fn respond(mut self, payload: &[u8], status: u16) -> Self {
        self.push_response(Response::new(
            Bytes::copy_from_slice(payload),
            StatusWord::from_u16(status),
        ));
        self
    }

    /// Queue a response
    pub fn push_response(&mut self, response: Response) -> &mut Self {
        self.responses.push_back(response.into());
        self
    }

    /// Queue raw response bytes, bypassing response framing
    pub fn push_raw(&mut self, raw: Bytes) -> &mut Self {
        self.responses.push_back(raw);
        self
    }

    /// Frames that were sent, in order
    pub fn commands(&self) -> &[Bytes] {
        &self.commands
    }

    /// Parse the most recently sent frame
    pub fn last_command(&self) -> Option<Command> {
        self.commands
            .last()
            .and_then(|raw| Command::from_bytes(raw).ok())
    }

    /// Number of queued responses not yet consumed
    pub fn pending(&self) -> usize {
        self.responses.len()
    }

    /// Simulate the card being pulled from the reader
    pub const fn disconnect(&mut self) {
        self.connected = false;
    }
}

impl CardTransport for MockTransport {
    fn do_transmit_raw(&mut self, command: &[u8]) -> Result<Bytes, TransportError> {
        if !self.connected {
            return Err(TransportError::Connection);
        }

        self.commands.push(Bytes::copy_from_slice(command));

        self.responses
            .pop_front()
            .ok_or(TransportError::Transmission)
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn reset(&mut self) -> Result<(), TransportError> {
        self.connected = true;
        self.commands.clear();
        Ok(())
    }
}
