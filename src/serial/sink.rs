// Fixed-width scalar transmission with an explicit byte-order contract

use super::comm::{Result, Transport};
use serde::{Deserialize, Serialize};

/// Wire byte order for multi-byte sends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    pub fn is_big(&self) -> bool {
        matches!(self, Endianness::Big)
    }

    pub fn is_little(&self) -> bool {
        matches!(self, Endianness::Little)
    }
}

/// Sends 1/2/4-byte quantities to the transport, each as a single
/// logical write. Fire-and-forget: no acknowledgment is awaited, and
/// partial-write recovery stays on the transport side of the contract.
pub struct ByteSink<'a, T: Transport> {
    transport: &'a mut T,
    endianness: Endianness,
}

impl<'a, T: Transport> ByteSink<'a, T> {
    /// The byte order is part of the wire contract and is chosen here
    /// by the caller, never inherited from the platform.
    pub fn new(transport: &'a mut T, endianness: Endianness) -> Self {
        Self {
            transport,
            endianness,
        }
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Send a single byte
    pub fn send_byte(&mut self, value: u8) -> Result<()> {
        self.transport.send_all(&[value])
    }

    /// Send a word (16-bit)
    pub fn send_word(&mut self, value: u16) -> Result<()> {
        match self.endianness {
            Endianness::Big => self.transport.send_all(&value.to_be_bytes()),
            Endianness::Little => self.transport.send_all(&value.to_le_bytes()),
        }
    }

    /// Send a double word (32-bit)
    pub fn send_dword(&mut self, value: u32) -> Result<()> {
        match self.endianness {
            Endianness::Big => self.transport.send_all(&value.to_be_bytes()),
            Endianness::Little => self.transport.send_all(&value.to_le_bytes()),
        }
    }
}
