// Mock transport for testing without hardware

use super::comm::{Result, SerialError, Transport};

/// In-memory transport that records everything written and can be
/// primed to fail the next send.
#[derive(Debug, Default)]
pub struct MockTransport {
    written: Vec<u8>,
    sends: usize,
    fail_next: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next send_all report a port error.
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }

    /// Everything written so far, in order.
    pub fn written(&self) -> &[u8] {
        &self.written
    }

    /// Number of send_all calls that succeeded.
    pub fn sends(&self) -> usize {
        self.sends
    }

    /// Check if a specific byte sequence was written
    pub fn was_written(&self, expected: &[u8]) -> bool {
        self.written
            .windows(expected.len())
            .any(|window| window == expected)
    }
}

impl Transport for MockTransport {
    fn send_all(&mut self, buf: &[u8]) -> Result<()> {
        if self.fail_next {
            self.fail_next = false;
            return Err(SerialError::Port("mock transport failure".to_string()));
        }
        self.written.extend_from_slice(buf);
        self.sends += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_writes() {
        let mut transport = MockTransport::new();
        transport.send_all(b"+$OK#9a").unwrap();

        assert_eq!(transport.written(), b"+$OK#9a");
        assert_eq!(transport.sends(), 1);
        assert!(transport.was_written(b"$OK"));
        assert!(!transport.was_written(b"E01"));
    }

    #[test]
    fn test_mock_fail_next() {
        let mut transport = MockTransport::new();
        transport.fail_next();

        assert!(transport.send_all(b"-").is_err());
        assert_eq!(transport.sends(), 0);

        // Only the next send fails.
        transport.send_all(b"-").unwrap();
        assert_eq!(transport.written(), b"-");
    }
}
