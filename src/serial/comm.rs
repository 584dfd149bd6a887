// Serial transport collaborator: blocking I/O over the serialport crate

use std::io::Write;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SerialError {
    #[error("Serial port error: {0}")]
    Port(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SerialError>;

/// A byte channel trusted to deliver a whole buffer or report failure.
/// Senders built on top never retry partial writes themselves.
pub trait Transport {
    fn send_all(&mut self, buf: &[u8]) -> Result<()>;
}

/// Serial line configuration
#[derive(Debug, Clone)]
pub struct SerialConfig {
    /// Baud rate (e.g., 9600, 38400, 115200)
    pub baud_rate: u32,

    /// Data bits (5, 6, 7, 8)
    pub data_bits: serialport::DataBits,

    /// Stop bits
    pub stop_bits: serialport::StopBits,

    /// Parity
    pub parity: serialport::Parity,

    /// Flow control
    pub flow_control: serialport::FlowControl,

    /// Blocking read/write timeout
    pub timeout: Duration,
}

impl Default for SerialConfig {
    fn default() -> Self {
        // 115200 8N1, the usual line setup for debug bridges
        Self {
            baud_rate: 115_200,
            data_bits: serialport::DataBits::Eight,
            stop_bits: serialport::StopBits::One,
            parity: serialport::Parity::None,
            flow_control: serialport::FlowControl::None,
            timeout: Duration::from_secs(2),
        }
    }
}

impl SerialConfig {
    /// Create a new configuration with specified baud rate
    pub fn new(baud_rate: u32) -> Self {
        Self {
            baud_rate,
            ..Default::default()
        }
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set hardware flow control (RTS/CTS)
    pub fn with_hardware_flow(mut self) -> Self {
        self.flow_control = serialport::FlowControl::Hardware;
        self
    }
}

/// Blocking serial port wrapper
pub struct SerialPort {
    port: Box<dyn serialport::SerialPort>,
    config: SerialConfig,
    port_name: String,
}

impl SerialPort {
    /// Open a serial port with the given configuration
    pub fn open(port_name: &str, config: SerialConfig) -> Result<Self> {
        let mut port = serialport::new(port_name, config.baud_rate)
            .data_bits(config.data_bits)
            .stop_bits(config.stop_bits)
            .parity(config.parity)
            .flow_control(config.flow_control)
            .timeout(config.timeout)
            .open()
            .map_err(|e| SerialError::Port(e.to_string()))?;

        // Try to set DTR and RTS (common for USB-serial adapters)
        let _ = port.write_data_terminal_ready(true);
        let _ = port.write_request_to_send(true);

        tracing::debug!("Opened {} at {} baud", port_name, config.baud_rate);

        Ok(Self {
            port,
            config,
            port_name: port_name.to_string(),
        })
    }

    /// Get the port name
    pub fn port_name(&self) -> &str {
        &self.port_name
    }

    /// Get the configuration
    pub fn config(&self) -> &SerialConfig {
        &self.config
    }
}

impl Transport for SerialPort {
    fn send_all(&mut self, buf: &[u8]) -> Result<()> {
        self.port.write_all(buf)?;
        self.port.flush()?;
        Ok(())
    }
}

/// List available serial ports
pub fn list_ports() -> Result<Vec<String>> {
    serialport::available_ports()
        .map_err(|e| SerialError::Port(e.to_string()))?
        .into_iter()
        .map(|p| Ok(p.port_name))
        .collect()
}
