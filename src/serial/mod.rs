// Serial transport layer for host-facing replies

pub mod comm;
pub mod sink;

#[cfg(test)]
pub mod mock;

pub use comm::{list_ports, SerialConfig, SerialError, SerialPort, Transport};
pub use sink::{ByteSink, Endianness};
