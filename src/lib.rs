// RSP-BRIDGE: byte-level support for GDB Remote Serial Protocol bridges
// Copyright 2025 - Licensed under GPLv3

pub mod report;
pub mod serial;
pub mod wire;

// Re-export commonly used types
pub use report::{ProcessReporter, Reporter, Severity};
pub use serial::{ByteSink, Endianness, SerialConfig, SerialError, SerialPort, Transport};
pub use wire::{
    decode_hex, encode_hex, expect_char, expect_char_range, read_int, simple_read_int,
    CursorError, ErrorSignals, HexError, HostErrorSink, ParseCursor, ParsedInt,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
