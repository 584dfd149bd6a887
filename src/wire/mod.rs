// Wire-format primitives: hex payload codec, radix fields, parse cursor

pub mod cursor;
pub mod hex;
pub mod int;

pub use cursor::{
    expect_char, expect_char_range, CursorError, ErrorSignals, HostErrorSink, ParseCursor,
};
pub use hex::{decode_hex, encode_hex, HexError};
pub use int::{read_int, simple_read_int, ParsedInt};
