//! Re-encodings of a [`Bitstream`] for HDL sources and device programmers.

use std::fmt::Write;

use crate::assemble::Bitstream;

/// Renders the bitstream as a sized Verilog binary literal, bit 0 first.
pub fn verilog_literal(bitstream: &Bitstream) -> String {
    format!("{}'b{}", bitstream.len(), bitstream.to_bit_string())
}

/// Packs the bitstream into bytes, most significant bit first.
///
/// Bit 0 of the bitstream becomes the most significant bit of byte 0. When the length is not a
/// multiple of eight, the low bits of the final byte are zero.
pub fn to_bytes(bitstream: &Bitstream) -> Vec<u8> {
    let mut bytes = vec![0u8; bitstream.len().div_ceil(8)];
    for (index, bit) in bitstream.bits().enumerate() {
        if bit {
            bytes[index / 8] |= 0x80 >> (index % 8);
        }
    }
    bytes
}

/// Renders bytes as upper-case hex digits without separators.
pub fn hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 * bytes.len());
    for byte in bytes {
        // Writing to a `String` cannot fail.
        let _ = write!(out, "{byte:02X}");
    }
    out
}

fn byte_literals(bytes: &[u8]) -> impl Iterator<Item = String> + '_ {
    bytes.iter().map(|byte| format!("0x{byte:02X}"))
}

/// Renders bytes as an Arduino sketch array stored in program memory.
pub fn arduino_array(bytes: &[u8]) -> String {
    let literals: Vec<String> = byte_literals(bytes).collect();
    format!(
        "const uint8_t bitstream[] PROGMEM = {{{}}};",
        literals.join(", ")
    )
}

/// Renders bytes as a Python list with eight bytes per line.
///
/// Every byte is followed by `", "`, so lines end in a trailing space. After each eighth byte a
/// continuation line starts, which stays blank when no bytes remain.
pub fn python_array(bytes: &[u8]) -> String {
    const CONTINUATION_PREFIX: &str = "               ";

    let mut out = String::from("    PROGMEM = [");
    for (index, byte) in bytes.iter().enumerate() {
        // Writing to a `String` cannot fail.
        let _ = write!(out, "0x{byte:02X}, ");
        if index % 8 == 7 {
            out.push('\n');
            out.push_str(CONTINUATION_PREFIX);
        }
    }
    out.push('\n');
    out.push_str("              ]");
    out
}
