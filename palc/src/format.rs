//! Output formats of the command line tool.

use palc_bitstream::{encode, Bitstream};

/// A textual rendering of a bitstream.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, clap::ValueEnum)]
pub enum Format {
    /// Verilog literal, Arduino array and Python array, each under a heading.
    #[default]
    All,
    /// Sized Verilog binary literal.
    Verilog,
    /// Arduino sketch array.
    Arduino,
    /// Python list of bytes.
    Python,
    /// Packed bytes as hex digits.
    Hex,
}

impl Format {
    /// Renders `bitstream` in this format.
    pub fn render(self, bitstream: &Bitstream) -> String {
        let bytes = encode::to_bytes(bitstream);
        match self {
            Format::All => format!(
                "Bitstream for verilog is:\n{}\n\nBitstream for Arduino sketch\n{}\n\nPython array:\n{}",
                encode::verilog_literal(bitstream),
                encode::arduino_array(&bytes),
                encode::python_array(&bytes),
            ),
            Format::Verilog => encode::verilog_literal(bitstream),
            Format::Arduino => encode::arduino_array(&bytes),
            Format::Python => encode::python_array(&bytes),
            Format::Hex => encode::hex_string(&bytes),
        }
    }
}
