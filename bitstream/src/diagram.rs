//! Human readable rendering of the AND and OR matrices.

use std::fmt;

use palc_lit::Literal;

use crate::assemble::Bitstream;

/// Displays a bitstream as the device's fuse map.
///
/// ```text
/// I0 -> 10000000000
/// ~I0-> 00000000000
/// ...
///       &&&&&&&&&&&
///       10000000000 -> O0
/// ```
pub struct Diagram<'a>(pub &'a Bitstream);

impl fmt::Display for Diagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bitstream = self.0;
        let geometry = bitstream.geometry();
        let and_matrix = bitstream.and_matrix();
        let or_matrix = bitstream.or_matrix();

        let names: Vec<String> = (0..geometry.and_rows())
            .map(|row| Literal::from_code(row).to_string())
            .collect();
        let width = names.iter().map(String::len).max().unwrap_or(0);
        let indent = " ".repeat(width + 3);

        for (row, name) in names.iter().enumerate() {
            writeln!(f, "{name:<width$}-> {}", and_matrix.row_string(row))?;
        }

        writeln!(f, "{indent}{}", "&".repeat(geometry.terms))?;

        for output in 0..geometry.outputs {
            writeln!(f, "{indent}{} -> O{output}", or_matrix.row_string(output))?;
        }

        Ok(())
    }
}
