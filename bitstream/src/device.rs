//! Device geometry.

/// Shape of a PAL device.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Geometry {
    /// Number of input signals (N). Each drives a direct and a complement row.
    pub inputs: usize,
    /// Number of product-term columns (P).
    pub terms: usize,
    /// Number of outputs (M).
    pub outputs: usize,
}

impl Geometry {
    /// Number of rows of the AND matrix, two per input.
    pub const fn and_rows(&self) -> usize {
        2 * self.inputs
    }

    /// Number of bits in the AND matrix section of the bitstream.
    pub const fn and_bits(&self) -> usize {
        self.and_rows() * self.terms
    }

    /// Number of bits in the OR matrix section of the bitstream.
    pub const fn or_bits(&self) -> usize {
        self.terms * self.outputs
    }

    /// Total length of the configuration bitstream.
    pub const fn bit_len(&self) -> usize {
        self.and_bits() + self.or_bits()
    }

    /// Bitstream offset of the AND matrix bit for the given row and term column.
    pub const fn and_offset(&self, row: usize, term: usize) -> usize {
        self.terms * row + term
    }

    /// Bitstream offset of the OR matrix bit connecting a term column to an output.
    pub const fn or_offset(&self, output: usize, term: usize) -> usize {
        self.and_bits() + self.terms * output + term
    }
}

/// A PAL device with a fixed shape.
pub trait Device {
    /// Name used in log messages.
    const NAME: &'static str;
    /// The shape of the device.
    const GEOMETRY: Geometry;
}

/// The TinyTapeout 06 PAL: 8 inputs, 11 product terms and 5 outputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tt06Pal;

impl Device for Tt06Pal {
    const NAME: &'static str = "tt06-pal";
    const GEOMETRY: Geometry = Geometry {
        inputs: 8,
        terms: 11,
        outputs: 5,
    };
}
