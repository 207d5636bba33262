//! Column assignment and encoding of the AND and OR matrices.

use palc_lit::Term;

use crate::{
    bit_matrix::BitMatrix,
    device::{Device, Geometry},
    error::AssembleError,
    pool::TermPool,
};

/// The complete configuration of a PAL device.
///
/// Logically this consists of two matrices. The AND matrix has two rows per input, the direct
/// signal at row `2k` and its complement at row `2k + 1`, and one column per product term. The OR
/// matrix connects product-term columns to outputs.
///
/// The flat bit sequence lists the AND matrix row by row, followed by one block of product-term
/// bits per output.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Bitstream {
    geometry: Geometry,
    and_matrix: BitMatrix,
    or_matrix: BitMatrix,
    pool_size: usize,
    configured_outputs: usize,
}

/// Assigns the product terms of all outputs to columns of the device `D` and encodes the result.
///
/// `outputs[o]` lists the product terms of output `o`. Terms shared between outputs are assigned a
/// single column, in order of first occurrence. Output slots beyond `outputs.len()` remain
/// unconnected.
pub fn assemble<D: Device, T: AsRef<[Term]>>(outputs: &[T]) -> Result<Bitstream, AssembleError> {
    let geometry = D::GEOMETRY;

    if outputs.len() > geometry.outputs {
        return Err(AssembleError::TooManyOutputs {
            configured: outputs.len(),
            outputs: geometry.outputs,
        });
    }

    let pool = TermPool::build(outputs.iter().map(|terms| terms.as_ref()));
    log::debug!(
        "{}: {} of {} product term columns used",
        D::NAME,
        pool.len(),
        geometry.terms
    );
    pool.check_capacity(geometry.terms)?;

    let mut and_matrix = BitMatrix::zeroed(geometry.and_rows(), geometry.terms);
    for (column, term) in pool.iter().enumerate() {
        log::trace!("column {column}: {term}");
        for &literal in term {
            if literal.index() >= geometry.inputs {
                return Err(AssembleError::SignalOutOfRange {
                    literal,
                    inputs: geometry.inputs,
                });
            }
            and_matrix.set_bit(literal.code(), column, true);
        }
    }

    let mut or_matrix = BitMatrix::zeroed(geometry.outputs, geometry.terms);
    for (output, terms) in outputs.iter().enumerate() {
        for term in terms.as_ref() {
            if let Some(column) = pool.column_of(term) {
                or_matrix.set_bit(output, column, true);
            }
        }
    }

    Ok(Bitstream {
        geometry,
        and_matrix,
        or_matrix,
        pool_size: pool.len(),
        configured_outputs: outputs.len(),
    })
}

impl Bitstream {
    /// Shape of the device this bitstream configures.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Number of product-term columns in use.
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Number of outputs that were configured.
    pub fn configured_outputs(&self) -> usize {
        self.configured_outputs
    }

    /// The AND matrix, one row per input literal and one column per product term.
    pub fn and_matrix(&self) -> &BitMatrix {
        &self.and_matrix
    }

    /// The OR matrix, one row per output and one column per product term.
    pub fn or_matrix(&self) -> &BitMatrix {
        &self.or_matrix
    }

    /// Number of bits in the flat encoding.
    pub fn len(&self) -> usize {
        self.geometry.bit_len()
    }

    /// Returns `true` for a device without any configuration bits.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the bit at the given offset of the flat encoding.
    pub fn bit(&self, index: usize) -> bool {
        assert!(index < self.len());
        let terms = self.geometry.terms;
        let and_bits = self.geometry.and_bits();
        if index < and_bits {
            self.and_matrix.bit(index / terms, index % terms)
        } else {
            let index = index - and_bits;
            self.or_matrix.bit(index / terms, index % terms)
        }
    }

    /// Iterates over the flat encoding, starting with bit 0.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.and_matrix.bits().chain(self.or_matrix.bits())
    }

    /// Renders the flat encoding as a string of `'0'` and `'1'` characters.
    pub fn to_bit_string(&self) -> String {
        self.bits().map(|bit| if bit { '1' } else { '0' }).collect()
    }
}
