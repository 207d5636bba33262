//! Errors reported by the bitstream assembler.

use palc_lit::Literal;

/// Error cases for [`assemble`][crate::assemble].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AssembleError {
    /// The deduplicated term pool does not fit into the device's product-term columns.
    CapacityExceeded {
        /// Number of distinct terms.
        pool_size: usize,
        /// Number of product-term columns of the device.
        capacity: usize,
    },
    /// A literal refers to an input the device does not have.
    SignalOutOfRange {
        /// The offending literal.
        literal: Literal,
        /// Number of inputs of the device.
        inputs: usize,
    },
    /// More outputs were configured than the device provides.
    TooManyOutputs {
        /// Number of configured outputs.
        configured: usize,
        /// Number of outputs of the device.
        outputs: usize,
    },
}

impl std::fmt::Display for AssembleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            AssembleError::CapacityExceeded {
                pool_size,
                capacity,
            } => write!(
                f,
                "{pool_size} distinct product terms exceed the {capacity} available columns \
                 by {}",
                pool_size.saturating_sub(capacity)
            ),
            AssembleError::SignalOutOfRange { literal, inputs } => write!(
                f,
                "literal {literal} refers to input {}, but the device has only {inputs} inputs",
                literal.index()
            ),
            AssembleError::TooManyOutputs {
                configured,
                outputs,
            } => write!(
                f,
                "{configured} outputs configured, but the device has only {outputs} outputs"
            ),
        }
    }
}

impl std::error::Error for AssembleError {}
