//! PAL configuration bitstream assembly
//!
//! The [`assemble`] function takes the product terms of each output equation, collects the
//! distinct terms into a [`TermPool`], assigns each pool entry a product-term column of the device
//! and encodes the AND and OR matrices into a [`Bitstream`].
//!
//! The device shape is a compile time constant provided by a type implementing [`Device`]. The
//! [`encode`] module converts a bitstream to the textual formats consumed by HDL sources and
//! programmers, and [`Diagram`] renders it for humans.
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod assemble;
pub mod bit_matrix;
pub mod device;
pub mod diagram;
pub mod encode;
pub mod error;
pub mod pool;

pub use assemble::{assemble, Bitstream};
pub use device::{Device, Geometry, Tt06Pal};
pub use diagram::Diagram;
pub use error::AssembleError;
pub use pool::TermPool;
