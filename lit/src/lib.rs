//! Input signals, literals and product terms of a PAL device
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod lit;
pub mod pol;
pub mod signal;
pub mod term;

pub use lit::{Literal, LiteralSyntaxError};
pub use pol::Pol;
pub use signal::Signal;
pub use term::Term;
