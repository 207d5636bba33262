//! Equation front end
//!
//! Reads equation sources such as
//!
//! ```text
//! # two of the device outputs
//! T0 = I0 & ~I1
//! O0 = T0 | I2
//! O1 = T0 ^ I3
//! ```
//!
//! and turns each output equation into a sum of products. [`parse_source`] splits the source into
//! [`Equation`]s, an [`Environment`] parses their right hand sides, substituting earlier
//! definitions, and selects the device [`Output`]s. [`Expr::to_dnf`] converts an expression into a
//! [`Cover`] whose [`Display`][std::fmt::Display] implementation produces the canonical DNF text
//! consumed by the term extractor.
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod cover;
pub mod env;
pub mod error;
pub mod expr;
pub mod parse;
pub mod source;
pub mod truth_table;

pub use cover::{Cover, Cube};
pub use env::{Environment, Output};
pub use error::{DefineError, EquationError, ExprError, OutputError, SourceErrors};
pub use expr::Expr;
pub use parse::parse_expr;
pub use source::{parse_source, Equation};
pub use truth_table::TruthTable;
