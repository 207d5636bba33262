//! PAL bitstream compiler
//!
//! Compiles a source of Boolean equations into the configuration bitstream of a small PAL device.
//! Each output equation is converted to the canonical text of its disjunctive normal form, the
//! term extractor ([`palc_dnf`]) recovers the product terms from that text and the bitstream
//! assembler ([`palc_bitstream`]) maps all terms onto the AND and OR matrices of the device.
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod format;

use std::fmt;

use palc_bitstream::{assemble, AssembleError, Bitstream, Device};
use palc_dnf::{extract_terms, ExtractError};
use palc_equations::{
    parse_source, Environment, EquationError, Expr, OutputError, SourceErrors,
};
use palc_lit::Term;

pub use format::Format;

/// An output equation on its way to the device.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CompiledOutput {
    /// The output name, `O<index>`.
    pub name: String,
    /// The output index.
    pub index: usize,
    /// The defining expression over device inputs.
    pub expr: Expr,
    /// Canonical DNF text of the expression.
    pub dnf: String,
    /// Product terms extracted from the DNF text.
    pub terms: Vec<Term>,
}

/// Result of compiling an equation source.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Compilation {
    /// The outputs in index order.
    pub outputs: Vec<CompiledOutput>,
    /// The device configuration.
    pub bitstream: Bitstream,
}

/// Error cases of [`compile`].
#[derive(Debug)]
pub enum CompileError {
    /// The source contains invalid lines.
    Source(SourceErrors),
    /// An equation could not be defined.
    Equation(EquationError),
    /// The output equations do not fit the device.
    Outputs(OutputError),
    /// The DNF text of an output could not be split into product terms.
    Extract {
        /// The output name.
        name: String,
        /// The DNF text.
        dnf: String,
        /// The underlying error.
        error: ExtractError,
    },
    /// The product terms could not be mapped onto the device.
    Assemble(AssembleError),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Source(err) => fmt::Display::fmt(err, f),
            CompileError::Equation(err) => fmt::Display::fmt(err, f),
            CompileError::Outputs(err) => fmt::Display::fmt(err, f),
            CompileError::Extract { name, dnf, error } => {
                write!(f, "cannot extract the terms of {name} from {dnf:?}: {error}")
            }
            CompileError::Assemble(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Source(err) => Some(err),
            CompileError::Equation(err) => Some(err),
            CompileError::Outputs(err) => Some(err),
            CompileError::Extract { error, .. } => Some(error),
            CompileError::Assemble(err) => Some(err),
        }
    }
}

impl From<SourceErrors> for CompileError {
    fn from(err: SourceErrors) -> Self {
        CompileError::Source(err)
    }
}

impl From<EquationError> for CompileError {
    fn from(err: EquationError) -> Self {
        CompileError::Equation(err)
    }
}

impl From<OutputError> for CompileError {
    fn from(err: OutputError) -> Self {
        CompileError::Outputs(err)
    }
}

impl From<AssembleError> for CompileError {
    fn from(err: AssembleError) -> Self {
        CompileError::Assemble(err)
    }
}

/// Compiles an equation source for the device `D`.
pub fn compile<D: Device>(source: &str) -> Result<Compilation, CompileError> {
    let geometry = D::GEOMETRY;

    let equations = parse_source(source)?;
    let mut env = Environment::new(geometry.inputs);
    env.define_all(&equations)?;

    let mut outputs = vec![];
    for output in env.outputs(geometry.outputs)? {
        let dnf = output.expr.to_dnf().to_string();
        log::debug!("{} = {dnf}", output.name);

        let terms = extract_terms(&dnf).map_err(|error| CompileError::Extract {
            name: output.name.clone(),
            dnf: dnf.clone(),
            error,
        })?;

        outputs.push(CompiledOutput {
            name: output.name,
            index: output.index,
            expr: output.expr,
            dnf,
            terms,
        });
    }

    let terms: Vec<&[Term]> = outputs.iter().map(|output| &output.terms[..]).collect();
    let bitstream = assemble::<D, _>(&terms)?;

    log::info!(
        "{}: {} output(s), {} of {} product terms, {} bits",
        D::NAME,
        outputs.len(),
        bitstream.pool_size(),
        geometry.terms,
        bitstream.len()
    );

    Ok(Compilation { outputs, bitstream })
}
