//! Errors of the equation front end.

use std::fmt;

/// A source line that is not a well formed, safe equation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct InvalidLine {
    /// 1-based line number.
    pub line: usize,
    /// The line as it appears in the source.
    pub text: String,
    /// Why the line was rejected.
    pub reason: &'static str,
}

/// All invalid lines of an equation source.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SourceErrors {
    /// The rejected lines in source order.
    pub lines: Vec<InvalidLine>,
}

impl fmt::Display for SourceErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, invalid) in self.lines.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "invalid equation in line {}: {:?} ({})",
                invalid.line, invalid.text, invalid.reason
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for SourceErrors {}

/// Error cases for parsing the right hand side of an equation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ExprError {
    /// The expression does not follow the grammar.
    Unexpected {
        /// Byte offset within the expression.
        offset: usize,
        /// The offending fragment, empty at the end of the expression.
        found: String,
        /// Description of what would have been accepted instead.
        expected: &'static str,
    },
    /// An input signal the device does not have.
    UnknownInput {
        /// The referenced input index.
        index: usize,
        /// Number of inputs of the device.
        inputs: usize,
    },
    /// A reference to an equation that was not defined before.
    UndefinedName(String),
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::Unexpected {
                offset,
                found,
                expected,
            } if found.is_empty() => {
                write!(f, "expected {expected}, found end of expression at offset {offset}")
            }
            ExprError::Unexpected {
                offset,
                found,
                expected,
            } => write!(f, "expected {expected}, found {found:?} at offset {offset}"),
            ExprError::UnknownInput { index, inputs } => {
                write!(f, "input I{index} does not exist, the device has {inputs} inputs")
            }
            ExprError::UndefinedName(name) => write!(f, "{name} is used before it is defined"),
        }
    }
}

impl std::error::Error for ExprError {}

/// Error cases for defining an equation in an [`Environment`][crate::Environment].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DefineError {
    /// The left hand side is not an output (`O<k>`) or temporary (`T<k>`) name.
    InvalidName(String),
    /// The left hand side names an input signal.
    InputRedefined(String),
    /// The right hand side could not be parsed.
    Expr(ExprError),
}

impl fmt::Display for DefineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefineError::InvalidName(name) => {
                write!(f, "{name:?} is not a valid equation name, expected O<k> or T<k>")
            }
            DefineError::InputRedefined(name) => write!(f, "input {name} cannot be assigned"),
            DefineError::Expr(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for DefineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DefineError::Expr(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ExprError> for DefineError {
    fn from(err: ExprError) -> Self {
        DefineError::Expr(err)
    }
}

/// Error cases for selecting the device outputs among the defined equations.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum OutputError {
    /// No output equation was defined.
    NoOutputs,
    /// An output index beyond the device's outputs.
    OutOfRange {
        /// The output name.
        name: String,
        /// Number of outputs of the device.
        outputs: usize,
    },
    /// Outputs must be numbered contiguously from `O0`.
    Gap {
        /// Name of the first missing output.
        missing: String,
    },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::NoOutputs => write!(f, "no output equations (O0, O1, ...) defined"),
            OutputError::OutOfRange { name, outputs } => {
                write!(f, "output {name} does not exist, the device has {outputs} outputs")
            }
            OutputError::Gap { missing } => write!(
                f,
                "output {missing} is not defined, outputs must be numbered contiguously from O0"
            ),
        }
    }
}

impl std::error::Error for OutputError {}

/// A [`DefineError`] together with the equation that caused it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EquationError {
    /// Left hand side of the equation.
    pub name: String,
    /// 1-based source line of the equation.
    pub line: usize,
    /// The underlying error.
    pub error: DefineError,
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "in equation {} (line {}): {}", self.name, self.line, self.error)
    }
}

impl std::error::Error for EquationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
