//! Errors reported while extracting product terms.

use palc_lit::LiteralSyntaxError;

/// The text does not have the shape of a DNF with at most one `Or` level and `And` groups of
/// literals.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MalformedDnf {
    /// Byte offset of the offending fragment.
    pub offset: usize,
    /// The offending fragment, empty at the end of the text.
    pub found: String,
    /// Description of what would have been accepted instead.
    pub expected: &'static str,
}

impl std::fmt::Display for MalformedDnf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.found.is_empty() {
            write!(
                f,
                "malformed DNF: expected {}, found end of text at offset {}",
                self.expected, self.offset
            )
        } else {
            write!(
                f,
                "malformed DNF: expected {}, found {} at offset {}",
                self.expected, self.found, self.offset
            )
        }
    }
}

impl std::error::Error for MalformedDnf {}

/// Error cases for [`extract_terms`][crate::extract_terms].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ExtractError {
    /// The text does not follow the accepted DNF grammar.
    Malformed(MalformedDnf),
    /// A literal token could not be decoded.
    Literal(LiteralSyntaxError),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::Malformed(err) => std::fmt::Display::fmt(err, f),
            ExtractError::Literal(err) => std::fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::Malformed(err) => Some(err),
            ExtractError::Literal(err) => Some(err),
        }
    }
}

impl From<MalformedDnf> for ExtractError {
    fn from(err: MalformedDnf) -> Self {
        ExtractError::Malformed(err)
    }
}

impl From<LiteralSyntaxError> for ExtractError {
    fn from(err: LiteralSyntaxError) -> Self {
        ExtractError::Literal(err)
    }
}
