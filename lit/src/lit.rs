use std::{ops, str::FromStr};

use super::{pol::Pol, signal::Signal};

/// An input signal together with a [polarity][`Pol`].
///
/// The signal index and polarity are combined into a single number, called the
/// [`code`][`Self::code`]: the signal index shifted one bit to the left with the polarity in the
/// least significant bit. This is exactly the row of the literal in the device's AND matrix, where
/// row `2k` carries signal `k` and row `2k + 1` its complement.
///
/// Literals are written `I<k>` for the direct and `~I<k>` for the complemented signal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Literal {
    code: usize,
}

impl std::fmt::Debug for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_complement() {
            write!(f, "~")?;
        }
        write!(f, "{}", self.signal())
    }
}

impl Literal {
    /// Largest signal index whose literals have a code.
    pub const MAX_INDEX: usize = usize::MAX >> 1;

    /// Returns the literal of `signal` with polarity `pol`.
    ///
    /// The signal index must not exceed [`Self::MAX_INDEX`].
    #[inline(always)]
    pub fn new(signal: Signal, pol: Pol) -> Self {
        debug_assert!(signal.index() <= Self::MAX_INDEX);
        Self {
            code: (signal.index() << 1) | pol.row_offset(),
        }
    }

    /// Returns the literal for a given code.
    #[inline(always)]
    pub fn from_code(code: usize) -> Self {
        Self { code }
    }

    /// Returns the signal of the literal.
    #[inline(always)]
    pub fn signal(self) -> Signal {
        Signal::from_index(self.code >> 1)
    }

    /// Returns the polarity of the literal.
    #[inline(always)]
    pub fn pol(self) -> Pol {
        Pol::complement_if(self.code & 1 != 0)
    }

    /// Returns whether this literal uses the inverted signal.
    #[inline(always)]
    pub fn is_complement(self) -> bool {
        self.pol().is_complement()
    }

    /// Returns the index of the literal's signal.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.code >> 1
    }

    /// Returns the literal's code, which is also its AND matrix row.
    #[inline(always)]
    pub fn code(self) -> usize {
        self.code
    }

    /// Evaluates the literal given the value of its signal.
    #[inline(always)]
    pub fn eval(self, signal_value: bool) -> bool {
        signal_value ^ self.pol()
    }
}

impl ops::BitXor<Pol> for Literal {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Pol) -> Self::Output {
        Self::from_code(self.code ^ rhs.row_offset())
    }
}

impl ops::BitXor<bool> for Literal {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: bool) -> Self::Output {
        Self::from_code(self.code ^ (rhs as usize))
    }
}

impl ops::Not for Literal {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Self::from_code(self.code ^ 1)
    }
}

/// A token that does not have the `[~]I<index>` shape of a literal.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LiteralSyntaxError {
    /// The offending token.
    pub token: String,
}

impl std::fmt::Display for LiteralSyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid literal {:?}, expected I<index> or ~I<index>",
            self.token
        )
    }
}

impl std::error::Error for LiteralSyntaxError {}

impl FromStr for Literal {
    type Err = LiteralSyntaxError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let error = || LiteralSyntaxError {
            token: token.to_string(),
        };

        let (pol, rest) = match token.strip_prefix('~') {
            Some(rest) => (Pol::Complement, rest),
            None => (Pol::Direct, token),
        };
        let digits = rest.strip_prefix('I').ok_or_else(error)?;
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(error());
        }
        let index: usize = digits.parse().map_err(|_| error())?;
        if index > Literal::MAX_INDEX {
            return Err(error());
        }

        Ok(Signal::from_index(index).lit(pol))
    }
}
