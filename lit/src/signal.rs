use std::ops;

use super::{lit::Literal, pol::Pol};

/// Index of a device input signal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Signal(usize);

impl std::fmt::Debug for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "I{}", self.0)
    }
}

impl ops::BitXor<Pol> for Signal {
    type Output = Literal;

    fn bitxor(self, rhs: Pol) -> Self::Output {
        self.lit(rhs)
    }
}

impl ops::BitXor<bool> for Signal {
    type Output = Literal;

    fn bitxor(self, rhs: bool) -> Self::Output {
        self.lit(Pol::complement_if(rhs))
    }
}

impl Signal {
    /// Returns the signal with the given index.
    #[inline(always)]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the literal for this signal with the given polarity.
    #[inline(always)]
    pub fn lit(self, pol: Pol) -> Literal {
        Literal::new(self, pol)
    }

    /// Returns the direct literal of this signal.
    #[inline(always)]
    pub fn direct(self) -> Literal {
        self.lit(Pol::Direct)
    }

    /// Returns the complemented literal of this signal.
    #[inline(always)]
    pub fn complement(self) -> Literal {
        self.lit(Pol::Complement)
    }

    /// Returns the index of the signal.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}
