use std::ops;

/// Selects whether an input signal is used directly or through its inverter.
///
/// Every input of the device drives two rows of the AND matrix: the signal itself and its
/// complement. Using a dedicated type instead of `bool` for this choice makes it explicit which of
/// the two rows a literal refers to and avoids parity errors when computing row indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Pol {
    /// The signal itself, written `I<k>`.
    #[default]
    Direct = 0,
    /// The inverted signal, written `~I<k>`.
    Complement = 1,
}

impl std::fmt::Debug for Pol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

impl std::fmt::Display for Pol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct => write!(f, "="),
            Self::Complement => write!(f, "~"),
        }
    }
}

impl Pol {
    /// Returns the complement polarity if the given condition is `true` and the direct polarity
    /// otherwise.
    #[inline(always)]
    pub fn complement_if(complement: bool) -> Self {
        if complement {
            Pol::Complement
        } else {
            Pol::Direct
        }
    }

    /// Returns `true` for [`Pol::Complement`].
    #[inline(always)]
    pub fn is_complement(self) -> bool {
        self == Pol::Complement
    }

    /// Returns `true` for [`Pol::Direct`].
    #[inline(always)]
    pub fn is_direct(self) -> bool {
        self == Pol::Direct
    }

    /// Offset of this polarity's row relative to the signal's direct row.
    #[inline(always)]
    pub fn row_offset(self) -> usize {
        self as usize
    }
}

impl ops::BitXor for Pol {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Pol::complement_if(self.is_complement() ^ rhs.is_complement())
    }
}

impl ops::BitXorAssign for Pol {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs
    }
}

impl ops::BitXor<bool> for Pol {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: bool) -> Self::Output {
        Pol::complement_if(self.is_complement() ^ rhs)
    }
}

impl ops::BitXor<Pol> for bool {
    type Output = bool;

    fn bitxor(self, rhs: Pol) -> Self::Output {
        self ^ rhs.is_complement()
    }
}

impl ops::Not for Pol {
    type Output = Self;

    fn not(self) -> Self::Output {
        self ^ Pol::Complement
    }
}
