use super::lit::Literal;

/// A product term: the conjunction of a sequence of literals.
///
/// The literal order is part of a term's identity. Two terms are equal exactly when their textual
/// renderings, the comma-joined literal lists, are identical, so `I1,I2` and `I2,I1` are distinct
/// terms even though they compute the same function.
///
/// The empty term is the constant true product and renders as `1`.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Term {
    literals: Vec<Literal>,
}

impl std::fmt::Debug for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.literals).finish()
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some((first, rest)) = self.literals.split_first() else {
            return write!(f, "1");
        };
        write!(f, "{first}")?;
        for literal in rest {
            write!(f, ",{literal}")?;
        }
        Ok(())
    }
}

impl FromIterator<Literal> for Term {
    fn from_iter<T: IntoIterator<Item = Literal>>(iter: T) -> Self {
        Self {
            literals: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Literal>> for Term {
    fn from(literals: Vec<Literal>) -> Self {
        Self { literals }
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Self {
            literals: vec![literal],
        }
    }
}

impl<'a> IntoIterator for &'a Term {
    type Item = &'a Literal;
    type IntoIter = std::slice::Iter<'a, Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.literals.iter()
    }
}

impl Term {
    /// Returns the literals of this term in order.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Returns the number of literals.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Returns `true` for the constant true term without literals.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Evaluates the product given a value for each signal index.
    pub fn eval(&self, signal_value: impl Fn(usize) -> bool) -> bool {
        self.literals
            .iter()
            .all(|literal| literal.eval(signal_value(literal.index())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Signal;

    fn term(text: &[&str]) -> Term {
        text.iter().map(|token| token.parse::<Literal>().unwrap()).collect()
    }

    #[test]
    fn display_is_comma_joined() {
        assert_eq!(term(&["I0", "~I3", "I7"]).to_string(), "I0,~I3,I7");
        assert_eq!(term(&["~I5"]).to_string(), "~I5");
        assert_eq!(Term::default().to_string(), "1");
    }

    #[test]
    fn identity_is_order_sensitive() {
        assert_eq!(term(&["I1", "I2"]), term(&["I1", "I2"]));
        assert_ne!(term(&["I1", "I2"]), term(&["I2", "I1"]));
    }

    #[test]
    fn eval_is_conjunction() {
        let t = term(&["I0", "~I1"]);
        assert!(t.eval(|index| index == 0));
        assert!(!t.eval(|_| true));
        assert!(Term::default().eval(|_| false));
        assert!(Term::from(Signal::from_index(4).direct()).eval(|index| index == 4));
    }
}
