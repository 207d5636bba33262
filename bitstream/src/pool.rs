//! Deduplicated pool of product terms shared by all outputs.

use std::hash::BuildHasherDefault;

use indexmap::IndexSet;
use palc_lit::Term;
use zwohash::ZwoHasher;

use crate::error::AssembleError;

/// Insertion-ordered set of terms.
pub type TermSet = IndexSet<Term, BuildHasherDefault<ZwoHasher>>;

/// The distinct product terms of all outputs, in order of first occurrence.
///
/// A term's position in the pool is the device column it is assigned to. Terms used by several
/// outputs occupy a single column, which is how the OR matrix reuses product terms. Terms are
/// compared by identity of their literal sequence, see [`Term`].
#[derive(Clone, Default, Debug)]
pub struct TermPool {
    terms: TermSet,
}

impl TermPool {
    /// Collects the terms of all outputs in output order, keeping the first occurrence of each.
    pub fn build<'a>(outputs: impl IntoIterator<Item = &'a [Term]>) -> Self {
        let mut terms = TermSet::default();
        for output_terms in outputs {
            for term in output_terms {
                if !terms.contains(term) {
                    terms.insert(term.clone());
                }
            }
        }
        Self { terms }
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if no output uses any term.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over the terms in column order.
    pub fn iter(&self) -> impl Iterator<Item = &Term> + '_ {
        self.terms.iter()
    }

    /// Returns the term assigned to a column.
    pub fn term(&self, column: usize) -> Option<&Term> {
        self.terms.get_index(column)
    }

    /// Returns the column assigned to a term.
    pub fn column_of(&self, term: &Term) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// Fails with [`AssembleError::CapacityExceeded`] if there are more terms than columns.
    pub fn check_capacity(&self, capacity: usize) -> Result<(), AssembleError> {
        if self.len() > capacity {
            return Err(AssembleError::CapacityExceeded {
                pool_size: self.len(),
                capacity,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use palc_lit::Literal;

    use super::*;

    fn term(text: &str) -> Term {
        text.split(',').map(|token| token.parse::<Literal>().unwrap()).collect()
    }

    #[test]
    fn first_occurrence_wins() {
        let o0 = [term("I0,I1"), term("~I2")];
        let o1 = [term("I3"), term("I0,I1"), term("~I2"), term("I1,I0")];

        let pool = TermPool::build([&o0[..], &o1[..]]);
        let texts: Vec<String> = pool.iter().map(|term| term.to_string()).collect();
        assert_eq!(texts, ["I0,I1", "~I2", "I3", "I1,I0"]);
        assert_eq!(pool.column_of(&term("I3")), Some(2));
        assert_eq!(pool.term(1), Some(&term("~I2")));
        assert_eq!(pool.column_of(&term("I4")), None);
    }

    #[test]
    fn capacity() {
        let terms: Vec<Term> = (0..4).map(|i| term(&format!("I{i}"))).collect();
        let pool = TermPool::build([&terms[..]]);
        assert!(pool.check_capacity(4).is_ok());
        assert_eq!(
            pool.check_capacity(3),
            Err(AssembleError::CapacityExceeded {
                pool_size: 4,
                capacity: 3
            })
        );
    }
}
