//! Extraction of product terms from the canonical text of a DNF
//!
//! A Boolean expression in disjunctive normal form is rendered by the equation front end using two
//! n-ary operators, `And` and `Or`, nested at most two levels deep. For example
//!
//! ```text
//! I2
//! ~I0
//! And(I0, I1)
//! Or(And(I0, I2), I3)
//! ```
//!
//! [`extract_terms`] parses such a text and returns the product terms of the DNF in order of
//! appearance. Each `And` group becomes one term containing its literals, each bare literal a term
//! containing only that literal.
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod parser;

mod token;

pub use error::{ExtractError, MalformedDnf};
pub use parser::{Disjunct, Dnf};

use palc_lit::Term;

/// Returns the product terms of the DNF with the given canonical text.
pub fn extract_terms(text: &str) -> Result<Vec<Term>, ExtractError> {
    let terms = Dnf::parse(text)?.terms();
    log::trace!("extracted {} term(s) from {text:?}", terms.len());
    Ok(terms)
}

#[cfg(test)]
mod tests {
    use palc_lit::{Literal, Signal};
    use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

    use super::*;

    fn terms(text: &str) -> Vec<String> {
        extract_terms(text)
            .unwrap()
            .iter()
            .map(|term| term.to_string())
            .collect()
    }

    #[test]
    fn single_literal() {
        let extracted = extract_terms("I2").unwrap();
        assert_eq!(extracted, [Term::from(Signal::from_index(2).direct())]);

        let extracted = extract_terms("~I0").unwrap();
        assert_eq!(extracted, [Term::from(Signal::from_index(0).complement())]);
    }

    #[test]
    fn pure_and() {
        assert_eq!(terms("And(I0,I1)"), ["I0,I1"]);
        assert_eq!(terms("And(~I7, I3, I1)"), ["~I7,I3,I1"]);
    }

    #[test]
    fn or_of_mixed() {
        assert_eq!(terms("Or(And(I0,I2),I3)"), ["I0,I2", "I3"]);
        assert_eq!(
            terms("Or(And(I0, I2), And(I2, ~I3))"),
            ["I0,I2", "I2,~I3"]
        );
        assert_eq!(terms("Or(I1, I2)"), ["I1", "I2"]);
        assert_eq!(terms("Or(I1, And(~I4, I5), ~I6)"), ["I1", "~I4,I5", "~I6"]);
    }

    #[test]
    fn constants() {
        assert!(extract_terms("0").unwrap().is_empty());
        let extracted = extract_terms("1").unwrap();
        assert_eq!(extracted.len(), 1);
        assert!(extracted[0].is_empty());
    }

    #[test]
    fn errors_are_reported() {
        assert!(matches!(
            extract_terms("Or(I0, I1) Or(I2, I3)"),
            Err(ExtractError::Malformed(_))
        ));
        assert!(matches!(
            extract_terms("And(I0, Q1)"),
            Err(ExtractError::Literal(_))
        ));
    }

    #[test]
    fn oversized_index_is_rejected() {
        let text = format!("And(I{}, ~I{})", Literal::MAX_INDEX + 1, Literal::MAX_INDEX + 2);
        match extract_terms(&text) {
            Err(ExtractError::Literal(err)) => {
                assert_eq!(err.token, format!("I{}", Literal::MAX_INDEX + 1))
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    fn random_literal(rng: &mut SmallRng) -> Literal {
        Signal::from_index(rng.gen_range(0..12)).lit(palc_lit::Pol::complement_if(rng.gen()))
    }

    fn random_disjunct(rng: &mut SmallRng, text_literals: &mut Vec<Literal>) -> String {
        let len = rng.gen_range(1..5);
        let literals: Vec<Literal> = (0..len).map(|_| random_literal(rng)).collect();
        text_literals.extend(&literals);
        let rendered: Vec<String> = literals.iter().map(|lit| lit.to_string()).collect();
        if len == 1 && rng.gen() {
            rendered[0].clone()
        } else {
            let separator = [",", ", ", " , "].choose(rng).unwrap();
            format!("And({})", rendered.join(separator))
        }
    }

    #[test]
    fn literal_coverage() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let mut text_literals = vec![];
            let count = rng.gen_range(1..6);
            let disjuncts: Vec<String> = (0..count)
                .map(|_| random_disjunct(&mut rng, &mut text_literals))
                .collect();
            let text = if count == 1 && rng.gen() {
                disjuncts[0].clone()
            } else {
                format!("Or({})", disjuncts.join(", "))
            };

            let extracted = extract_terms(&text).unwrap();
            assert_eq!(extracted.len(), count, "{text}");

            let mut found: Vec<Literal> = extracted
                .iter()
                .flat_map(|term| term.literals().iter().copied())
                .collect();
            assert_eq!(found, text_literals, "{text}");

            found.sort();
            text_literals.sort();
            assert_eq!(found, text_literals);
        }
    }
}
