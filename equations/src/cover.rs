//! Sum-of-products covers and conversion of expressions to disjunctive normal form.

use std::fmt;

use palc_lit::{Literal, Term};

use crate::expr::Expr;

/// A conjunction of literals, sorted by code and free of duplicates and contradictions.
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct Cube {
    literals: Vec<Literal>,
}

impl From<Literal> for Cube {
    fn from(literal: Literal) -> Self {
        Self {
            literals: vec![literal],
        }
    }
}

impl Cube {
    /// The literals of this cube in code order.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Returns `true` for the cube without literals, which is constant `1`.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The conjunction of two cubes, or `None` if it contains a signal in both polarities.
    pub fn and(&self, other: &Cube) -> Option<Cube> {
        let mut literals = Vec::with_capacity(self.literals.len() + other.literals.len());
        literals.extend_from_slice(&self.literals);
        literals.extend_from_slice(&other.literals);
        literals.sort_unstable();
        literals.dedup();

        // Complementary literals have adjacent codes.
        if literals.windows(2).any(|pair| pair[0].signal() == pair[1].signal()) {
            return None;
        }
        Some(Cube { literals })
    }

    /// Returns `true` if every literal of `self` appears in `other`, i.e. `self` absorbs `other`.
    pub fn is_subset_of(&self, other: &Cube) -> bool {
        // Both are sorted, so a single merge pass suffices.
        let mut rest = other.literals.iter();
        self.literals
            .iter()
            .all(|literal| rest.by_ref().any(|candidate| candidate == literal))
    }

    /// The product term with the literals of this cube.
    pub fn term(&self) -> Term {
        self.literals.iter().copied().collect()
    }

    /// Evaluates the cube given a value for each signal index.
    pub fn eval(&self, signal_value: &impl Fn(usize) -> bool) -> bool {
        self.literals
            .iter()
            .all(|literal| literal.eval(signal_value(literal.index())))
    }
}

/// A disjunction of cubes without duplicates or absorbed cubes.
///
/// The empty cover is constant `0`, the cover holding only the empty cube is constant `1`.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Cover {
    cubes: Vec<Cube>,
}

impl Cover {
    /// Constant `0`.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Constant `1`.
    pub fn one() -> Self {
        Self {
            cubes: vec![Cube::default()],
        }
    }

    /// A single literal.
    pub fn literal(literal: Literal) -> Self {
        Self {
            cubes: vec![literal.into()],
        }
    }

    /// The cubes in the order they were derived.
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    /// Returns `true` for constant `0`.
    pub fn is_zero(&self) -> bool {
        self.cubes.is_empty()
    }

    /// Returns `true` for constant `1`.
    pub fn is_one(&self) -> bool {
        matches!(&self.cubes[..], [cube] if cube.is_empty())
    }

    /// The disjunction of two covers.
    pub fn or(mut self, other: Cover) -> Self {
        for cube in other.cubes {
            self.push(cube);
        }
        self
    }

    /// The conjunction of two covers, distributing `&` over `|`.
    pub fn and(&self, other: &Cover) -> Self {
        let mut result = Cover::zero();
        for a in &self.cubes {
            for b in &other.cubes {
                if let Some(cube) = a.and(b) {
                    result.push(cube);
                }
            }
        }
        result
    }

    /// Adds a cube unless an existing cube absorbs it, removing the cubes it absorbs.
    fn push(&mut self, cube: Cube) {
        if self.cubes.iter().any(|kept| kept.is_subset_of(&cube)) {
            return;
        }
        self.cubes.retain(|kept| !cube.is_subset_of(kept));
        self.cubes.push(cube);
    }

    /// One product term per cube.
    pub fn terms(&self) -> Vec<Term> {
        self.cubes.iter().map(Cube::term).collect()
    }

    /// Evaluates the cover given a value for each signal index.
    pub fn eval(&self, signal_value: &impl Fn(usize) -> bool) -> bool {
        self.cubes.iter().any(|cube| cube.eval(signal_value))
    }
}

fn write_cube(f: &mut fmt::Formatter<'_>, cube: &Cube) -> fmt::Result {
    match cube.literals() {
        [] => write!(f, "1"),
        [literal] => write!(f, "{literal}"),
        literals => {
            write!(f, "And(")?;
            for (index, literal) in literals.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{literal}")?;
            }
            write!(f, ")")
        }
    }
}

/// Renders the canonical DNF text, e.g. `Or(And(I0, ~I2), I3)`.
impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cubes[..] {
            [] => write!(f, "0"),
            [cube] => write_cube(f, cube),
            cubes => {
                write!(f, "Or(")?;
                for (index, cube) in cubes.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write_cube(f, cube)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl Expr {
    /// Converts the expression to disjunctive normal form.
    pub fn to_dnf(&self) -> Cover {
        self.cover(false)
    }

    /// Cover of the expression, or of its negation if `negate` is set.
    fn cover(&self, negate: bool) -> Cover {
        match self {
            Expr::Const(value) => {
                if *value ^ negate {
                    Cover::one()
                } else {
                    Cover::zero()
                }
            }
            Expr::Lit(literal) => Cover::literal(*literal ^ negate),
            Expr::Not(inner) => inner.cover(!negate),
            Expr::And(a, b) if !negate => a.cover(false).and(&b.cover(false)),
            Expr::And(a, b) => a.cover(true).or(b.cover(true)),
            Expr::Or(a, b) if !negate => a.cover(false).or(b.cover(false)),
            Expr::Or(a, b) => a.cover(true).and(&b.cover(true)),
            Expr::Xor(a, b) => {
                let (pos_a, neg_a) = (a.cover(false), a.cover(true));
                let (pos_b, neg_b) = (b.cover(false), b.cover(true));
                if negate {
                    pos_a.and(&pos_b).or(neg_a.and(&neg_b))
                } else {
                    pos_a.and(&neg_b).or(neg_a.and(&pos_b))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palc_lit::Signal;
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    fn input(index: usize) -> Expr {
        Expr::Lit(Signal::from_index(index).direct())
    }

    fn random_expr(rng: &mut SmallRng, inputs: usize, depth: usize) -> Expr {
        if depth == 0 || rng.gen_ratio(1, 4) {
            return match rng.gen_range(0..10) {
                0 => Expr::Const(rng.gen()),
                _ => Expr::Lit(Signal::from_index(rng.gen_range(0..inputs)) ^ rng.gen::<bool>()),
            };
        }
        let a = random_expr(rng, inputs, depth - 1);
        match rng.gen_range(0..4) {
            0 => !a,
            1 => a.and(random_expr(rng, inputs, depth - 1)),
            2 => a.or(random_expr(rng, inputs, depth - 1)),
            _ => a.xor(random_expr(rng, inputs, depth - 1)),
        }
    }

    #[test]
    fn canonical_text() {
        assert_eq!(Expr::Const(false).to_dnf().to_string(), "0");
        assert_eq!(Expr::Const(true).to_dnf().to_string(), "1");
        assert_eq!((!input(3)).to_dnf().to_string(), "~I3");
        assert_eq!(
            (!input(2)).and(input(0)).to_dnf().to_string(),
            "And(I0, ~I2)"
        );
        assert_eq!(
            input(0).and(input(2)).or(input(3)).to_dnf().to_string(),
            "Or(And(I0, I2), I3)"
        );
    }

    #[test]
    fn de_morgan() {
        let cover = (!input(0).and(input(1))).to_dnf();
        assert_eq!(cover.to_string(), "Or(~I0, ~I1)");
        let cover = (!input(0).or(input(1))).to_dnf();
        assert_eq!(cover.to_string(), "And(~I0, ~I1)");
    }

    #[test]
    fn xor_expansion() {
        assert_eq!(
            input(0).xor(input(1)).to_dnf().to_string(),
            "Or(And(I0, ~I1), And(~I0, I1))"
        );
        assert_eq!(
            (!input(0).xor(input(1))).to_dnf().to_string(),
            "Or(And(I0, I1), And(~I0, ~I1))"
        );
    }

    #[test]
    fn clean_ups() {
        // x & ~x
        assert!(input(1).and(!input(1)).to_dnf().is_zero());
        // x | ~x has no consensus step
        assert_eq!(input(1).or(!input(1)).to_dnf().to_string(), "Or(I1, ~I1)");
        // duplicate literals and cubes
        assert_eq!(
            input(1).and(input(1)).or(input(1)).to_dnf().to_string(),
            "I1"
        );
        // absorption in both directions
        assert_eq!(
            input(0).and(input(1)).or(input(0)).to_dnf().to_string(),
            "I0"
        );
        assert_eq!(
            input(0).or(input(0).and(input(1))).to_dnf().to_string(),
            "I0"
        );
        // constants
        assert!(input(0).or(Expr::Const(true)).to_dnf().is_one());
        assert_eq!(input(0).and(Expr::Const(true)).to_dnf().to_string(), "I0");
        assert!(input(0).and(Expr::Const(false)).to_dnf().is_zero());
    }

    #[test]
    fn cube_subsets() {
        let a: Cube = Signal::from_index(1).direct().into();
        let b = a.and(&Signal::from_index(4).complement().into()).unwrap();
        assert!(a.is_subset_of(&b));
        assert!(!b.is_subset_of(&a));
        assert!(Cube::default().is_subset_of(&a));
        assert!(a.and(&Signal::from_index(1).complement().into()).is_none());
    }

    #[test]
    fn random_equivalence() {
        let mut rng = SmallRng::seed_from_u64(3);
        let inputs = 5;

        for _ in 0..300 {
            let expr = random_expr(&mut rng, inputs, 4);
            let cover = expr.to_dnf();

            for assignment in 0..1usize << inputs {
                let value = |index: usize| assignment & (1 << index) != 0;
                assert_eq!(
                    expr.eval(&value),
                    cover.eval(&value),
                    "{expr} vs {cover} at {assignment:05b}"
                );
            }

            for (i, a) in cover.cubes().iter().enumerate() {
                assert!(a.literals().windows(2).all(|pair| pair[0] < pair[1]));
                for (j, b) in cover.cubes().iter().enumerate() {
                    assert!(i == j || !a.is_subset_of(b), "{cover} is not reduced");
                }
            }
        }
    }

    #[test]
    fn canonical_text_extracts_to_the_same_terms() {
        let mut rng = SmallRng::seed_from_u64(11);

        for _ in 0..200 {
            let cover = random_expr(&mut rng, 8, 4).to_dnf();
            let terms = palc_dnf::extract_terms(&cover.to_string()).unwrap();
            assert_eq!(terms, cover.terms(), "{cover}");
        }
    }
}
