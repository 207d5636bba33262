//! Boolean expressions over device inputs.

use std::{fmt, ops};

use palc_lit::{Literal, Signal};

/// A Boolean expression over input literals.
///
/// References to other equations are substituted when parsing, so an expression only depends on
/// device inputs.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Expr {
    /// Constant `0` or `1`.
    Const(bool),
    /// An input literal.
    Lit(Literal),
    /// Negation.
    Not(Box<Expr>),
    /// Conjunction.
    And(Box<Expr>, Box<Expr>),
    /// Disjunction.
    Or(Box<Expr>, Box<Expr>),
    /// Exclusive or.
    Xor(Box<Expr>, Box<Expr>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(value) => write!(f, "{}", *value as u8),
            Expr::Lit(literal) => write!(f, "{literal}"),
            Expr::Not(inner) => write!(f, "~{inner}"),
            Expr::And(a, b) => write!(f, "({a} & {b})"),
            Expr::Or(a, b) => write!(f, "({a} | {b})"),
            Expr::Xor(a, b) => write!(f, "({a} ^ {b})"),
        }
    }
}

impl ops::Not for Expr {
    type Output = Self;

    fn not(self) -> Self::Output {
        Expr::Not(Box::new(self))
    }
}

impl Expr {
    /// The conjunction of `self` and `other`.
    pub fn and(self, other: Self) -> Self {
        Expr::And(Box::new(self), Box::new(other))
    }

    /// The disjunction of `self` and `other`.
    pub fn or(self, other: Self) -> Self {
        Expr::Or(Box::new(self), Box::new(other))
    }

    /// The exclusive or of `self` and `other`.
    pub fn xor(self, other: Self) -> Self {
        Expr::Xor(Box::new(self), Box::new(other))
    }

    /// Evaluates the expression given a value for each signal index.
    pub fn eval(&self, signal_value: &impl Fn(usize) -> bool) -> bool {
        match self {
            Expr::Const(value) => *value,
            Expr::Lit(literal) => literal.eval(signal_value(literal.index())),
            Expr::Not(inner) => !inner.eval(signal_value),
            Expr::And(a, b) => a.eval(signal_value) && b.eval(signal_value),
            Expr::Or(a, b) => a.eval(signal_value) || b.eval(signal_value),
            Expr::Xor(a, b) => a.eval(signal_value) ^ b.eval(signal_value),
        }
    }

    /// Returns the signals the expression refers to, sorted by index.
    pub fn support(&self) -> Vec<Signal> {
        let mut signals = vec![];
        self.collect_signals(&mut signals);
        signals.sort();
        signals.dedup();
        signals
    }

    fn collect_signals(&self, signals: &mut Vec<Signal>) {
        match self {
            Expr::Const(_) => {}
            Expr::Lit(literal) => signals.push(literal.signal()),
            Expr::Not(inner) => inner.collect_signals(signals),
            Expr::And(a, b) | Expr::Or(a, b) | Expr::Xor(a, b) => {
                a.collect_signals(signals);
                b.collect_signals(signals);
            }
        }
    }
}
