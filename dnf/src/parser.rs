//! Recursive-descent parser producing a typed DNF syntax tree.

use palc_lit::{Literal, Term};

use crate::{
    error::{ExtractError, MalformedDnf},
    token::{tokenize, Token, TokenKind},
};

/// One disjunct of a DNF: a single literal or an `And` group of literals.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Disjunct {
    /// A bare literal.
    Literal(Literal),
    /// `And(l0, l1, ...)`, with at least one literal.
    And(Vec<Literal>),
}

/// Syntax tree of a DNF in canonical text form.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Dnf {
    /// The constant `0` or `1`.
    Const(bool),
    /// A single disjunct without a surrounding `Or`.
    Disjunct(Disjunct),
    /// `Or(d0, d1, ...)`, with at least one disjunct.
    Or(Vec<Disjunct>),
}

impl Disjunct {
    /// Returns the product term of this disjunct.
    pub fn term(&self) -> Term {
        match self {
            Disjunct::Literal(literal) => Term::from(*literal),
            Disjunct::And(literals) => Term::from(literals.clone()),
        }
    }
}

impl Dnf {
    /// Parses the canonical text of a DNF.
    pub fn parse(text: &str) -> Result<Self, ExtractError> {
        let tokens = tokenize(text)?;
        let mut parser = Parser {
            tokens: &tokens,
            pos: 0,
            end: text.len(),
        };
        Ok(parser.dnf()?)
    }

    /// Returns the product terms in order of appearance.
    ///
    /// The constant `0` has no terms, the constant `1` is a single empty term.
    pub fn terms(&self) -> Vec<Term> {
        match self {
            Dnf::Const(false) => vec![],
            Dnf::Const(true) => vec![Term::default()],
            Dnf::Disjunct(disjunct) => vec![disjunct.term()],
            Dnf::Or(disjuncts) => disjuncts.iter().map(Disjunct::term).collect(),
        }
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    end: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|token| token.kind)
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn unexpected(&self, expected: &'static str) -> MalformedDnf {
        match self.tokens.get(self.pos) {
            Some(token) => MalformedDnf {
                offset: token.offset,
                found: token.kind.describe(),
                expected,
            },
            None => MalformedDnf {
                offset: self.end,
                found: String::new(),
                expected,
            },
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<(), MalformedDnf> {
        if self.peek() == Some(kind) {
            self.bump();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        let found = self.peek() == Some(kind);
        if found {
            self.bump();
        }
        found
    }

    fn dnf(&mut self) -> Result<Dnf, MalformedDnf> {
        let dnf = match self.peek() {
            Some(TokenKind::Const(value)) => {
                self.bump();
                Dnf::Const(value)
            }
            Some(TokenKind::Or) => {
                self.bump();
                self.expect(TokenKind::Open, "\"(\" after \"Or\"")?;
                let mut disjuncts = vec![self.disjunct()?];
                while self.eat(TokenKind::Comma) {
                    disjuncts.push(self.disjunct()?);
                }
                self.expect(TokenKind::Close, "\",\" or \")\" closing \"Or\"")?;
                Dnf::Or(disjuncts)
            }
            _ => Dnf::Disjunct(self.disjunct()?),
        };

        if self.pos != self.tokens.len() {
            return Err(self.unexpected("end of text"));
        }

        Ok(dnf)
    }

    fn disjunct(&mut self) -> Result<Disjunct, MalformedDnf> {
        match self.peek() {
            Some(TokenKind::Literal(literal)) => {
                self.bump();
                Ok(Disjunct::Literal(literal))
            }
            Some(TokenKind::And) => {
                self.bump();
                self.expect(TokenKind::Open, "\"(\" after \"And\"")?;
                let mut literals = vec![self.literal()?];
                while self.eat(TokenKind::Comma) {
                    literals.push(self.literal()?);
                }
                self.expect(TokenKind::Close, "\",\" or \")\" closing \"And\"")?;
                Ok(Disjunct::And(literals))
            }
            _ => Err(self.unexpected("a literal or \"And\" group")),
        }
    }

    fn literal(&mut self) -> Result<Literal, MalformedDnf> {
        match self.peek() {
            Some(TokenKind::Literal(literal)) => {
                self.bump();
                Ok(literal)
            }
            _ => Err(self.unexpected("a literal")),
        }
    }
}
