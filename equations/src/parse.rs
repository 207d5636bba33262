//! Parser for the right hand side of equations.
//!
//! ```text
//! expr   := xor ("|" xor)*
//! xor    := and ("^" and)*
//! and    := unary ("&" unary)*
//! unary  := "~" unary | atom
//! atom   := "(" expr ")" | "0" | "1" | I<k> | O<k> | T<k>
//! ```

use palc_lit::Signal;

use crate::{env::Environment, error::ExprError, expr::Expr};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum TokenKind<'a> {
    Word(&'a str),
    Not,
    And,
    Or,
    Xor,
    Open,
    Close,
}

#[derive(Clone, Copy, Debug)]
struct Token<'a> {
    kind: TokenKind<'a>,
    offset: usize,
}

fn tokenize(text: &str) -> Result<Vec<Token<'_>>, ExprError> {
    let bytes = text.as_bytes();
    let mut tokens = vec![];
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        pos += 1;
        let kind = match bytes[start] {
            byte if byte.is_ascii_whitespace() => continue,
            b'~' => TokenKind::Not,
            b'&' => TokenKind::And,
            b'|' => TokenKind::Or,
            b'^' => TokenKind::Xor,
            b'(' => TokenKind::Open,
            b')' => TokenKind::Close,
            byte if byte.is_ascii_alphanumeric() => {
                while pos < bytes.len() && bytes[pos].is_ascii_alphanumeric() {
                    pos += 1;
                }
                TokenKind::Word(&text[start..pos])
            }
            _ => {
                return Err(ExprError::Unexpected {
                    offset: start,
                    found: text[start..].chars().next().unwrap_or_default().to_string(),
                    expected: "an operator, name or bracket",
                })
            }
        };
        tokens.push(Token {
            kind,
            offset: start,
        });
    }

    Ok(tokens)
}

/// Parses an expression, substituting references to equations defined in `env`.
pub fn parse_expr(text: &str, env: &Environment) -> Result<Expr, ExprError> {
    let tokens = tokenize(text)?;
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        end: text.len(),
        env,
    };
    let expr = parser.or()?;
    if parser.pos != tokens.len() {
        return Err(parser.unexpected("an operator or end of expression"));
    }
    Ok(expr)
}

struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    end: usize,
    env: &'t Environment,
}

impl<'a> Parser<'_, 'a> {
    fn peek(&self) -> Option<TokenKind<'a>> {
        self.tokens.get(self.pos).map(|token| token.kind)
    }

    fn eat(&mut self, kind: TokenKind<'_>) -> bool {
        let found = self.peek() == Some(kind);
        if found {
            self.pos += 1;
        }
        found
    }

    fn unexpected(&self, expected: &'static str) -> ExprError {
        match self.tokens.get(self.pos) {
            Some(token) => ExprError::Unexpected {
                offset: token.offset,
                found: match token.kind {
                    TokenKind::Word(word) => word.to_string(),
                    TokenKind::Not => "~".to_string(),
                    TokenKind::And => "&".to_string(),
                    TokenKind::Or => "|".to_string(),
                    TokenKind::Xor => "^".to_string(),
                    TokenKind::Open => "(".to_string(),
                    TokenKind::Close => ")".to_string(),
                },
                expected,
            },
            None => ExprError::Unexpected {
                offset: self.end,
                found: String::new(),
                expected,
            },
        }
    }

    fn or(&mut self) -> Result<Expr, ExprError> {
        let mut expr = self.xor()?;
        while self.eat(TokenKind::Or) {
            expr = expr.or(self.xor()?);
        }
        Ok(expr)
    }

    fn xor(&mut self) -> Result<Expr, ExprError> {
        let mut expr = self.and()?;
        while self.eat(TokenKind::Xor) {
            expr = expr.xor(self.and()?);
        }
        Ok(expr)
    }

    fn and(&mut self) -> Result<Expr, ExprError> {
        let mut expr = self.unary()?;
        while self.eat(TokenKind::And) {
            expr = expr.and(self.unary()?);
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, ExprError> {
        if self.eat(TokenKind::Not) {
            return Ok(!self.unary()?);
        }
        self.atom()
    }

    fn atom(&mut self) -> Result<Expr, ExprError> {
        match self.peek() {
            Some(TokenKind::Open) => {
                self.pos += 1;
                let expr = self.or()?;
                if !self.eat(TokenKind::Close) {
                    return Err(self.unexpected("\")\""));
                }
                Ok(expr)
            }
            Some(TokenKind::Word(word)) => {
                let expr = self.word(word)?;
                self.pos += 1;
                Ok(expr)
            }
            _ => Err(self.unexpected("a name, constant or \"(\"")),
        }
    }

    fn word(&self, word: &str) -> Result<Expr, ExprError> {
        match word {
            "0" => return Ok(Expr::Const(false)),
            "1" => return Ok(Expr::Const(true)),
            _ => {}
        }

        if let Some(digits) = word.strip_prefix('I') {
            if let Some(index) = parse_index(digits) {
                let inputs = self.env.inputs();
                if index >= inputs {
                    return Err(ExprError::UnknownInput { index, inputs });
                }
                return Ok(Expr::Lit(Signal::from_index(index).direct()));
            }
        } else if word.starts_with(['O', 'T']) && parse_index(&word[1..]).is_some() {
            return match self.env.get(word) {
                Some(expr) => Ok(expr.clone()),
                None => Err(ExprError::UndefinedName(word.to_string())),
            };
        }

        Err(self.unexpected("a name, constant or \"(\""))
    }
}

/// Parses the index part of a name, a digit sequence without leading zeros.
pub(crate) fn parse_index(digits: &str) -> Option<usize> {
    if digits.is_empty()
        || (digits.len() > 1 && digits.starts_with('0'))
        || !digits.bytes().all(|byte| byte.is_ascii_digit())
    {
        return None;
    }
    digits.parse().ok()
}
