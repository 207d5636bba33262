//! Lexer for the canonical DNF text.

use palc_lit::Literal;

use crate::error::{ExtractError, MalformedDnf};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    And,
    Or,
    Literal(Literal),
    Const(bool),
    Open,
    Close,
    Comma,
}

impl TokenKind {
    pub fn describe(&self) -> String {
        match self {
            TokenKind::And => "\"And\"".to_string(),
            TokenKind::Or => "\"Or\"".to_string(),
            TokenKind::Literal(literal) => format!("literal {literal}"),
            TokenKind::Const(value) => format!("constant {}", *value as u8),
            TokenKind::Open => "\"(\"".to_string(),
            TokenKind::Close => "\")\"".to_string(),
            TokenKind::Comma => "\",\"".to_string(),
        }
    }
}

/// A token together with the byte offset where it starts.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

/// Returns true for bytes that continue a word (keyword, literal or constant).
#[inline]
fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Splits `text` into tokens.
///
/// Words are classified as keywords (`And`, `Or`, in any case), constants (`0`, `1`) or literals.
/// A `~` is only valid directly in front of a literal and becomes part of it.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ExtractError> {
    let bytes = text.as_bytes();
    let mut tokens = vec![];
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        let kind = match bytes[pos] {
            byte if byte.is_ascii_whitespace() => {
                pos += 1;
                continue;
            }
            b'(' => {
                pos += 1;
                TokenKind::Open
            }
            b')' => {
                pos += 1;
                TokenKind::Close
            }
            b',' => {
                pos += 1;
                TokenKind::Comma
            }
            b'~' | b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' => {
                pos += 1;
                while pos < bytes.len() && is_word_byte(bytes[pos]) {
                    pos += 1;
                }
                classify_word(&text[start..pos])?
            }
            _ => {
                let found = text[start..].chars().next().unwrap_or_default();
                return Err(MalformedDnf {
                    offset: start,
                    found: found.to_string(),
                    expected: "a keyword, literal, bracket or comma",
                }
                .into());
            }
        };
        tokens.push(Token {
            kind,
            offset: start,
        });
    }

    log::trace!("tokens of {text:?}: {}", tokens.len());

    Ok(tokens)
}

fn classify_word(word: &str) -> Result<TokenKind, ExtractError> {
    if word.eq_ignore_ascii_case("and") {
        Ok(TokenKind::And)
    } else if word.eq_ignore_ascii_case("or") {
        Ok(TokenKind::Or)
    } else if word == "0" {
        Ok(TokenKind::Const(false))
    } else if word == "1" {
        Ok(TokenKind::Const(true))
    } else {
        Ok(TokenKind::Literal(word.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use palc_lit::Signal;

    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn tokenize_nested() {
        let i0 = Signal::from_index(0).direct();
        let n2 = Signal::from_index(2).complement();
        assert_eq!(
            kinds("Or(And(I0, ~I2), I0)"),
            [
                TokenKind::Or,
                TokenKind::Open,
                TokenKind::And,
                TokenKind::Open,
                TokenKind::Literal(i0),
                TokenKind::Comma,
                TokenKind::Literal(n2),
                TokenKind::Close,
                TokenKind::Comma,
                TokenKind::Literal(i0),
                TokenKind::Close,
            ]
        );
    }

    #[test]
    fn tokenize_offsets() {
        let tokens = tokenize("  And( I1 ,I2)").unwrap();
        let offsets: Vec<_> = tokens.iter().map(|token| token.offset).collect();
        assert_eq!(offsets, [2, 5, 7, 10, 11, 13]);
    }

    #[test]
    fn keywords_ignore_case() {
        assert_eq!(kinds("and OR"), [TokenKind::And, TokenKind::Or]);
        assert_eq!(kinds("0 1"), [TokenKind::Const(false), TokenKind::Const(true)]);
    }

    #[test]
    fn bad_word_is_literal_error() {
        let err = tokenize("And(I1, X3)").unwrap_err();
        assert!(matches!(err, ExtractError::Literal(ref e) if e.token == "X3"), "{err}");
    }

    #[test]
    fn stray_character_is_malformed() {
        let err = tokenize("And(I1 & I2)").unwrap_err();
        let ExtractError::Malformed(malformed) = err else {
            panic!("unexpected error {err}");
        };
        assert_eq!(malformed.offset, 7);
        assert_eq!(malformed.found, "&");
    }
}
