//! Reading equation source text.
//!
//! A source consists of lines of the form `name = expression`. Everything after a `#` is a
//! comment. Both sides may only use the characters of the equation language, `T`, `I`, `O`,
//! digits, whitespace and the operators `^ & | ~ ( )`.

use crate::error::{InvalidLine, SourceErrors};

/// One `name = expression` line of an equation source.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Equation {
    /// The left hand side.
    pub name: String,
    /// The right hand side, not yet parsed.
    pub expr: String,
    /// 1-based line number.
    pub line: usize,
}

/// Returns `true` if `text` only uses characters of the equation language.
pub fn is_safe(text: &str) -> bool {
    !text.is_empty()
        && text.chars().all(|c| {
            c.is_whitespace() || c.is_ascii_digit() || "TIO^&|~()".contains(c)
        })
}

/// Splits a source into equations.
///
/// Every invalid line is reported. When there is at least one, no equations are returned.
pub fn parse_source(text: &str) -> Result<Vec<Equation>, SourceErrors> {
    let mut equations = vec![];
    let mut invalid = vec![];

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let reject = |reason| InvalidLine {
            line,
            text: raw.to_string(),
            reason,
        };

        let content = match raw.split_once('#') {
            Some((content, _comment)) => content,
            None => raw,
        }
        .trim();
        if content.is_empty() {
            continue;
        }

        let Some((name, expr)) = content.split_once('=') else {
            invalid.push(reject("missing '='"));
            continue;
        };
        let (name, expr) = (name.trim(), expr.trim());

        if name.is_empty() || expr.is_empty() {
            invalid.push(reject("empty side"));
        } else if !is_safe(name) || !is_safe(expr) {
            invalid.push(reject("unsupported characters"));
        } else {
            equations.push(Equation {
                name: name.to_string(),
                expr: expr.to_string(),
                line,
            });
        }
    }

    if !invalid.is_empty() {
        return Err(SourceErrors { lines: invalid });
    }

    log::debug!("read {} equation(s)", equations.len());

    Ok(equations)
}
