//! Truth tables of expressions for debug output.

use std::fmt;

use palc_lit::Signal;

use crate::expr::Expr;

/// Renders the truth table of an expression over its support signals.
///
/// The first column toggles fastest.
pub struct TruthTable<'a> {
    name: &'a str,
    expr: &'a Expr,
    support: Vec<Signal>,
}

impl<'a> TruthTable<'a> {
    /// Creates the table for the equation `name = expr`.
    pub fn new(name: &'a str, expr: &'a Expr) -> Self {
        Self {
            name,
            expr,
            support: expr.support(),
        }
    }

    /// Number of assignments, one per row.
    pub fn rows(&self) -> usize {
        1 << self.support.len()
    }
}

impl fmt::Display for TruthTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<String> = self.support.iter().map(|signal| signal.to_string()).collect();

        for header in &headers {
            write!(f, "{header} ")?;
        }
        writeln!(f, "| {}", self.name)?;

        for assignment in 0..self.rows() {
            let bit = |column: usize| assignment & (1 << column) != 0;
            for (column, header) in headers.iter().enumerate() {
                write!(f, "{:<width$} ", bit(column) as u8, width = header.len())?;
            }
            let value = self.expr.eval(&|index| {
                self.support
                    .iter()
                    .position(|signal| signal.index() == index)
                    .is_some_and(bit)
            });
            writeln!(f, "| {}", value as u8)?;
        }
        Ok(())
    }
}
