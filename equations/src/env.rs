//! Defined equations and selection of the device outputs.

use std::hash::BuildHasherDefault;

use hashbrown::HashMap;
use zwohash::ZwoHasher;

use crate::{
    error::{DefineError, EquationError, OutputError},
    expr::Expr,
    parse::{parse_expr, parse_index},
    source::Equation,
};

/// A defined output equation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Output {
    /// The output name, `O<index>`.
    pub name: String,
    /// The output index.
    pub index: usize,
    /// The defining expression over device inputs.
    pub expr: Expr,
}

/// The equations defined so far.
///
/// Each definition is stored with all references to earlier definitions substituted, so
/// definitions only depend on the device inputs.
#[derive(Clone, Debug)]
pub struct Environment {
    inputs: usize,
    defs: HashMap<String, Expr, BuildHasherDefault<ZwoHasher>>,
}

impl Environment {
    /// Creates an empty environment for a device with `inputs` input signals.
    pub fn new(inputs: usize) -> Self {
        Self {
            inputs,
            defs: Default::default(),
        }
    }

    /// Number of input signals.
    pub fn inputs(&self) -> usize {
        self.inputs
    }

    /// Returns the definition of `name`.
    pub fn get(&self, name: &str) -> Option<&Expr> {
        self.defs.get(name)
    }

    /// Number of defined names.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Returns `true` if nothing was defined.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Binds `name` to `expr` without validating either, returning the replaced definition.
    pub fn insert(&mut self, name: impl Into<String>, expr: Expr) -> Option<Expr> {
        self.defs.insert(name.into(), expr)
    }

    /// Parses and defines a single equation.
    pub fn define(&mut self, equation: &Equation) -> Result<(), EquationError> {
        self.define_inner(equation).map_err(|error| EquationError {
            name: equation.name.clone(),
            line: equation.line,
            error,
        })
    }

    fn define_inner(&mut self, equation: &Equation) -> Result<(), DefineError> {
        let name = equation.name.as_str();
        if name.starts_with('I') {
            return Err(DefineError::InputRedefined(name.to_string()));
        }
        if !name.starts_with(['O', 'T']) || parse_index(&name[1..]).is_none() {
            return Err(DefineError::InvalidName(name.to_string()));
        }

        let expr = parse_expr(&equation.expr, self)?;
        log::trace!("{name} = {expr}");

        if self.insert(name, expr).is_some() {
            log::warn!(
                "line {}: {name} is redefined, replacing the earlier definition",
                equation.line
            );
        }
        Ok(())
    }

    /// Defines equations in order, stopping at the first error.
    pub fn define_all<'a>(
        &mut self,
        equations: impl IntoIterator<Item = &'a Equation>,
    ) -> Result<(), EquationError> {
        for equation in equations {
            self.define(equation)?;
        }
        Ok(())
    }

    /// Returns the output equations in index order.
    ///
    /// The outputs must be numbered contiguously from `O0` and stay below `outputs`.
    pub fn outputs(&self, outputs: usize) -> Result<Vec<Output>, OutputError> {
        let mut found: Vec<Output> = self
            .defs
            .iter()
            .filter_map(|(name, expr)| {
                let index = parse_index(name.strip_prefix('O')?)?;
                Some(Output {
                    name: name.clone(),
                    index,
                    expr: expr.clone(),
                })
            })
            .collect();
        found.sort_by_key(|output| output.index);

        if found.is_empty() {
            return Err(OutputError::NoOutputs);
        }
        if let Some(output) = found.iter().find(|output| output.index >= outputs) {
            return Err(OutputError::OutOfRange {
                name: output.name.clone(),
                outputs,
            });
        }
        for (expected, output) in found.iter().enumerate() {
            if output.index != expected {
                return Err(OutputError::Gap {
                    missing: format!("O{expected}"),
                });
            }
        }

        log::debug!("{} output(s) defined", found.len());

        Ok(found)
    }
}
