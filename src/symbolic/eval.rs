use crate::symbolic::expr::{cos, sin, Expr};
use nalgebra as na;
use std::collections::HashMap;

/// Errors raised when forcing a symbolic expression down to a number
#[derive(Debug, thiserror::Error)]
pub enum SymbolicError {
    #[error("Joint variable {0} has no bound value")]
    UnboundSymbol(String),
}

impl Expr {
    /// Evaluate to a number, looking joint variables up in `bindings`
    pub fn eval(&self, bindings: &HashMap<String, f64>) -> Result<f64, SymbolicError> {
        match self {
            Expr::Num(n) => Ok(*n),
            Expr::Symbol(name) => bindings
                .get(name)
                .copied()
                .ok_or_else(|| SymbolicError::UnboundSymbol(name.clone())),
            Expr::Add(a, b) => Ok(a.eval(bindings)? + b.eval(bindings)?),
            Expr::Mul(a, b) => Ok(a.eval(bindings)? * b.eval(bindings)?),
            Expr::Neg(e) => Ok(-e.eval(bindings)?),
            Expr::Sin(e) => Ok(e.eval(bindings)?.sin()),
            Expr::Cos(e) => Ok(e.eval(bindings)?.cos()),
        }
    }

    /// Replace one joint variable with an expression.
    ///
    /// The tree folds as it rebuilds, so substituting a number collapses
    /// everything that becomes numeric.
    pub fn subs(&self, name: &str, value: &Expr) -> Expr {
        match self {
            Expr::Num(_) => self.clone(),
            Expr::Symbol(s) => {
                if s == name {
                    value.clone()
                } else {
                    self.clone()
                }
            }
            Expr::Add(a, b) => a.subs(name, value) + b.subs(name, value),
            Expr::Mul(a, b) => a.subs(name, value) * b.subs(name, value),
            Expr::Neg(e) => -e.subs(name, value),
            Expr::Sin(e) => sin(e.subs(name, value)),
            Expr::Cos(e) => cos(e.subs(name, value)),
        }
    }
}

/// Evaluate every entry of a symbolic transform at the given joint values
pub fn evaluate_matrix(
    matrix: &na::Matrix4<Expr>,
    bindings: &HashMap<String, f64>,
) -> Result<na::Matrix4<f64>, SymbolicError> {
    let mut out = na::Matrix4::zeros();
    for row in 0..4 {
        for col in 0..4 {
            out[(row, col)] = matrix[(row, col)].eval(bindings)?;
        }
    }
    Ok(out)
}

/// Substitute one joint variable across every entry of a symbolic transform
pub fn substitute_matrix(
    matrix: &na::Matrix4<Expr>,
    name: &str,
    value: &Expr,
) -> na::Matrix4<Expr> {
    matrix.map(|entry| entry.subs(name, value))
}
