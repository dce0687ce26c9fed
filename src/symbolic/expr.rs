use crate::types::scalar::TransformScalar;
use num_traits::{One, Zero};
use std::collections::BTreeSet;
use std::fmt;
use std::mem;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A scalar expression: a concrete number, a named joint variable, or an
/// algebraic combination of the two.
///
/// Expressions fold as they are built: adding zero, multiplying by one, and
/// trig of a plain number all collapse immediately, so a transform built
/// from purely numeric expressions comes out fully evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f64),
    Symbol(String),
    Add(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
    Sin(Box<Expr>),
    Cos(Box<Expr>),
}

/// Create a named joint variable
pub fn symbol(name: impl Into<String>) -> Expr {
    Expr::Symbol(name.into())
}

/// Sine of an expression (numeric arguments evaluate immediately)
pub fn sin(expr: impl Into<Expr>) -> Expr {
    match expr.into() {
        Expr::Num(n) => Expr::Num(n.sin()),
        e => Expr::Sin(Box::new(e)),
    }
}

/// Cosine of an expression (numeric arguments evaluate immediately)
pub fn cos(expr: impl Into<Expr>) -> Expr {
    match expr.into() {
        Expr::Num(n) => Expr::Num(n.cos()),
        e => Expr::Cos(Box::new(e)),
    }
}

fn sum(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs, rhs) {
        (Expr::Num(a), Expr::Num(b)) => Expr::Num(a + b),
        (Expr::Num(z), e) if z == 0.0 => e,
        (e, Expr::Num(z)) if z == 0.0 => e,
        (a, b) => Expr::Add(Box::new(a), Box::new(b)),
    }
}

fn product(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs, rhs) {
        (Expr::Num(a), Expr::Num(b)) => Expr::Num(a * b),
        (Expr::Num(z), _) | (_, Expr::Num(z)) if z == 0.0 => Expr::Num(0.0),
        (Expr::Num(o), e) if o == 1.0 => e,
        (e, Expr::Num(o)) if o == 1.0 => e,
        (a, b) => Expr::Mul(Box::new(a), Box::new(b)),
    }
}

fn negate(expr: Expr) -> Expr {
    match expr {
        Expr::Num(n) => Expr::Num(-n),
        Expr::Neg(inner) => *inner,
        e => Expr::Neg(Box::new(e)),
    }
}

impl Expr {
    /// The numeric value, if this expression is a plain number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Expr::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// Names of all joint variables appearing in this expression
    pub fn symbols(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_symbols(&mut names);
        names
    }

    fn collect_symbols(&self, names: &mut BTreeSet<String>) {
        match self {
            Expr::Num(_) => {}
            Expr::Symbol(name) => {
                names.insert(name.clone());
            }
            Expr::Add(a, b) | Expr::Mul(a, b) => {
                a.collect_symbols(names);
                b.collect_symbols(names);
            }
            Expr::Neg(e) | Expr::Sin(e) | Expr::Cos(e) => e.collect_symbols(names),
        }
    }

    /// Re-run the folding rules bottom-up.
    ///
    /// Expressions built through the operators are already folded on the
    /// way in; this exists for trees assembled by hand.
    pub fn simplify(&self) -> Expr {
        match self {
            Expr::Num(_) | Expr::Symbol(_) => self.clone(),
            Expr::Add(a, b) => sum(a.simplify(), b.simplify()),
            Expr::Mul(a, b) => product(a.simplify(), b.simplify()),
            Expr::Neg(e) => negate(e.simplify()),
            Expr::Sin(e) => sin(e.simplify()),
            Expr::Cos(e) => cos(e.simplify()),
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Num(value)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Num(value as f64)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Num(value as f64)
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        sum(self, rhs)
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        sum(self, negate(rhs))
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        product(self, rhs)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        negate(self)
    }
}

// The *Assign forms are what nalgebra's generic matrix multiplication
// accumulates through.
impl AddAssign for Expr {
    fn add_assign(&mut self, rhs: Expr) {
        let lhs = mem::replace(self, Expr::Num(0.0));
        *self = sum(lhs, rhs);
    }
}

impl SubAssign for Expr {
    fn sub_assign(&mut self, rhs: Expr) {
        let lhs = mem::replace(self, Expr::Num(0.0));
        *self = sum(lhs, negate(rhs));
    }
}

impl MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Expr) {
        let lhs = mem::replace(self, Expr::Num(0.0));
        *self = product(lhs, rhs);
    }
}

impl Zero for Expr {
    fn zero() -> Expr {
        Expr::Num(0.0)
    }

    fn is_zero(&self) -> bool {
        matches!(self, Expr::Num(n) if *n == 0.0)
    }
}

impl One for Expr {
    fn one() -> Expr {
        Expr::Num(1.0)
    }

    fn is_one(&self) -> bool {
        matches!(self, Expr::Num(n) if *n == 1.0)
    }
}

impl TransformScalar for Expr {
    fn cos(&self) -> Expr {
        cos(self.clone())
    }

    fn sin(&self) -> Expr {
        sin(self.clone())
    }
}

// Multiplication factors need parentheses around looser-binding terms
fn write_factor(expr: &Expr, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expr {
        Expr::Add(_, _) => write!(f, "({})", expr),
        _ => write!(f, "{}", expr),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(n) => {
                if n.fract() == 0.0 && n.abs() < 1e12 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Expr::Symbol(name) => f.write_str(name),
            Expr::Add(a, b) => match b.as_ref() {
                Expr::Neg(inner) => {
                    write!(f, "{} - ", a)?;
                    write_factor(inner, f)
                }
                Expr::Num(n) if *n < 0.0 => write!(f, "{} - {}", a, Expr::Num(-n)),
                _ => write!(f, "{} + {}", a, b),
            },
            Expr::Mul(a, b) => {
                write_factor(a, f)?;
                write!(f, " * ")?;
                write_factor(b, f)
            }
            Expr::Neg(e) => match e.as_ref() {
                Expr::Add(_, _) => write!(f, "-({})", e),
                _ => write!(f, "-{}", e),
            },
            Expr::Sin(e) => write!(f, "sin({})", e),
            Expr::Cos(e) => write!(f, "cos({})", e),
        }
    }
}
