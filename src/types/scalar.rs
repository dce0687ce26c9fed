use nalgebra as na;
use num_traits::{One, Zero};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Scalar domain a transform can be built over.
///
/// Implemented by `f64` for plain numeric work and by
/// [`Expr`](crate::symbolic::Expr) for symbolic work, so the same
/// matrix-building code serves both. The operator bounds are exactly what
/// nalgebra's generic `Matrix4<T>` identity and multiplication require.
pub trait TransformScalar:
    na::Scalar
    + Zero
    + One
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Neg<Output = Self>
{
    fn cos(&self) -> Self;
    fn sin(&self) -> Self;
}

impl TransformScalar for f64 {
    fn cos(&self) -> f64 {
        f64::cos(*self)
    }

    fn sin(&self) -> f64 {
        f64::sin(*self)
    }
}
