use crate::utilities::grid_int::GridInt;

/// One-dimensional hierarchical basis function addressed by `(level, index)`.
pub trait Basis<L: GridInt = u32, I: GridInt = u32>
{
    fn eval(&self, level: L, index: I, x: f64) -> f64;
    fn eval_deriv(&self, level: L, index: I, x: f64) -> f64;
    fn degree(&self) -> usize;
    /// Integral of the basis function over [0,1].
    fn integral(&self, level: L, index: I) -> f64;
}

pub trait BasisSecondDerivative<L: GridInt = u32, I: GridInt = u32> : Basis<L, I>
{
    fn eval_second_deriv(&self, level: L, index: I, x: f64) -> f64;
}
