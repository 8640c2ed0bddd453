use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::SGError;
use crate::one_dimensional_nodes::{GaussLegendre, OneDimensionalNodes, QuadratureRule};
use crate::tables::clenshaw_curtis_table::{AbscissaProvider, ClenshawCurtisTable};
use crate::utilities::grid_int::{index_i64, level_u32, GridInt};

use super::base::{Basis, BasisSecondDerivative};
use super::knots::KnotSequence;
use super::nonuniform_bspline::{Derivative, NonUniformBSpline};

/// Map a requested degree to the nearest valid one: 0 becomes 1, even degrees are lowered by one.
#[inline]
pub fn normalize_degree(degree: usize) -> usize
{
    if degree == 0
    {
        1
    }
    else if degree % 2 == 0
    {
        degree - 1
    }
    else
    {
        degree
    }
}

/// Persisted configuration of a [`BsplineClenshawCurtisBasis`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BsplineClenshawCurtisParameters
{
    pub degree: usize,
}

/// Hierarchical B-spline basis of odd degree whose knots are Clenshaw-Curtis points.
///
/// At level 1 the basis is the constant function. For `level >= 2` the function at `index` is
/// the non-uniform B-spline centered on grid point `index`, except for `index == 1` and
/// `index == 2^level - 1`, where several B-splines reaching past the boundary are blended
/// into a single modified function.
///
/// Knot vectors are built per call, so a basis can be shared between threads freely.
#[derive(Clone, Debug)]
pub struct BsplineClenshawCurtisBasis<P: AbscissaProvider = ClenshawCurtisTable>
{
    degree: usize,
    provider: P,
    quadrature: OneDimensionalNodes,
}

impl BsplineClenshawCurtisBasis<ClenshawCurtisTable>
{
    /// Create a basis of the given degree, normalizing invalid degrees (see [`normalize_degree`]).
    pub fn new(degree: usize) -> Self
    {
        Self::with_provider(degree, ClenshawCurtisTable)
    }

    /// Create a basis, failing with [`SGError::InvalidDegree`] unless `degree` is odd and positive.
    pub fn try_new(degree: usize) -> Result<Self, SGError>
    {
        Self::try_with_provider(degree, ClenshawCurtisTable)
    }
}

impl<P: AbscissaProvider + Default> Default for BsplineClenshawCurtisBasis<P>
{
    fn default() -> Self {
        Self::build(1, P::default())
    }
}

impl<P: AbscissaProvider> BsplineClenshawCurtisBasis<P>
{
    /// Create a basis over `provider`, normalizing invalid degrees (see [`normalize_degree`]).
    pub fn with_provider(degree: usize, provider: P) -> Self
    {
        let normalized = normalize_degree(degree);
        if normalized != degree
        {
            log::warn!("B-spline degree {degree} is not odd and positive, using degree {normalized}");
        }
        Self::build(normalized, provider)
    }

    /// Create a basis over `provider`, failing with [`SGError::InvalidDegree`] unless `degree` is odd and positive.
    pub fn try_with_provider(degree: usize, provider: P) -> Result<Self, SGError>
    {
        if normalize_degree(degree) != degree
        {
            return Err(SGError::InvalidDegree(degree));
        }
        Ok(Self::build(degree, provider))
    }

    fn build(degree: usize, provider: P) -> Self
    {
        // (p+1)/2 Gauss-Legendre nodes are exact for the degree p pieces
        let quadrature = GaussLegendre.nodes_and_weights((degree + 1) / 2);
        Self { degree, provider, quadrature }
    }

    #[inline]
    pub fn degree(&self) -> usize
    {
        self.degree
    }

    pub fn provider(&self) -> &P
    {
        &self.provider
    }

    /// Gauss-Legendre rule on [0,1] used by [`Self::integral`].
    pub fn quadrature(&self) -> &OneDimensionalNodes
    {
        &self.quadrature
    }

    pub fn parameters(&self) -> BsplineClenshawCurtisParameters
    {
        BsplineClenshawCurtisParameters { degree: self.degree }
    }

    /// The `degree + 2` knots of the (unmodified) B-spline centered on `index`.
    pub fn knots<L: GridInt, I: GridInt>(&self, level: L, index: I) -> Vec<f64>
    {
        KnotSequence::new(&self.provider, level_u32(level)).knots(index_i64(index), self.degree)
    }

    #[inline]
    pub fn eval<L: GridInt, I: GridInt>(&self, level: L, index: I, x: f64) -> f64
    {
        self.evaluate(level_u32(level), index_i64(index), x, Derivative::Value)
    }

    #[inline]
    pub fn eval_deriv<L: GridInt, I: GridInt>(&self, level: L, index: I, x: f64) -> f64
    {
        self.evaluate(level_u32(level), index_i64(index), x, Derivative::First)
    }

    #[inline]
    pub fn eval_second_deriv<L: GridInt, I: GridInt>(&self, level: L, index: I, x: f64) -> f64
    {
        self.evaluate(level_u32(level), index_i64(index), x, Derivative::Second)
    }

    /// Integral over [0,1], by Gauss-Legendre quadrature on each knot span inside the domain.
    pub fn integral<L: GridInt, I: GridInt>(&self, level: L, index: I) -> f64
    {
        self.integrate(level_u32(level), index_i64(index))
    }

    fn evaluate(&self, level: u32, index: i64, x: f64, derivative: Derivative) -> f64
    {
        if level <= 1
        {
            return match derivative
            {
                Derivative::Value => 1.0,
                _ => 0.0,
            };
        }
        let knots = KnotSequence::new(&self.provider, level);
        let h_inv = knots.h_inv();
        if index == 1
        {
            self.modified_bspline(&knots, x, derivative)
        }
        else if index == h_inv - 1
        {
            let y = self.modified_bspline(&knots, 1.0 - x, derivative);
            if derivative == Derivative::First { -y } else { y }
        }
        else
        {
            let p = self.degree;
            let mut xi = vec![0.0; p + 2];
            knots.construct_knots(index, p, &mut xi);
            NonUniformBSpline::new(&xi).eval(derivative, x, p, 0)
        }
    }

    /// Left boundary function: `B_1 + 2 B_0 + sum_{k=2}^{(p+2)/2} (k+1) B_{-(k-1)}`.
    fn modified_bspline(&self, knots: &KnotSequence<'_, P>, x: f64, derivative: Derivative) -> f64
    {
        let p = self.degree;
        let mut xi = vec![0.0; p + 2];

        knots.construct_knots(1, p, &mut xi);
        let mut y = NonUniformBSpline::new(&xi).eval(derivative, x, p, 0);

        knots.construct_knots(0, p, &mut xi);
        y += 2.0 * NonUniformBSpline::new(&xi).eval(derivative, x, p, 0);

        for k in 2..=(p + 2) / 2
        {
            knots.construct_knots_negative_index(k as i64 - 1, p, &mut xi);
            y += (k + 1) as f64 * NonUniformBSpline::new(&xi).eval(derivative, x, p, 0);
        }
        y
    }

    fn integrate(&self, level: u32, index: i64) -> f64
    {
        if level <= 1
        {
            return 1.0;
        }
        let p = self.degree as i64;
        let half = (p + 1) / 2;
        let knots = KnotSequence::new(&self.provider, level);
        let h_inv = knots.h_inv();
        let xi = knots.knots(index, self.degree);

        let first_span = i64::max(0, half - index);
        let last_span = i64::min(p, h_inv + half - index - 1);
        let mut result = 0.0;
        for j in first_span..=last_span
        {
            let left = f64::max(0.0, xi[j as usize]);
            let right = f64::min(1.0, xi[j as usize + 1]);
            if right <= left
            {
                continue;
            }
            result += self.quadrature.integrate(left, right, |x| self.evaluate(level, index, x, Derivative::Value));
        }
        result
    }
}

#[cfg(feature="rayon")]
impl<P: AbscissaProvider + Sync> BsplineClenshawCurtisBasis<P>
{
    /// Evaluate one basis function at many points in parallel.
    pub fn eval_batch<L: GridInt, I: GridInt>(&self, level: L, index: I, x: &[f64]) -> Vec<f64>
    {
        use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
        let (level, index) = (level_u32(level), index_i64(index));
        x.par_iter().map(|&x| self.evaluate(level, index, x, Derivative::Value)).collect()
    }

    pub fn eval_deriv_batch<L: GridInt, I: GridInt>(&self, level: L, index: I, x: &[f64]) -> Vec<f64>
    {
        use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
        let (level, index) = (level_u32(level), index_i64(index));
        x.par_iter().map(|&x| self.evaluate(level, index, x, Derivative::First)).collect()
    }

    /// Integrals of several basis functions of one level, computed in parallel.
    pub fn integrals<L: GridInt, I: GridInt>(&self, level: L, indices: &[I]) -> Vec<f64>
    {
        use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
        let level = level_u32(level);
        indices.par_iter().map(|&index| self.integrate(level, index_i64(index))).collect()
    }
}

impl<P: AbscissaProvider, L: GridInt, I: GridInt> Basis<L, I> for BsplineClenshawCurtisBasis<P>
{
    fn eval(&self, level: L, index: I, x: f64) -> f64 {
        self.evaluate(level_u32(level), index_i64(index), x, Derivative::Value)
    }

    fn eval_deriv(&self, level: L, index: I, x: f64) -> f64 {
        self.evaluate(level_u32(level), index_i64(index), x, Derivative::First)
    }

    fn degree(&self) -> usize {
        self.degree
    }

    fn integral(&self, level: L, index: I) -> f64 {
        self.integrate(level_u32(level), index_i64(index))
    }
}

impl<P: AbscissaProvider, L: GridInt, I: GridInt> BasisSecondDerivative<L, I> for BsplineClenshawCurtisBasis<P>
{
    fn eval_second_deriv(&self, level: L, index: I, x: f64) -> f64 {
        self.evaluate(level_u32(level), index_i64(index), x, Derivative::Second)
    }
}

impl<P: AbscissaProvider> Serialize for BsplineClenshawCurtisBasis<P>
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.parameters().serialize(serializer)
    }
}

impl<'de, P: AbscissaProvider + Default> Deserialize<'de> for BsplineClenshawCurtisBasis<P>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parameters = BsplineClenshawCurtisParameters::deserialize(deserializer)?;
        log::trace!("restoring B-spline Clenshaw-Curtis basis of degree {}", parameters.degree);
        Self::try_with_provider(parameters.degree, P::default()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
fn grid_points(level: u32) -> Vec<f64>
{
    let h_inv = 1_i64 << level;
    (0..=h_inv).map(|i| crate::tables::clenshaw_curtis_table::cc_point(i, h_inv)).collect()
}

#[cfg(test)]
fn near_knot(basis: &BsplineClenshawCurtisBasis, level: u32, x: f64, distance: f64) -> bool
{
    let knots = KnotSequence::new(basis.provider(), level);
    let reach = basis.degree() as i64 + 2;
    (-reach..=knots.h_inv() + reach).any(|m|
    {
        let knot = if m < 0 { knots.point_negative_index(-m) } else { knots.point(m) };
        (knot - x).abs() < distance
    })
}

#[test]
fn check_degree_normalization()
{
    for (requested, expected) in [(0, 1), (1, 1), (2, 1), (3, 3), (4, 3), (5, 5), (6, 5)]
    {
        assert_eq!(BsplineClenshawCurtisBasis::new(requested).degree(), expected);
    }
    assert_eq!(BsplineClenshawCurtisBasis::<ClenshawCurtisTable>::default().degree(), 1);
    assert_eq!(BsplineClenshawCurtisBasis::try_new(0).unwrap_err(), SGError::InvalidDegree(0));
    assert_eq!(BsplineClenshawCurtisBasis::try_new(4).unwrap_err(), SGError::InvalidDegree(4));
    assert_eq!(BsplineClenshawCurtisBasis::try_new(5).unwrap().degree(), 5);
    assert_eq!(BsplineClenshawCurtisBasis::new(5).quadrature().len(), 3);
}

#[test]
fn check_level_one_is_constant()
{
    for degree in [1, 3, 5]
    {
        let basis = BsplineClenshawCurtisBasis::new(degree);
        for index in 0..4_u32
        {
            for x in [0.0, 0.3, 0.5, 0.99, 1.0]
            {
                assert_eq!(basis.eval(1_u32, index, x), 1.0);
                assert_eq!(basis.eval_deriv(1_u32, index, x), 0.0);
                assert_eq!(basis.eval_second_deriv(1_u32, index, x), 0.0);
            }
            assert_eq!(basis.integral(1_u32, index), 1.0);
        }
    }
    assert_eq!(BsplineClenshawCurtisBasis::new(3).eval(1_u8, 0_u8, 0.3), 1.0);
}

#[test]
fn check_compact_support()
{
    for degree in [1, 3, 5]
    {
        let basis = BsplineClenshawCurtisBasis::new(degree);
        for level in 2..=5_u32
        {
            let h_inv = 1_u32 << level;
            for index in 1..h_inv
            {
                let xi = basis.knots(level, index);
                let last = xi[xi.len() - 1];
                // blended boundary functions reach past the knots of their main spline on the outer side
                let mut outside = Vec::new();
                if index != 1
                {
                    outside.extend([xi[0] - 1e-9, xi[0] - 0.3]);
                }
                if index != h_inv - 1
                {
                    outside.extend([last, last + 1e-9, last + 0.3]);
                }
                for x in outside
                {
                    assert_eq!(basis.eval(level, index, x), 0.0, "level {level} index {index} x {x}");
                    assert_eq!(basis.eval_deriv(level, index, x), 0.0);
                    assert_eq!(basis.eval_second_deriv(level, index, x), 0.0);
                }
            }
        }
    }
}

#[test]
fn check_partition_of_unity_away_from_boundary()
{
    for degree in [1, 3, 5]
    {
        let basis = BsplineClenshawCurtisBasis::new(degree);
        let half = (degree + 1) / 2;
        for level in 2..=5_u32
        {
            let h_inv = 1_usize << level;
            let points = grid_points(level);
            if h_inv <= 2 * half
            {
                continue;
            }
            let (a, b) = (points[half], points[h_inv - half]);
            for s in 0..=10
            {
                let x = a + (b - a) * s as f64 / 10.0;
                let sum: f64 = (1..h_inv as u32).map(|index| basis.eval(level, index, x)).sum();
                assert!((sum - 1.0).abs() < 1e-12, "degree {degree} level {level} x {x}: {sum}");
            }
        }
    }
}

#[test]
fn check_derivatives_against_finite_differences()
{
    let h = 1e-6;
    let samples = [0.013, 0.071, 0.137, 0.29, 0.4567, 0.61, 0.777, 0.9, 0.983];
    for degree in [1, 3, 5]
    {
        let basis = BsplineClenshawCurtisBasis::new(degree);
        for level in 2..=4_u32
        {
            for index in 1..(1_u32 << level)
            {
                for x in samples
                {
                    if near_knot(&basis, level, x, 1e-5)
                    {
                        continue;
                    }
                    let dx = basis.eval_deriv(level, index, x);
                    let fd = (basis.eval(level, index, x + h) - basis.eval(level, index, x - h)) / (2.0 * h);
                    assert!((fd - dx).abs() < 1e-4 * dx.abs().max(1.0), "degree {degree} level {level} index {index} x {x}: {fd} vs {dx}");

                    let dxdx = basis.eval_second_deriv(level, index, x);
                    let fd2 = (basis.eval_deriv(level, index, x + h) - basis.eval_deriv(level, index, x - h)) / (2.0 * h);
                    assert!((fd2 - dxdx).abs() < 1e-4 * dxdx.abs().max(1.0), "degree {degree} level {level} index {index} x {x}: {fd2} vs {dxdx}");
                }
            }
        }
    }
}

#[test]
fn check_integral_against_reference_quadrature()
{
    let reference_rule = crate::one_dimensional_nodes::gauss_legendre(8);
    for degree in [1, 3, 5]
    {
        let basis = BsplineClenshawCurtisBasis::new(degree);
        for level in 1..=6_u32
        {
            let points = grid_points(level);
            for index in 1..(1_u32 << level)
            {
                let reference: f64 = points.windows(2)
                    .map(|cell| reference_rule.integrate(cell[0], cell[1], |x| basis.eval(level, index, x)))
                    .sum();
                let integral = basis.integral(level, index);
                assert!(integral > 0.0);
                assert!((integral - reference).abs() < 1e-10 * reference.abs(), "degree {degree} level {level} index {index}: {integral} vs {reference}");
            }
        }
    }
}

#[test]
fn check_unimodal_shape()
{
    let basis = BsplineClenshawCurtisBasis::new(3);
    for (level, index) in [(3_u32, 3_u32), (3, 4), (4, 6), (5, 13), (5, 16)]
    {
        let xi = basis.knots(level, index);
        let center = xi[2];
        let near_edge = xi[0] + 0.01 * (xi[1] - xi[0]);
        let at_center = basis.eval(level, index, center);
        let at_edge = basis.eval(level, index, near_edge);
        assert!(at_center > at_edge && at_edge >= 0.0, "level {level} index {index}");
    }
}

#[test]
fn check_uniform_provider()
{
    use super::knots::UniformPoints;
    let cubic = BsplineClenshawCurtisBasis::with_provider(3, UniformPoints);
    // interior functions reduce to cardinal B-splines
    assert!((cubic.eval(3_u32, 4_u32, 0.5) - 2.0 / 3.0).abs() < 1e-14);
    assert!((cubic.eval(3_u32, 4_u32, 0.375) - 1.0 / 6.0).abs() < 1e-14);
    assert!((cubic.integral(3_u32, 4_u32) - 0.125).abs() < 1e-14);

    // modified linear boundary functions are 2 - x/h and its mirror image
    let linear = BsplineClenshawCurtisBasis::with_provider(1, UniformPoints);
    let h = 0.125;
    for x in [0.0, 0.05, 0.125, 0.2]
    {
        assert!((linear.eval(3_u32, 1_u32, x) - (2.0 - x / h)).abs() < 1e-14);
        assert!((linear.eval_deriv(3_u32, 1_u32, x) + 1.0 / h).abs() < 1e-12);
        assert!((linear.eval(3_u32, 7_u32, 1.0 - x) - (2.0 - x / h)).abs() < 1e-14);
        assert!((linear.eval_deriv(3_u32, 7_u32, 1.0 - x) - 1.0 / h).abs() < 1e-12);
    }
    assert!((linear.integral(3_u32, 1_u32) - 2.0 * h).abs() < 1e-14);
}

#[test]
fn check_uniform_boundary_blend_weights()
{
    use super::knots::UniformPoints;
    let h = 0.125;
    // cardinal B-spline of degree p centered on grid index j, with spacing h
    let cardinal = |p: usize, j: i64, x: f64|
    {
        let half = (p as i64 + 1) / 2;
        let xi: Vec<f64> = (0..p as i64 + 2).map(|k| (j - half + k) as f64 * h).collect();
        NonUniformBSpline::new(&xi).value(x, p, 0)
    };

    // cardinal cubic values 1/6, 2/3, 1/6 at the knots give 2 - x/h on [0, h]
    let cubic = BsplineClenshawCurtisBasis::with_provider(3, UniformPoints);
    for (x, expected) in [(0.0, 2.0), (0.5 * h, 1.5), (h, 1.0)]
    {
        assert!((cubic.eval(3_u32, 1_u32, x) - expected).abs() < 1e-14, "x {x}");
        assert!((cubic.eval(3_u32, 7_u32, 1.0 - x) - expected).abs() < 1e-13, "x {x}");
    }
    assert!((cubic.eval_deriv(3_u32, 1_u32, 0.5 * h) + 1.0 / h).abs() < 1e-12);

    // quintic knot values 1/120, 26/120, 66/120
    let quintic = BsplineClenshawCurtisBasis::with_provider(5, UniformPoints);
    assert!((quintic.eval(3_u32, 1_u32, 0.0) - 2.0).abs() < 1e-14);
    assert!((quintic.eval(3_u32, 1_u32, h) - 121.0 / 120.0).abs() < 1e-14);

    for (degree, weights) in [(3, vec![(1, 1.0), (0, 2.0), (-1, 3.0)]), (5, vec![(1, 1.0), (0, 2.0), (-1, 3.0), (-2, 4.0)])]
    {
        let basis = BsplineClenshawCurtisBasis::with_provider(degree, UniformPoints);
        for x in [0.01, 0.07, 0.2, 0.33, 0.41]
        {
            let expected: f64 = weights.iter().map(|&(j, w)| w * cardinal(degree, j, x)).sum();
            assert!((basis.eval(3_u32, 1_u32, x) - expected).abs() < 1e-13, "degree {degree} x {x}");
        }
    }
}

#[test]
fn check_boundary_functions_are_mirror_images()
{
    for degree in [1, 3, 5]
    {
        let basis = BsplineClenshawCurtisBasis::new(degree);
        for level in 2..=5_u32
        {
            let last = (1_u32 << level) - 1;
            for x in [0.01, 0.1, 0.25, 0.4]
            {
                assert!((basis.eval(level, 1_u32, x) - basis.eval(level, last, 1.0 - x)).abs() < 1e-10);
                assert!((basis.eval_deriv(level, 1_u32, x) + basis.eval_deriv(level, last, 1.0 - x)).abs() < 1e-6 * basis.eval_deriv(level, 1_u32, x).abs().max(1.0));
            }
            assert!((basis.integral(level, 1_u32) - basis.integral(level, last)).abs() < 1e-12);
        }
    }
}

#[test]
fn check_trait_dispatch()
{
    fn second<B: BasisSecondDerivative<u16, u16>>(basis: &B, x: f64) -> (usize, f64, f64)
    {
        (basis.degree(), basis.eval(3, 3, x), basis.eval_second_deriv(3, 3, x))
    }
    let basis = BsplineClenshawCurtisBasis::new(5);
    let (degree, value, dxdx) = second(&basis, 0.3);
    assert_eq!(degree, 5);
    assert_eq!(value, basis.eval(3_u32, 3_u32, 0.3));
    assert_eq!(dxdx, basis.eval_second_deriv(3_u32, 3_u32, 0.3));
    assert_eq!(Basis::<u16, u16>::integral(&basis, 3, 3), basis.integral(3_u32, 3_u32));
}

#[test]
fn check_level_zero_is_constant()
{
    let basis = BsplineClenshawCurtisBasis::new(3);
    assert_eq!(basis.eval(0_u32, 0_u32, 0.4), 1.0);
    assert_eq!(basis.eval_deriv(0_u32, 0_u32, 0.4), 0.0);
    assert_eq!(basis.integral(0_u32, 0_u32), 1.0);
}

#[cfg(feature="rayon")]
#[test]
fn check_concurrent_evaluation_matches_sequential()
{
    use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BsplineClenshawCurtisBasis>();

    let basis = BsplineClenshawCurtisBasis::new(5);
    let mut triples = Vec::new();
    for level in 1..=6_u32
    {
        for index in 1..(1_u32 << level)
        {
            for s in 0..25
            {
                triples.push((level, index, s as f64 / 24.0));
            }
        }
    }
    let sequential: Vec<(f64, f64, f64)> = triples.iter()
        .map(|&(l, i, x)| (basis.eval(l, i, x), basis.eval_deriv(l, i, x), basis.integral(l, i)))
        .collect();
    let concurrent: Vec<(f64, f64, f64)> = triples.par_iter()
        .map(|&(l, i, x)| (basis.eval(l, i, x), basis.eval_deriv(l, i, x), basis.integral(l, i)))
        .collect();
    assert_eq!(sequential, concurrent);

    let x: Vec<f64> = (0..1000).map(|s| s as f64 / 999.0).collect();
    let batch = basis.eval_batch(4_u32, 3_u32, &x);
    let deriv_batch = basis.eval_deriv_batch(4_u32, 1_u32, &x);
    for (k, &x) in x.iter().enumerate()
    {
        assert_eq!(batch[k], basis.eval(4_u32, 3_u32, x));
        assert_eq!(deriv_batch[k], basis.eval_deriv(4_u32, 1_u32, x));
    }
    let indices: Vec<u32> = (1..16).collect();
    let integrals = basis.integrals(4_u32, &indices);
    for (index, integral) in indices.iter().zip(integrals)
    {
        assert_eq!(integral, basis.integral(4_u32, *index));
    }
}
