use crate::tables::clenshaw_curtis_table::AbscissaProvider;

/// Knot positions of the Clenshaw-Curtis grid at one level, extended linearly past both
/// ends of [0,1] with the spacing of the outermost grid cell.
pub struct KnotSequence<'a, P: AbscissaProvider>
{
    provider: &'a P,
    level: u32,
    h_inv: i64,
}

impl<'a, P: AbscissaProvider> KnotSequence<'a, P>
{
    pub fn new(provider: &'a P, level: u32) -> Self
    {
        Self { provider, level, h_inv: crate::utilities::grid_int::h_inv(level) }
    }

    #[inline]
    pub fn h_inv(&self) -> i64
    {
        self.h_inv
    }

    #[inline]
    fn boundary_points(&self) -> (f64, f64)
    {
        (self.provider.point(self.level, 1, self.h_inv), self.provider.point(self.level, 2, self.h_inv))
    }

    /// Grid point at `index >= 0`.
    pub fn point(&self, index: i64) -> f64
    {
        if self.level == 1
        {
            index as f64 / 2.0
        }
        else if index == 0
        {
            let (x1, x2) = self.boundary_points();
            2.0 * x1 - x2
        }
        else if index >= self.h_inv
        {
            let (x1, x2) = self.boundary_points();
            let h_boundary = x2 - x1;
            (1.0 - x1) + h_boundary * (index - self.h_inv + 1) as f64
        }
        else
        {
            self.provider.point(self.level, index, self.h_inv)
        }
    }

    /// Grid point at index `-ni`, for `ni >= 0`.
    pub fn point_negative_index(&self, ni: i64) -> f64
    {
        let (x1, x2) = self.boundary_points();
        let h_boundary = x2 - x1;
        x1 - h_boundary * (ni + 1) as f64
    }

    /// Fill `xi` (length `degree + 2`) with the knots of the B-spline centered at `index`.
    pub fn construct_knots(&self, index: i64, degree: usize, xi: &mut [f64])
    {
        let half = (degree as i64 + 1) / 2;
        for (k, knot) in xi.iter_mut().enumerate().take(degree + 2)
        {
            let k = k as i64;
            *knot = if index + k >= half
            {
                self.point(index + k - half)
            }
            else
            {
                self.point_negative_index(half - index - k)
            };
        }
    }

    /// Fill `xi` with the knots of the B-spline centered at index `-ni`.
    pub fn construct_knots_negative_index(&self, ni: i64, degree: usize, xi: &mut [f64])
    {
        let half = (degree as i64 + 1) / 2;
        for (k, knot) in xi.iter_mut().enumerate().take(degree + 2)
        {
            let k = k as i64;
            *knot = if k >= half + ni
            {
                self.point(k - ni - half)
            }
            else
            {
                self.point_negative_index(half + ni - k)
            };
        }
    }

    pub fn knots(&self, index: i64, degree: usize) -> Vec<f64>
    {
        let mut xi = vec![0.0; degree + 2];
        self.construct_knots(index, degree, &mut xi);
        xi
    }

    pub fn knots_negative_index(&self, ni: i64, degree: usize) -> Vec<f64>
    {
        let mut xi = vec![0.0; degree + 2];
        self.construct_knots_negative_index(ni, degree, &mut xi);
        xi
    }
}

#[cfg(test)]
pub(crate) struct UniformPoints;

#[cfg(test)]
impl AbscissaProvider for UniformPoints
{
    fn point(&self, _level: u32, index: i64, h_inv: i64) -> f64
    {
        index as f64 / h_inv as f64
    }
}

#[test]
fn check_uniform_knots_extend_past_boundaries()
{
    let knots = KnotSequence::new(&UniformPoints, 3);
    let h = 0.125;
    for index in -4..=12_i64
    {
        let x = if index < 0 { knots.point_negative_index(-index) } else { knots.point(index) };
        assert!((x - index as f64 * h).abs() < 1e-15, "index {index}: {x}");
    }
}

#[test]
fn check_knots_match_negative_index_variant()
{
    use crate::tables::clenshaw_curtis_table::ClenshawCurtisTable;
    let knots = KnotSequence::new(&ClenshawCurtisTable, 4);
    for degree in [1, 3, 5, 7]
    {
        // centered at index 0 both variants describe the same spline
        assert_eq!(knots.knots(0, degree), knots.knots_negative_index(0, degree));
        let xi = knots.knots_negative_index(2, degree);
        let half = (degree as i64 + 1) / 2;
        for (k, x) in xi.iter().enumerate()
        {
            let index = k as i64 - 2 - half;
            let expected = if index < 0 { knots.point_negative_index(-index) } else { knots.point(index) };
            assert_eq!(*x, expected);
        }
    }
}

#[test]
fn check_cc_knots_strictly_increasing()
{
    use crate::tables::clenshaw_curtis_table::ClenshawCurtisTable;
    for level in 2..=7
    {
        let knots = KnotSequence::new(&ClenshawCurtisTable, level);
        for degree in [1, 3, 5]
        {
            for index in 1..knots.h_inv()
            {
                let xi = knots.knots(index, degree);
                assert_eq!(xi.len(), degree + 2);
                assert!(xi.windows(2).all(|w| w[0] < w[1]), "level {level} index {index} degree {degree}");
            }
        }
    }
}

#[test]
fn check_boundary_extrapolation()
{
    use crate::tables::clenshaw_curtis_table::{cc_point, ClenshawCurtisTable};
    let level = 3;
    let knots = KnotSequence::new(&ClenshawCurtisTable, level);
    let (x1, x2) = (cc_point(1, 8), cc_point(2, 8));
    assert!((knots.point(0) - (2.0 * x1 - x2)).abs() < 1e-15);
    assert!((knots.point(8) - (1.0 - x1 + (x2 - x1))).abs() < 1e-15);
    assert!((knots.point(10) - (1.0 - x1 + 3.0 * (x2 - x1))).abs() < 1e-15);
    assert!((knots.point_negative_index(2) - (x1 - 3.0 * (x2 - x1))).abs() < 1e-15);
    // the right extension mirrors the left one
    for m in 0..4
    {
        assert!((knots.point(8 + m) + knots.point_negative_index(m) - 1.0).abs() < 1e-14);
    }
    let level_one = KnotSequence::new(&ClenshawCurtisTable, 1);
    assert_eq!(level_one.knots(1, 1), vec![0.0, 0.5, 1.0]);
}
