use std::f64::consts::PI;

use static_init::dynamic;

/// Levels held in the global table. Points of higher levels are not cached; each lookup
/// evaluates the cosine formula directly.
pub const CC_MAX_LEVEL: u32 = 16;

/// Source of grid abscissas for a hierarchical `(level, index)` pair.
///
/// Only called for `1 <= index <= h_inv - 1`; points outside that range are extrapolated
/// by the knot construction.
pub trait AbscissaProvider
{
    fn point(&self, level: u32, index: i64, h_inv: i64) -> f64;
}

/// Clenshaw-Curtis abscissa on (0,1).
#[inline(always)]
pub fn cc_point(index: i64, h_inv: i64) -> f64
{
    0.5 * (f64::cos(PI * (1.0 - index as f64 / h_inv as f64)) + 1.0)
}

/// All Clenshaw-Curtis abscissas of a level, including both endpoints.
pub(crate) fn cc_points(level: u32) -> Vec<f64>
{
    let h_inv = 1_i64 << level;
    (0..=h_inv).map(|index| cc_point(index, h_inv)).collect()
}

pub struct ClenshawCurtisCache{ points: Vec<Vec<f64>> }

impl ClenshawCurtisCache
{
    pub fn new(max_level: u32) -> Self
    {
        let points = (0..=max_level).map(cc_points).collect();
        log::debug!("populated Clenshaw-Curtis table up to level {max_level}");
        Self{ points }
    }

    #[inline]
    pub fn point(&self, level: u32, index: i64, h_inv: i64) -> f64
    {
        match self.points.get(level as usize).and_then(|points| points.get(index as usize))
        {
            Some(&x) => x,
            None => cc_point(index, h_inv),
        }
    }

    pub(crate) fn len(&self) -> usize
    {
        self.points.len()
    }
}

#[dynamic(lazy)]
pub(crate) static CC_CACHE: ClenshawCurtisCache = ClenshawCurtisCache::new(CC_MAX_LEVEL);

/// Default provider backed by the process-wide Clenshaw-Curtis table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClenshawCurtisTable;

impl AbscissaProvider for ClenshawCurtisTable
{
    #[inline]
    fn point(&self, level: u32, index: i64, h_inv: i64) -> f64
    {
        CC_CACHE.point(level, index, h_inv)
    }
}

#[test]
fn check_cc_points()
{
    let level = 2;
    let points = cc_points(level);
    let expected = [0.0, 0.14644660940672624, 0.5, 0.8535533905932737, 1.0];
    assert_eq!(points.len(), 5);
    for (x, e) in points.iter().zip(expected)
    {
        assert!((x - e).abs() < 1e-15);
    }
}

#[test]
fn check_cc_symmetry()
{
    for level in 1..=8
    {
        let h_inv = 1_i64 << level;
        for index in 0..=h_inv
        {
            let left = ClenshawCurtisTable.point(level, index, h_inv);
            let right = ClenshawCurtisTable.point(level, h_inv - index, h_inv);
            assert!((left + right - 1.0).abs() < 1e-14);
        }
    }
}

#[test]
fn check_table_matches_formula_beyond_max_level()
{
    assert_eq!(CC_CACHE.len(), CC_MAX_LEVEL as usize + 1);
    let level = CC_MAX_LEVEL + 2;
    let h_inv = 1_i64 << level;
    for index in [1, 7, h_inv / 2, h_inv - 1]
    {
        assert_eq!(ClenshawCurtisTable.point(level, index, h_inv), cc_point(index, h_inv));
    }
    let h_inv = 1_i64 << CC_MAX_LEVEL;
    assert_eq!(ClenshawCurtisTable.point(CC_MAX_LEVEL, 3, h_inv), cc_point(3, h_inv));
}
