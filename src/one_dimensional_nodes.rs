use core::f64;
use f64::consts::PI;

/// Nodes and weights of a one-dimensional quadrature rule.
#[derive(Clone, Debug, PartialEq)]
pub struct OneDimensionalNodes
{
    pub x: Vec<f64>,
    pub weights: Vec<f64>,
}
impl OneDimensionalNodes
{
    pub fn new(num_points: usize) -> Self
    {
        Self { x: vec![0.0; num_points], weights: vec![0.0; num_points] }
    }

    pub fn len(&self) -> usize
    {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply the rule to `f` over `[left, right]`.
    #[inline]
    pub fn integrate<F: Fn(f64) -> f64>(&self, left: f64, right: f64, f: F) -> f64
    {
        let h = right - left;
        let mut sum = 0.0;
        for (x, w) in self.x.iter().zip(self.weights.iter())
        {
            sum += w * f(left + h * x);
        }
        h * sum
    }
}

pub trait QuadratureRule
{
    /// Nodes in [0,1] and weights summing to one.
    fn nodes_and_weights(&self, order: usize) -> OneDimensionalNodes;
}

/// Compute the Legendre polynomial P_n(x) and its derivative using recurrence
fn legendre_and_derivative(n: usize, x: f64) -> (f64, f64) {
    let mut p0 = 1.0;
    let mut p1 = x;
    let mut dp0 = 0.0;
    let mut dp1 = 1.0;

    for k in 2..=n {
        let kf = k as f64;
        let pk = ((2.0 * kf - 1.0) * x * p1 - (kf - 1.0) * p0) / kf;
        let dpk = ((2.0 * kf - 1.0) * (p1 + x * dp1) - (kf - 1.0) * dp0) / kf;

        p0 = p1;
        p1 = pk;
        dp0 = dp1;
        dp1 = dpk;
    }

    (p1, dp1)
}

/// Compute Gauss-Legendre nodes and weights on the interval (0, 1), sorted by node.
pub fn gauss_legendre(n: usize) -> OneDimensionalNodes {
    let mut rule = OneDimensionalNodes::new(n);
    let eps = 1e-14;

    // The roots of P_n come out in descending order from this initial guess, so fill from the back.
    for i in 0..n {
        let theta = PI * (i as f64 + 0.75) / (n as f64 + 0.5);
        let mut x = theta.cos();

        for _ in 0..100 {
            let (p, dp) = legendre_and_derivative(n, x);
            let dx = -p / dp;
            x += dx;
            if dx.abs() < eps {
                break;
            }
        }

        let (_, dp) = legendre_and_derivative(n, x);
        let w = 2.0 / ((1.0 - x * x) * dp * dp);

        rule.x[n - 1 - i] = 0.5 * (x + 1.0);
        rule.weights[n - 1 - i] = 0.5 * w;
    }
    rule
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GaussLegendre;

impl QuadratureRule for GaussLegendre
{
    fn nodes_and_weights(&self, order: usize) -> OneDimensionalNodes {
        gauss_legendre(order)
    }
}

#[test]
fn test_gauss_legendre() {
    let rule = GaussLegendre.nodes_and_weights(10);
    let expected_nodes = [0.0130467357414145,0.067468316655508,0.160295215850488,0.283302302935377,0.425562830509185,0.574437169490815,0.716697697064624,0.839704784149512,0.932531683344492,0.986953264258586];
    let expected_weights = [0.033335672154344,0.07472567457529,0.109543181257991,0.134633359654998,0.147762112357376,0.147762112357376,0.134633359654998,0.109543181257991,0.07472567457529,0.033335672154344];

    for (n1, n2) in rule.x.iter().zip(expected_nodes.iter()) {
        assert!((n1 - n2).abs() < 1e-12);
    }
    for (w1, w2) in rule.weights.iter().zip(expected_weights.iter()) {
        assert!((w1 - w2).abs() < 1e-12);
    }
}

#[test]
fn test_gauss_legendre_exactness()
{
    // n nodes integrate polynomials up to degree 2n-1 exactly
    for n in 1..=6
    {
        let rule = gauss_legendre(n);
        assert!((rule.weights.iter().sum::<f64>() - 1.0).abs() < 1e-14);
        let degree = 2 * n as i32 - 1;
        let integral = rule.integrate(0.25, 1.5, |x| x.powi(degree));
        let exact = (1.5_f64.powi(degree + 1) - 0.25_f64.powi(degree + 1)) / (degree + 1) as f64;
        assert!((integral - exact).abs() < 1e-13 * exact.abs().max(1.0));
    }
}

#[test]
fn test_single_node_is_midpoint()
{
    let rule = gauss_legendre(1);
    assert_eq!(rule.len(), 1);
    assert!((rule.x[0] - 0.5).abs() < 1e-15);
    assert!((rule.weights[0] - 1.0).abs() < 1e-15);
}
