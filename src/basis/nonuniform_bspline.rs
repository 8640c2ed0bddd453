/// Order of differentiation requested from a B-spline evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Derivative
{
    Value,
    First,
    Second,
}

/// B-spline over an arbitrary (non-uniform) local knot vector, evaluated with the
/// Cox-de Boor recursion.
///
/// The spline of degree `p` starting at knot offset `k` lives on `[xi[k], xi[k+p+1])` and is
/// exactly zero (with all derivatives) outside of it. Coincident knots are not guarded
/// against and produce non-finite values.
#[derive(Clone, Copy, Debug)]
pub struct NonUniformBSpline<'a>
{
    xi: &'a [f64],
}

impl<'a> NonUniformBSpline<'a>
{
    pub fn new(xi: &'a [f64]) -> Self
    {
        Self { xi }
    }

    #[inline]
    fn outside_support(&self, x: f64, p: usize, k: usize) -> bool
    {
        x < self.xi[k] || x >= self.xi[k + p + 1]
    }

    #[inline]
    pub fn eval(&self, derivative: Derivative, x: f64, p: usize, k: usize) -> f64
    {
        match derivative
        {
            Derivative::Value => self.value(x, p, k),
            Derivative::First => self.dx(x, p, k),
            Derivative::Second => self.dxdx(x, p, k),
        }
    }

    pub fn value(&self, x: f64, p: usize, k: usize) -> f64
    {
        if self.outside_support(x, p, k)
        {
            return 0.0;
        }
        let xi = self.xi;
        match p
        {
            0 => 1.0,
            1 => if x < xi[k + 1]
            {
                (x - xi[k]) / (xi[k + 1] - xi[k])
            }
            else
            {
                (xi[k + 2] - x) / (xi[k + 2] - xi[k + 1])
            },
            _ =>
            {
                (x - xi[k]) / (xi[k + p] - xi[k]) * self.value(x, p - 1, k)
                    + (xi[k + p + 1] - x) / (xi[k + p + 1] - xi[k + 1]) * self.value(x, p - 1, k + 1)
            }
        }
    }

    pub fn dx(&self, x: f64, p: usize, k: usize) -> f64
    {
        if self.outside_support(x, p, k)
        {
            return 0.0;
        }
        let xi = self.xi;
        match p
        {
            0 => 0.0,
            1 => if x < xi[k + 1]
            {
                -1.0 / (xi[k] - xi[k + 1])
            }
            else
            {
                1.0 / (xi[k + 1] - xi[k + 2])
            },
            _ =>
            {
                let pd = p as f64;
                pd / (xi[k + p] - xi[k]) * self.value(x, p - 1, k)
                    - pd / (xi[k + p + 1] - xi[k + 1]) * self.value(x, p - 1, k + 1)
            }
        }
    }

    pub fn dxdx(&self, x: f64, p: usize, k: usize) -> f64
    {
        if p <= 1 || self.outside_support(x, p, k)
        {
            return 0.0;
        }
        let xi = self.xi;
        let pd = p as f64;
        let alpha_k_p = pd / (xi[k + p] - xi[k]);
        let alpha_k1_p = pd / (xi[k + p + 1] - xi[k + 1]);
        let alpha_k_pm1 = (pd - 1.0) / (xi[k + p - 1] - xi[k]);
        let alpha_k1_pm1 = (pd - 1.0) / (xi[k + p] - xi[k + 1]);
        let alpha_k2_pm1 = (pd - 1.0) / (xi[k + p + 1] - xi[k + 2]);

        alpha_k_p * alpha_k_pm1 * self.value(x, p - 2, k)
            - (alpha_k_p + alpha_k1_p) * alpha_k1_pm1 * self.value(x, p - 2, k + 1)
            + alpha_k1_p * alpha_k2_pm1 * self.value(x, p - 2, k + 2)
    }
}

#[cfg(test)]
fn uniform_knots(p: usize) -> Vec<f64>
{
    (0..p + 2).map(|k| k as f64).collect()
}

#[test]
fn check_uniform_cubic_values()
{
    // cardinal cubic B-spline on 0..4
    let xi = uniform_knots(3);
    let spline = NonUniformBSpline::new(&xi);
    let expected = [(0.0, 0.0), (1.0, 1.0 / 6.0), (2.0, 2.0 / 3.0), (3.0, 1.0 / 6.0), (0.5, 1.0 / 48.0)];
    for (x, e) in expected
    {
        assert!((spline.value(x, 3, 0) - e).abs() < 1e-15, "x={x}");
    }
    assert!((spline.dx(1.0, 3, 0) - 0.5).abs() < 1e-15);
    assert!(spline.dx(2.0, 3, 0).abs() < 1e-15);
    assert!((spline.dxdx(2.0, 3, 0) + 2.0).abs() < 1e-14);
    assert!((spline.dxdx(1.0, 3, 0) - 1.0).abs() < 1e-14);
}

#[test]
fn check_outside_support_is_zero()
{
    let xi = [-0.3, -0.1, 0.2, 0.25, 0.6, 0.9, 1.0];
    let spline = NonUniformBSpline::new(&xi);
    for p in [1, 3, 5]
    {
        for x in [-1.0, -0.30001, xi[p + 1], xi[p + 1] + 0.5]
        {
            assert_eq!(spline.value(x, p, 0), 0.0);
            assert_eq!(spline.dx(x, p, 0), 0.0);
            assert_eq!(spline.dxdx(x, p, 0), 0.0);
        }
    }
}

#[test]
fn check_partition_of_unity_on_nonuniform_knots()
{
    let xi: Vec<f64> = (0..16).map(|k| (k as f64 * 0.37).powf(1.3)).collect();
    let spline = NonUniformBSpline::new(&xi);
    for p in [1, 2, 3, 5]
    {
        // full partition holds on [xi[p], xi[n-p-1]]
        let n = xi.len();
        let (a, b) = (xi[p], xi[n - p - 1]);
        for s in 0..=20
        {
            let x = a + (b - a) * s as f64 / 20.0 * 0.999;
            let sum: f64 = (0..n - p - 1).map(|k| spline.value(x, p, k)).sum();
            let dsum: f64 = (0..n - p - 1).map(|k| spline.dx(x, p, k)).sum();
            assert!((sum - 1.0).abs() < 1e-13, "p={p} x={x} sum={sum}");
            assert!(dsum.abs() < 1e-10, "p={p} x={x} dsum={dsum}");
        }
    }
}

#[test]
fn check_derivatives_against_finite_differences()
{
    let xi = [0.0, 0.1, 0.35, 0.4, 0.7, 0.85, 1.2, 1.3];
    let spline = NonUniformBSpline::new(&xi);
    let h = 1e-6;
    for p in [3, 5]
    {
        for x in [0.05, 0.2, 0.37, 0.55, 0.8, 1.0]
        {
            if x >= xi[p + 1]
            {
                continue;
            }
            let fd = (spline.value(x + h, p, 0) - spline.value(x - h, p, 0)) / (2.0 * h);
            assert!((fd - spline.dx(x, p, 0)).abs() < 1e-5 * spline.dx(x, p, 0).abs().max(1.0));
            let fd2 = (spline.dx(x + h, p, 0) - spline.dx(x - h, p, 0)) / (2.0 * h);
            assert!((fd2 - spline.dxdx(x, p, 0)).abs() < 1e-4 * spline.dxdx(x, p, 0).abs().max(1.0));
        }
    }
}
