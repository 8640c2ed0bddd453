use criterion::{criterion_group, criterion_main, Criterion};
use sgspline::basis::bspline_clenshaw_curtis::BsplineClenshawCurtisBasis;

fn eval_level(basis: &BsplineClenshawCurtisBasis, level: u32, x: &[f64]) -> f64
{
    let mut sum = 0.0;
    for index in 1..(1_u32 << level)
    {
        for &x in x
        {
            sum += basis.eval(level, index, x) + basis.eval_deriv(level, index, x);
        }
    }
    sum
}

fn integrate_level(basis: &BsplineClenshawCurtisBasis, level: u32) -> f64
{
    (1..(1_u32 << level)).map(|index| basis.integral(level, index)).sum()
}

fn run_eval(c: &mut Criterion)
{
    let x: Vec<f64> = (0..100).map(|s| s as f64 / 99.0).collect();
    for degree in [1, 3, 5]
    {
        let basis = BsplineClenshawCurtisBasis::new(degree);
        c.bench_function(&format!("eval_p{degree}_level6"), |b| b.iter(|| eval_level(&basis, 6, &x)));
    }
}

fn run_integral(c: &mut Criterion)
{
    for degree in [1, 3, 5]
    {
        let basis = BsplineClenshawCurtisBasis::new(degree);
        c.bench_function(&format!("integral_p{degree}_level8"), |b| b.iter(|| integrate_level(&basis, 8)));
    }
}

criterion_group!(benches, run_eval, run_integral);
criterion_main!(benches);
