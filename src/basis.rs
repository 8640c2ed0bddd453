pub mod base;
pub mod bspline_clenshaw_curtis;
pub mod knots;
pub mod nonuniform_bspline;
