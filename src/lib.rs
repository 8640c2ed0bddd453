//! Non-uniform B-spline basis functions on Clenshaw-Curtis sparse grid points.
//!
//! The central type is [`basis::bspline_clenshaw_curtis::BsplineClenshawCurtisBasis`], which
//! evaluates hierarchical B-splines of odd degree (and their first and second derivatives)
//! whose knots are Clenshaw-Curtis abscissas, and integrates them over `[0, 1]`.
pub mod basis;
pub mod errors;
pub mod one_dimensional_nodes;
pub mod serialization;
pub mod tables;
pub mod utilities;
