//! Uniform spline segments and the characteristic matrices converting them
//! to and from the monomial form of [`PolynomialCurve`](crate::curve::PolynomialCurve).
pub mod bezier_quad;
pub mod characteristic_matrix;
pub mod cubic_segment;

pub use bezier_quad::*;
pub use characteristic_matrix::*;
pub use cubic_segment::*;
